//! Supabase verse store.
//!
//! Speaks the hosted backend's `PostgREST` interface (`/rest/v1/...`),
//! authenticated with the project anon key. Missing rows come back as empty
//! arrays, which downstream code treats as "no data", never as a failure.

use std::time::Duration as StdDuration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde_json::Value;

use crate::bible::books::Book;
use crate::config::Config;
use crate::constants::{remote, search};
use crate::error::{Error, Result};
use crate::store::{BibleVersion, DailyVerse, SearchHit, Verse, VerseStore};
use crate::types::{VerseId, VersionId};

/// Client for the hosted Supabase backend's REST interface.
#[derive(Clone)]
pub struct SupabaseStore {
    base_url: String,
    anon_key: String,
    client: Client,
}

impl SupabaseStore {
    /// Create a new Supabase store from config.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.supabase_url.clone(),
            anon_key: config.supabase_anon_key.clone(),
            client: Client::builder()
                .timeout(StdDuration::from_secs(remote::REQUEST_TIMEOUT_SECS))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Check if credentials are configured
    fn is_configured(&self) -> bool {
        !self.base_url.is_empty() && !self.anon_key.is_empty()
    }

    /// Make an authenticated GET request against one table
    async fn get(&self, table: &str, query: &[(&str, &str)]) -> Result<Value> {
        if !self.is_configured() {
            return Err(Error::config(
                "Supabase store not configured",
                "Set SUPABASE_URL and SUPABASE_ANON_KEY environment variables",
            ));
        }

        let url = format!("{}/rest/v1/{}", self.base_url, table);
        let resp = self
            .client
            .get(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .query(query)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Request to {table} failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::supabase_status(
                format!("Request to {table} returned {status}"),
                status.as_u16(),
            ));
        }

        resp.json()
            .await
            .map_err(|e| Error::parse(format!("Invalid JSON from {table}: {e}")))
    }
}

fn rows(json: &Value) -> &[Value] {
    json.as_array().map_or(&[], Vec::as_slice)
}

/// Extract an opaque row ID, falling back to a derived book_chapter_verse key.
fn row_id(row: &Value, fallback: impl FnOnce() -> String) -> VerseId {
    match &row["id"] {
        Value::String(s) => VerseId::new(s.clone()),
        Value::Number(n) => VerseId::new(n.to_string()),
        _ => VerseId::new(fallback()),
    }
}

fn parse_verse_rows(json: &Value, book: &Book) -> Vec<Verse> {
    rows(json)
        .iter()
        .filter_map(|row| {
            let chapter = u32::try_from(row["chapter"].as_u64()?).ok()?;
            let verse = u32::try_from(row["verse"].as_u64()?).ok()?;
            let text = row["text"].as_str()?.to_string();
            Some(Verse {
                id: row_id(row, || format!("{}_{}_{}", book.position, chapter, verse)),
                chapter,
                verse,
                text,
            })
        })
        .collect()
}

fn parse_search_rows(json: &Value) -> Vec<SearchHit> {
    rows(json)
        .iter()
        .filter_map(|row| {
            let book_name = row["bible_books"]["name"].as_str()?;
            let chapter = row["chapter"].as_u64()?;
            let verse = row["verse"].as_u64()?;
            let text = row["text"].as_str()?.to_string();
            Some(SearchHit {
                reference: format!("{book_name} {chapter}:{verse}"),
                text,
            })
        })
        .collect()
}

fn parse_version_rows(json: &Value) -> Vec<BibleVersion> {
    rows(json)
        .iter()
        .filter_map(|row| {
            let id = match &row["id"] {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                _ => return None,
            };
            let name = row["name"].as_str()?.to_string();
            let full_name = row["full_name"].as_str().unwrap_or(&name).to_string();
            let language = row["language"].as_str().unwrap_or("English").to_string();
            Some(BibleVersion { id: VersionId::new(id), name, full_name, language })
        })
        .collect()
}

fn parse_daily_row(json: &Value) -> Option<DailyVerse> {
    rows(json).first().and_then(|row| {
        let reference = row["reference"].as_str()?.to_string();
        let text = row["text"].as_str()?.to_string();
        Some(DailyVerse { reference, text })
    })
}

#[async_trait]
impl VerseStore for SupabaseStore {
    async fn fetch_versions(&self) -> Result<Vec<BibleVersion>> {
        let json = self
            .get("bible_versions", &[("select", "*"), ("order", "name")])
            .await?;
        Ok(parse_version_rows(&json))
    }

    async fn fetch_chapter_verses(
        &self,
        book: &Book,
        chapter: u32,
        version: &VersionId,
    ) -> Result<Vec<Verse>> {
        let book_param = format!("eq.{}", book.position);
        let chapter_param = format!("eq.{chapter}");
        let version_param = format!("eq.{version}");

        let json = self
            .get(
                "bible_verses",
                &[
                    ("select", "id,chapter,verse,text"),
                    ("book_id", book_param.as_str()),
                    ("chapter", chapter_param.as_str()),
                    ("version_id", version_param.as_str()),
                    ("order", "verse"),
                ],
            )
            .await?;

        Ok(parse_verse_rows(&json, book))
    }

    async fn search_verses(&self, query: &str, version: &VersionId) -> Result<Vec<SearchHit>> {
        let version_param = format!("eq.{version}");
        let text_param = format!("fts.{query}");
        let limit_param = search::REMOTE_RESULT_LIMIT.to_string();

        let json = self
            .get(
                "bible_verses",
                &[
                    ("select", "id,chapter,verse,text,bible_books!inner(name)"),
                    ("version_id", version_param.as_str()),
                    ("text", text_param.as_str()),
                    ("limit", limit_param.as_str()),
                ],
            )
            .await?;

        Ok(parse_search_rows(&json))
    }

    async fn fetch_daily_verse(&self, date: NaiveDate) -> Result<Option<DailyVerse>> {
        let date_param = format!("eq.{date}");

        let json = self
            .get(
                "daily_verses",
                &[("select", "*"), ("date", date_param.as_str()), ("limit", "1")],
            )
            .await?;

        Ok(parse_daily_row(&json))
    }

    fn name(&self) -> &'static str {
        "SupabaseStore"
    }
}
