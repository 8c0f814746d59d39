//! In-memory verse store backed by the embedded sample dataset.
//!
//! Used whenever Supabase credentials are absent, and handy for tests: all
//! lookups are pure table scans over static data.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::bible::books::{self, Book};
use crate::constants::search::MEMORY_RESULT_LIMIT;
use crate::error::Result;
use crate::store::{data, BibleVersion, DailyVerse, SearchHit, Verse, VerseStore};
use crate::types::{VerseId, VersionId};

/// Verse store requiring no credentials or network access.
#[derive(Debug, Default, Clone, Copy)]
pub struct MemoryStore;

impl MemoryStore {
    /// Create a new in-memory store.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn chapter_rows(book: &Book, chapter: u32) -> &'static [(u32, &'static str)] {
    data::SAMPLE_CHAPTERS
        .iter()
        .find(|((position, chap), _)| *position == book.position && *chap == chapter)
        .map_or(&[], |(_, rows)| *rows)
}

#[async_trait]
impl VerseStore for MemoryStore {
    async fn fetch_versions(&self) -> Result<Vec<BibleVersion>> {
        Ok(data::VERSIONS
            .iter()
            .map(|(id, name, full_name, language)| BibleVersion {
                id: VersionId::new(*id),
                name: (*name).to_string(),
                full_name: (*full_name).to_string(),
                language: (*language).to_string(),
            })
            .collect())
    }

    async fn fetch_chapter_verses(
        &self,
        book: &Book,
        chapter: u32,
        _version: &VersionId,
    ) -> Result<Vec<Verse>> {
        Ok(chapter_rows(book, chapter)
            .iter()
            .map(|(verse, text)| Verse {
                id: VerseId::new(format!("{}_{chapter}_{verse}", book.position)),
                chapter,
                verse: *verse,
                text: (*text).to_string(),
            })
            .collect())
    }

    async fn search_verses(&self, query: &str, _version: &VersionId) -> Result<Vec<SearchHit>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        // Popular verses match on text or reference, sample chapters on text.
        let mut hits = Vec::new();
        for (reference, text) in &data::POPULAR_VERSES {
            if text.to_lowercase().contains(&needle) || reference.to_lowercase().contains(&needle) {
                hits.push(SearchHit {
                    reference: (*reference).to_string(),
                    text: (*text).to_string(),
                });
            }
        }
        for ((position, chapter), rows) in &data::SAMPLE_CHAPTERS {
            let Some(book) = books::by_position(*position) else {
                continue;
            };
            for (verse, text) in *rows {
                if text.to_lowercase().contains(&needle) {
                    hits.push(SearchHit {
                        reference: format!("{} {chapter}:{verse}", book.name),
                        text: (*text).to_string(),
                    });
                }
            }
        }

        hits.truncate(MEMORY_RESULT_LIMIT);
        Ok(hits)
    }

    async fn fetch_daily_verse(&self, _date: NaiveDate) -> Result<Option<DailyVerse>> {
        // The daily rotation is derived from the popular-verse list by the
        // service; this store has no curated daily table.
        Ok(None)
    }

    fn name(&self) -> &'static str {
        "MemoryStore"
    }
}
