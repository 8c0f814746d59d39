//! `Berean` CLI - look up scripture references or search verse text.
//!
//! Usage: berean <reference or search text>
//!        berean --daily

use anyhow::{bail, Context, Result};
use chrono::Utc;

use berean::bible::{BibleService, QueryOutcome};
use berean::config::Config;
use berean::store::{BibleVersion, MemoryStore, SupabaseStore, VerseStore};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("Usage: berean <reference or search text>");
        eprintln!("       berean --daily");
        std::process::exit(2);
    }

    let config = Config::load().context("Failed to load configuration")?;

    let store: Box<dyn VerseStore> = if config.has_supabase_credentials() {
        tracing::info!("Using Supabase verse store at {}", config.supabase_url);
        Box::new(SupabaseStore::new(&config))
    } else {
        tracing::info!("No Supabase credentials found, using in-memory verse store");
        Box::new(MemoryStore::new())
    };
    let service = BibleService::new(store);

    if args[0] == "--daily" {
        let daily = service.daily_verse(Utc::now().date_naive()).await?;
        println!("{}", daily.reference);
        println!("  {}", daily.text);
        return Ok(());
    }

    let version = pick_version(&service, &config).await?;
    let query = args.join(" ");

    match service.query(&query, &version.id).await? {
        QueryOutcome::Passage(passage) => {
            println!("{} ({})", passage.reference(), version.name);
            if passage.verses.is_empty() {
                println!("  (no verses in that range)");
            }
            for verse in &passage.verses {
                println!("  {:>3}. {}", verse.verse, verse.text);
            }
        }
        QueryOutcome::SearchResults(hits) => {
            if hits.is_empty() {
                println!("No verses matched \"{query}\".");
            } else {
                println!("=== Search results ({}) ===", hits.len());
                for hit in &hits {
                    println!("  {} - {}", hit.reference, hit.text);
                }
            }
        }
        QueryOutcome::UnknownBook(token) => {
            println!("Couldn't find a book matching \"{token}\".");
        }
    }

    Ok(())
}

/// Pick the configured Bible version, falling back to the first available.
async fn pick_version(service: &BibleService, config: &Config) -> Result<BibleVersion> {
    let versions = service
        .versions()
        .await
        .context("Failed to list Bible versions")?;

    let preferred = versions
        .iter()
        .find(|v| v.name.eq_ignore_ascii_case(&config.bible_version))
        .or_else(|| versions.first());

    match preferred {
        Some(version) => Ok(version.clone()),
        None => bail!("No Bible versions available from the {} store", service.store_name()),
    }
}
