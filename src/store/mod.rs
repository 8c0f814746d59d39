//! Verse storage adapters.
//!
//! The core consumes verse text through the [`VerseStore`] capability trait.
//! Two implementations exist: [`MemoryStore`] (embedded sample dataset, no
//! credentials required) and [`SupabaseStore`] (hosted backend). The store is
//! chosen at construction time and injected into the service; absence of
//! data is always an empty result, never an error.

pub mod data;
pub mod memory;
pub mod supabase;

pub use memory::MemoryStore;
pub use supabase::SupabaseStore;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::bible::books::Book;
use crate::error::Result;
use crate::types::{VerseId, VersionId};

/// A single addressable unit of scripture text.
///
/// Never mutated once produced; either fetched from a store or synthesized
/// by the placeholder generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Opaque identifier, stable within one book/chapter/version.
    pub id: VerseId,
    /// Chapter number.
    pub chapter: u32,
    /// Verse number within the chapter.
    pub verse: u32,
    /// Display text (real scripture or generated placeholder).
    pub text: String,
}

/// A Bible translation available for lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibleVersion {
    /// Backend identifier for this version.
    pub id: VersionId,
    /// Short code (e.g. "KJV").
    pub name: String,
    /// Full display name (e.g. "King James Version").
    pub full_name: String,
    /// Language of the translation.
    pub language: String,
}

/// A free-text search result with its formatted reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Formatted reference, e.g. "John 3:16".
    pub reference: String,
    /// Verse text containing the match.
    pub text: String,
}

/// The verse featured for a given calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyVerse {
    /// Formatted reference, e.g. "Jeremiah 29:11".
    pub reference: String,
    /// Verse text.
    pub text: String,
}

/// Capability trait for verse text access.
///
/// Implementations must treat "no data" as an empty result rather than an
/// error: the resolver degrades empty chapters to placeholder synthesis.
#[async_trait]
pub trait VerseStore: Send + Sync {
    /// List available Bible versions.
    async fn fetch_versions(&self) -> Result<Vec<BibleVersion>>;

    /// Fetch all known verses of one chapter, ordered by verse number.
    ///
    /// An unknown book/chapter/version combination yields an empty vector.
    async fn fetch_chapter_verses(
        &self,
        book: &Book,
        chapter: u32,
        version: &VersionId,
    ) -> Result<Vec<Verse>>;

    /// Full-text search over verse text, capped by the implementation.
    async fn search_verses(&self, query: &str, version: &VersionId) -> Result<Vec<SearchHit>>;

    /// The curated verse for a calendar date, if the store has one.
    async fn fetch_daily_verse(&self, date: NaiveDate) -> Result<Option<DailyVerse>>;

    /// Get the name of this store (for debugging/logging).
    fn name(&self) -> &'static str;
}
