//! Scripture reference grammar.
//!
//! Decides whether a raw string looks like a reference ("John 3:16-18",
//! "1 Cor 13", "Gen. 1") and extracts its structural pieces without
//! resolving the book name. A miss is an expected outcome, not an error:
//! callers fall through to free-text search.

use std::sync::LazyLock;

use regex::Regex;

/// Anchored reference grammar: `[ordinal ]bookname[.] chapter[:verse[-endVerse]]`.
///
/// Whitespace between the book token and chapter is optional, so squashed
/// input like "1corinthians13" still matches. Anything trailing the
/// reference invalidates the match.
#[allow(clippy::expect_used)]
static RE_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?:\d\s*)?[A-Za-z]+)\.?\s*(\d+)(?::(\d+)(?:-(\d+))?)?$")
        .expect("valid regex: RE_REFERENCE")
});

/// A structurally valid scripture reference, book not yet resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReference {
    /// Raw user-supplied book text (ordinal included), trimmed.
    pub book_token: String,
    /// Chapter number.
    pub chapter: u32,
    /// Verse number; absent means "whole chapter".
    pub verse: Option<u32>,
    /// Inclusive range end; absent means "single verse" when `verse` is set.
    pub end_verse: Option<u32>,
}

impl ParsedReference {
    /// Whether this reference addresses an entire chapter.
    #[must_use]
    pub const fn is_whole_chapter(&self) -> bool {
        self.verse.is_none()
    }
}

/// Parse a raw string against the reference grammar.
///
/// Returns `None` when the input is not a reference — a frequent, expected
/// outcome. Out-of-range chapter/verse numbers are NOT rejected here; range
/// validation is deferred to the resolver, which degrades missing chapters
/// to placeholder synthesis.
#[must_use]
pub fn parse_reference(input: &str) -> Option<ParsedReference> {
    let caps = RE_REFERENCE.captures(input.trim())?;

    let book_token = caps.get(1)?.as_str().trim().to_string();
    let chapter: u32 = caps.get(2)?.as_str().parse().ok()?;
    let verse = caps.get(3).map(|m| m.as_str().parse::<u32>()).transpose().ok()?;
    let end_verse = caps.get(4).map(|m| m.as_str().parse::<u32>()).transpose().ok()?;

    // Chapter and verse numbers are 1-based; a descending range violates
    // the end >= start invariant. Both read as "not a reference".
    if chapter == 0 || verse == Some(0) || end_verse == Some(0) {
        return None;
    }
    if let (Some(start), Some(end)) = (verse, end_verse) {
        if end < start {
            return None;
        }
    }

    Some(ParsedReference { book_token, chapter, verse, end_verse })
}
