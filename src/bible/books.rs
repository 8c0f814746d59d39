//! Canonical book table and book-name resolution.
//!
//! The 66-book table is baked into the binary so resolution and navigation
//! work with zero network dependency. Entries are ordered by canonical
//! position and never change at runtime.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Old or New Testament grouping of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Testament {
    /// Old Testament (Genesis through Malachi).
    Old,
    /// New Testament (Matthew through Revelation).
    New,
}

impl Testament {
    /// Short code used in data interchange ("OT"/"NT").
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Old => "OT",
            Self::New => "NT",
        }
    }
}

/// One of the 66 canonical biblical books.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Book {
    /// Display name, unique (e.g. "1 Corinthians").
    pub name: &'static str,
    /// Short code, unique, matched case-insensitively (e.g. "1Co").
    pub abbreviation: &'static str,
    /// Testament grouping.
    pub testament: Testament,
    /// 1-based canonical ordering (1..=66).
    pub position: u8,
    /// Number of chapters in the book.
    pub chapters: u32,
}

impl Book {
    /// The book following this one in canonical order, if any.
    #[must_use]
    pub fn next(&self) -> Option<&'static Self> {
        by_position(self.position + 1)
    }

    /// The book preceding this one in canonical order, if any.
    #[must_use]
    pub fn previous(&self) -> Option<&'static Self> {
        by_position(self.position.wrapping_sub(1))
    }
}

const fn ot(position: u8, name: &'static str, abbreviation: &'static str, chapters: u32) -> Book {
    Book { name, abbreviation, testament: Testament::Old, position, chapters }
}

const fn nt(position: u8, name: &'static str, abbreviation: &'static str, chapters: u32) -> Book {
    Book { name, abbreviation, testament: Testament::New, position, chapters }
}

/// The canonical book table, in position order.
static BOOKS: [Book; 66] = [
    // Old Testament
    ot(1, "Genesis", "Gen", 50),
    ot(2, "Exodus", "Exo", 40),
    ot(3, "Leviticus", "Lev", 27),
    ot(4, "Numbers", "Num", 36),
    ot(5, "Deuteronomy", "Deu", 34),
    ot(6, "Joshua", "Jos", 24),
    ot(7, "Judges", "Jdg", 21),
    ot(8, "Ruth", "Rut", 4),
    ot(9, "1 Samuel", "1Sa", 31),
    ot(10, "2 Samuel", "2Sa", 24),
    ot(11, "1 Kings", "1Ki", 22),
    ot(12, "2 Kings", "2Ki", 25),
    ot(13, "1 Chronicles", "1Ch", 29),
    ot(14, "2 Chronicles", "2Ch", 36),
    ot(15, "Ezra", "Ezr", 10),
    ot(16, "Nehemiah", "Neh", 13),
    ot(17, "Esther", "Est", 10),
    ot(18, "Job", "Job", 42),
    ot(19, "Psalms", "Psa", 150),
    ot(20, "Proverbs", "Pro", 31),
    ot(21, "Ecclesiastes", "Ecc", 12),
    ot(22, "Song of Solomon", "Sng", 8),
    ot(23, "Isaiah", "Isa", 66),
    ot(24, "Jeremiah", "Jer", 52),
    ot(25, "Lamentations", "Lam", 5),
    ot(26, "Ezekiel", "Ezk", 48),
    ot(27, "Daniel", "Dan", 12),
    ot(28, "Hosea", "Hos", 14),
    ot(29, "Joel", "Jol", 3),
    ot(30, "Amos", "Amo", 9),
    ot(31, "Obadiah", "Oba", 1),
    ot(32, "Jonah", "Jon", 4),
    ot(33, "Micah", "Mic", 7),
    ot(34, "Nahum", "Nah", 3),
    ot(35, "Habakkuk", "Hab", 3),
    ot(36, "Zephaniah", "Zep", 3),
    ot(37, "Haggai", "Hag", 2),
    ot(38, "Zechariah", "Zec", 14),
    ot(39, "Malachi", "Mal", 4),
    // New Testament
    nt(40, "Matthew", "Mat", 28),
    nt(41, "Mark", "Mrk", 16),
    nt(42, "Luke", "Luk", 24),
    nt(43, "John", "Jhn", 21),
    nt(44, "Acts", "Act", 28),
    nt(45, "Romans", "Rom", 16),
    nt(46, "1 Corinthians", "1Co", 16),
    nt(47, "2 Corinthians", "2Co", 13),
    nt(48, "Galatians", "Gal", 6),
    nt(49, "Ephesians", "Eph", 6),
    nt(50, "Philippians", "Php", 4),
    nt(51, "Colossians", "Col", 4),
    nt(52, "1 Thessalonians", "1Th", 5),
    nt(53, "2 Thessalonians", "2Th", 3),
    nt(54, "1 Timothy", "1Ti", 6),
    nt(55, "2 Timothy", "2Ti", 4),
    nt(56, "Titus", "Tit", 3),
    nt(57, "Philemon", "Phm", 1),
    nt(58, "Hebrews", "Heb", 13),
    nt(59, "James", "Jas", 5),
    nt(60, "1 Peter", "1Pe", 5),
    nt(61, "2 Peter", "2Pe", 3),
    nt(62, "1 John", "1Jn", 5),
    nt(63, "2 John", "2Jn", 1),
    nt(64, "3 John", "3Jn", 1),
    nt(65, "Jude", "Jud", 1),
    nt(66, "Revelation", "Rev", 22),
];

lazy_static! {
    /// Lowercased abbreviation -> table index
    static ref ABBREVIATION_INDEX: HashMap<String, usize> = {
        let mut m = HashMap::new();
        for (idx, book) in BOOKS.iter().enumerate() {
            m.insert(book.abbreviation.to_lowercase(), idx);
        }
        m
    };
}

/// All 66 books in canonical position order.
#[must_use]
pub const fn all() -> &'static [Book] {
    &BOOKS
}

/// Look up a book by its 1-based canonical position.
#[must_use]
pub fn by_position(position: u8) -> Option<&'static Book> {
    if position == 0 {
        return None;
    }
    BOOKS.get(usize::from(position) - 1)
}

/// Map a user-supplied book token to exactly one canonical book.
///
/// Matching order, first match wins:
/// 1. Exact case-insensitive match against the abbreviation.
/// 2. Case-insensitive starts-with match against the name, scanning in
///    position order. Ambiguous prefixes therefore resolve to the earliest
///    book ("Jo" is Joshua, not John) — a pinned tie-break, see DESIGN.md.
#[must_use]
pub fn resolve_book(token: &str) -> Option<&'static Book> {
    let token = token.trim().to_lowercase();
    if token.is_empty() {
        return None;
    }

    if let Some(&idx) = ABBREVIATION_INDEX.get(token.as_str()) {
        return BOOKS.get(idx);
    }

    BOOKS.iter().find(|book| book.name.to_lowercase().starts_with(&token))
}

/// The chapter after (book, chapter), crossing into the next book at the end.
#[must_use]
pub fn next_chapter(book: &'static Book, chapter: u32) -> Option<(&'static Book, u32)> {
    if chapter < book.chapters {
        Some((book, chapter + 1))
    } else {
        book.next().map(|next| (next, 1))
    }
}

/// The chapter before (book, chapter), crossing into the previous book's
/// last chapter at the start.
#[must_use]
pub fn previous_chapter(book: &'static Book, chapter: u32) -> Option<(&'static Book, u32)> {
    if chapter > 1 {
        Some((book, chapter - 1))
    } else {
        book.previous().map(|prev| (prev, prev.chapters))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn table_has_66_books_in_position_order() {
        assert_eq!(all().len(), 66);
        for (idx, book) in all().iter().enumerate() {
            assert_eq!(usize::from(book.position), idx + 1, "{} out of order", book.name);
            assert!(book.chapters >= 1, "{} has no chapters", book.name);
        }
    }

    #[test]
    fn every_abbreviation_resolves_case_insensitively() {
        for book in all() {
            assert_eq!(resolve_book(book.abbreviation), Some(book));
            assert_eq!(resolve_book(&book.abbreviation.to_uppercase()), Some(book));
            assert_eq!(resolve_book(&book.abbreviation.to_lowercase()), Some(book));
        }
    }

    #[test]
    fn every_full_name_resolves() {
        for book in all() {
            assert_eq!(resolve_book(book.name), Some(book));
            assert_eq!(resolve_book(&book.name.to_uppercase()), Some(book));
        }
    }

    #[test]
    fn ambiguous_prefix_resolves_in_position_order() {
        // "Jo" prefixes Joshua, Job, Joel, Jonah, and John; Joshua comes
        // first canonically. Pinned behavior, see DESIGN.md before changing.
        let book = resolve_book("Jo").unwrap();
        assert_eq!(book.name, "Joshua");

        // "Ju" prefixes Judges and Jude; Judges wins.
        assert_eq!(resolve_book("ju").unwrap().name, "Judges");
    }

    #[test]
    fn longer_prefixes_disambiguate() {
        assert_eq!(resolve_book("Joh").unwrap().name, "John");
        assert_eq!(resolve_book("joe").unwrap().name, "Joel");
        assert_eq!(resolve_book("jude").unwrap().name, "Jude");
    }

    #[test]
    fn unknown_tokens_do_not_resolve() {
        assert!(resolve_book("Hezekiah").is_none());
        assert!(resolve_book("").is_none());
        assert!(resolve_book("   ").is_none());
    }

    #[test]
    fn position_lookup_round_trips() {
        assert_eq!(by_position(43).unwrap().name, "John");
        assert!(by_position(0).is_none());
        assert!(by_position(67).is_none());
    }

    #[test]
    fn chapter_navigation_crosses_book_boundaries() {
        let genesis = by_position(1).unwrap();
        let (book, chapter) = next_chapter(genesis, 50).unwrap();
        assert_eq!(book.name, "Exodus");
        assert_eq!(chapter, 1);

        let exodus = by_position(2).unwrap();
        let (book, chapter) = previous_chapter(exodus, 1).unwrap();
        assert_eq!(book.name, "Genesis");
        assert_eq!(chapter, 50);

        assert!(previous_chapter(genesis, 1).is_none());
        let revelation = by_position(66).unwrap();
        assert!(next_chapter(revelation, 22).is_none());
    }
}
