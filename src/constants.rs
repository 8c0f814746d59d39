//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Placeholder verse synthesis constants.
pub mod placeholder {
    /// Default verse count for Old Testament chapters with no backing text.
    pub const OT_VERSE_COUNT: u32 = 25;

    /// Default verse count for New Testament chapters with no backing text.
    pub const NT_VERSE_COUNT: u32 = 30;
}

/// Search result constants.
pub mod search {
    /// Maximum number of results returned by the in-memory store.
    pub const MEMORY_RESULT_LIMIT: usize = 20;

    /// Maximum number of rows requested from the remote store.
    pub const REMOTE_RESULT_LIMIT: usize = 50;
}

/// Remote store constants.
pub mod remote {
    /// HTTP request timeout in seconds.
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}
