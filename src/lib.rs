//! `Berean` - Bible study core library.
//!
//! This crate provides scripture reference parsing and resolution, verse
//! lookup with deterministic placeholder fallback, and free-text search,
//! over a pluggable verse store (in-memory or Supabase).

// Re-export public modules for use in integration tests and as a library
pub mod bible;
pub mod config;
pub mod constants;
pub mod error;
pub mod store;
pub mod types;
