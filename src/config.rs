//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;

use crate::error::Result;

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Supabase project URL (e.g. `https://xyzcompany.supabase.co`)
    pub supabase_url: String,
    /// Supabase anonymous API key
    pub supabase_anon_key: String,
    /// Preferred Bible version code (e.g. "KJV")
    pub bible_version: String,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            supabase_url: String::new(),
            supabase_anon_key: String::new(),
            bible_version: "KJV".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    #[allow(clippy::unnecessary_wraps)] // Returns Result for forward-compatible API
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        // Try to load Supabase credentials from environment
        if let Ok(url) = env::var("SUPABASE_URL") {
            config.supabase_url = url.trim_end_matches('/').to_string();
        }

        if let Ok(key) = env::var("SUPABASE_ANON_KEY") {
            config.supabase_anon_key = key;
        }

        // Preferred translation can be configured via environment
        if let Ok(version) = env::var("BIBLE_VERSION") {
            if !version.trim().is_empty() {
                config.bible_version = version.trim().to_string();
            }
        }

        Ok(config)
    }

    /// Check if Supabase is configured with real credentials
    pub const fn has_supabase_credentials(&self) -> bool {
        !self.supabase_url.is_empty() && !self.supabase_anon_key.is_empty()
    }
}
