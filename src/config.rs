use std::path::{Path, PathBuf};

use crate::consts::*;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Missing `api_key` environment variable")]
    MissingApiKey
}

/// Immutable settings shared by both loaders
///
/// Built once at startup and passed into each pipeline call so the loaders
/// stay testable with injected fixture paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Language code the APIs localize names to
    pub language: String,

    /// Latest season the battle pass loader will fetch (inclusive)
    pub current_season: u32,

    /// Key for the battle pass API
    pub api_key: String,

    /// Where the catalog document is written
    pub catalog_path: PathBuf,

    /// Where the season catalog document is written
    pub battlepass_path: PathBuf
}

impl Config {
    /// Build a config from the process environment, resolving output
    /// files relative to the given base directory
    pub fn from_env(base_dir: impl AsRef<Path>) -> Result<Self, Error> {
        let api_key = std::env::var(API_KEY_VARIABLE)
            .map_err(|_| Error::MissingApiKey)?;

        Ok(Self {
            language: DEFAULT_LANGUAGE.to_string(),
            current_season: CURRENT_SEASON,
            api_key,
            catalog_path: base_dir.as_ref().join(CATALOG_FILE_PATH),
            battlepass_path: base_dir.as_ref().join(BATTLEPASS_FILE_PATH)
        })
    }
}
