use std::path::Path;

use crate::env_file::EnvFile;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const API_KEY_VAR: &str = "TMDB_API_KEY";
pub const BASE_URL_VAR: &str = "TMDB_BASE_URL";

const ENV_FILENAME: &str = ".env";

/// The value shipped in `.env` templates before a real key is filled in.
const PLACEHOLDER_KEY: &str = "your_tmdb_api_key_here";

/// Resolved TMDB connection settings.
///
/// The environment wins over the `.env` file for both keys; the base URL
/// falls back to the public API root.
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    pub api_key: String,
    pub base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TMDB_API_KEY not set; export it or add it to .env")]
    MissingApiKey,

    #[error("TMDB_API_KEY is still the placeholder value; set a real key in .env")]
    PlaceholderApiKey,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TmdbConfig {
    /// Load from the process environment and `.env` in the working directory.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(ENV_FILENAME))
    }

    pub fn load_from(env_file: &Path) -> Result<Self, ConfigError> {
        Self::resolve(|key| std::env::var(key).ok(), env_file)
    }

    fn resolve(
        env: impl Fn(&str) -> Option<String>,
        env_file: &Path,
    ) -> Result<Self, ConfigError> {
        let file = EnvFile::load(env_file)?;
        let lookup = |key: &str| env(key).or_else(|| file.get(key).map(str::to_string));

        let api_key = lookup(API_KEY_VAR).unwrap_or_default();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if api_key == PLACEHOLDER_KEY {
            return Err(ConfigError::PlaceholderApiKey);
        }

        let base_url = lookup(BASE_URL_VAR)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self { api_key, base_url })
    }
}
