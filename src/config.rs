//! Configuration for the Spotify client.
//!
//! Credentials and endpoints travel in an explicit [`Config`] value that is
//! handed to the token exchange and to [`crate::spotify::SpotifyApi`]. Values
//! are resolved in this order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory, see [`load_env`]
//! 3. Built-in endpoint defaults

use std::{env, path::PathBuf};

use crate::error::{Error, Result};

/// Default base URL of the Spotify Web API.
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Default client-credentials token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

pub const ENV_CLIENT_ID: &str = "SPOTIFY_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "SPOTIFY_CLIENT_SECRET";
pub const ENV_API_URL: &str = "SPOTIFY_API_URL";
pub const ENV_TOKEN_URL: &str = "SPOTIFY_API_TOKEN_URL";

#[derive(Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub api_url: String,
    pub token_url: String,
}

impl Config {
    /// Creates a configuration that talks to the public Spotify endpoints.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            api_url: DEFAULT_API_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    /// Builds the configuration from the process environment.
    ///
    /// `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET` are required and must
    /// not be empty. `SPOTIFY_API_URL` and `SPOTIFY_API_TOKEN_URL` override
    /// the default endpoints when set.
    ///
    /// # Example
    ///
    /// ```
    /// use spoxy::config::{self, Config};
    ///
    /// config::load_env().await?;
    /// let config = Config::from_env()?;
    /// ```
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new(required(ENV_CLIENT_ID)?, required(ENV_CLIENT_SECRET)?);
        if let Some(api_url) = optional(ENV_API_URL) {
            config = config.with_api_url(api_url);
        }
        if let Some(token_url) = optional(ENV_TOKEN_URL) {
            config = config.with_token_url(token_url);
        }
        Ok(config)
    }
}

// the secret must never end up in logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("token_url", &self.token_url)
            .finish()
    }
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file is looked up in the platform-specific local data directory under
/// `spoxy/.env`:
/// - Linux: `~/.local/share/spoxy/.env`
/// - macOS: `~/Library/Application Support/spoxy/.env`
/// - Windows: `%LOCALAPPDATA%/spoxy/.env`
///
/// The directory is created if it doesn't exist. A missing file is not an
/// error since the variables may already be set in the environment; a file
/// that exists but cannot be parsed is.
pub async fn load_env() -> Result<()> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if async_fs::metadata(&path).await.is_err() {
        log::debug!("no env file at {}", path.display());
        return Ok(());
    }

    dotenv::from_path(&path)
        .map_err(|e| Error::Configuration(format!("cannot load {}: {}", path.display(), e)))
}

/// Location of the `.env` file read by [`load_env`].
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spoxy/.env");
    path
}

fn required(name: &str) -> Result<String> {
    optional(name).ok_or_else(|| Error::Configuration(format!("{} must be set", name)))
}

fn optional(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
