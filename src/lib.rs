//! Spotify Catalog Client Library
//!
//! This library wraps the catalog part of the Spotify Web API. It exchanges
//! client credentials for a bearer token, then looks up and searches albums,
//! tracks, artists and playlists, returning each answer as a simplified record.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error kinds shared by all operations
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Display helpers for the command-line output
//!
//! # Example
//!
//! ```
//! use spoxy::{config::{self, Config}, spotify::{self, SpotifyApi}};
//!
//! #[tokio::main]
//! async fn main() -> spoxy::Result<()> {
//!     config::load_env().await?;
//!     let config = Config::from_env()?;
//!     let token = spotify::request_access_token(&config).await?;
//!     let api = SpotifyApi::with_config(token, &config);
//!     let album = api.get_album("2IYQwwgxgOIn7t3iF6ufFD").await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::{Error, Result};

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Requesting access token...");
/// info!("Found {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// This macro will cause the program to exit with code 1 immediately after
/// printing the error message. It should only be used for fatal errors in
/// the command-line layer, never inside the library operations.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
