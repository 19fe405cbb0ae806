//! Spotify Track Export Library
//!
//! This library resolves Spotify playlists and track lists into track metadata
//! and renders it as text, JSON, CSV or console output. It includes modules for
//! API communication, CLI operations, configuration management and output
//! formatting.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error type shared by all modules
//! - `output` - Rendering of track records
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Identifier resolution and file name helpers
//!
//! # Example
//!
//! ```
//! use spotracks::{config, spotify::Spotify};
//!
//! #[tokio::main]
//! async fn main() -> spotracks::error::Result<()> {
//!     config::load_env().await.ok();
//!     let spotify = Spotify::new(config::ApiConfig::from_env());
//!     let token = spotify.obtain_token(&config::Credentials::from_env()?).await?;
//!     let tracks = spotify.collect_tracks("37i9dQZF1DXcBWIGoYBM5M", &token.access_token).await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// All status macros write to stderr, so stdout only ever carries rendered
/// track output and can be piped.
///
/// # Example
///
/// ```
/// info!("Fetching playlist {}", id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates with exit code 1, so it should only be used for fatal errors
/// at the command layer.
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
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
