//! Gigmix CLI Library
//!
//! This library glues two third-party REST services together: the Ticketmaster
//! Discovery API, queried for upcoming music events in a region, and the Spotify
//! Web API, used to build a playlist from the performers found there. Each
//! performer contributes their top tracks and, when one can be found, a single
//! matching podcast episode.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the local token callback server
//! - `builder` - Playlist orchestration from a list of artist names
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `errors` - Error taxonomy shared by both API clients
//! - `http` - Shared request helper with uniform status handling
//! - `server` - Local HTTP server for the token callback
//! - `spotify` - Spotify Web API client
//! - `ticketmaster` - Ticketmaster Discovery API client
//! - `types` - Data structures and type definitions
//! - `utils` - Date formatting, playlist naming, and list helpers

pub mod api;
pub mod builder;
pub mod cli;
pub mod config;
pub mod errors;
pub mod http;
pub mod server;
pub mod spotify;
pub mod ticketmaster;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// Accepts the same arguments as `println!`.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Accepts the same arguments as `println!`.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal errors where recovery is not possible; the process
/// terminates with exit code 1 right after the message is printed.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Accepts the same arguments as `println!`.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
