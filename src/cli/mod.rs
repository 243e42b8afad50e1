//! Command-line interface implementations.
//!
//! One module per subcommand; each reads its inputs from configuration and
//! arguments, drives the API clients, and reports through the colored output
//! macros. Fatal problems use `error!`, which exits the process.

pub mod auth;
pub mod events;
pub mod info;
pub mod playlist;
pub mod regions;
