//! CLI module
//!
//! Command-line interface over [`StalcraftClient`](crate::StalcraftClient).
//!
//! # Commands
//!
//! - `regions` - List API regions
//! - `emission` - Current emission status
//! - `lots` / `history` - Auction listings
//! - `profile` / `friends` / `characters` - Character data
//! - `clans` / `clan-info` / `clan-members` - Clan data

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
