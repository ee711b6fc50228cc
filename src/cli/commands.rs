//! CLI commands and argument parsing

use crate::pagination::MAX_LOT_PAGE_LIMIT;
use crate::types::{LotSort, SortOrder};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// STALCRAFT: X API command-line client
#[derive(Parser, Debug)]
#[command(name = "stalcraft")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Use the demo API with its public application token
    #[arg(long, global = true)]
    pub demo: bool,

    /// Region to query (overrides config and STALCRAFT_REGION)
    #[arg(short, long, global = true)]
    pub region: Option<String>,

    /// Access token (overrides config and STALCRAFT_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List regions that can be accessed via the API
    Regions,

    /// Show current emission status
    Emission,

    /// List friends of a character (user token required)
    Friends {
        /// Character name
        character: String,
    },

    /// Show auction price history of an item
    History {
        /// Item id
        item: String,

        #[arg(long, default_value = "0")]
        offset: u32,

        #[arg(
            long,
            default_value_t = MAX_LOT_PAGE_LIMIT,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_LOT_PAGE_LIMIT))
        )]
        limit: u32,

        /// Include additional lot metadata
        #[arg(long)]
        additional: bool,

        /// Fetch every page
        #[arg(long)]
        all: bool,
    },

    /// Show active auction lots of an item
    Lots {
        /// Item id
        item: String,

        #[arg(long, default_value = "0")]
        offset: u32,

        #[arg(
            long,
            default_value_t = MAX_LOT_PAGE_LIMIT,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_LOT_PAGE_LIMIT))
        )]
        limit: u32,

        /// Sort field: time_created, time_left, current_price, buyout_price
        #[arg(long, default_value = "time_created")]
        sort: LotSort,

        /// Sort order: asc, desc
        #[arg(long, default_value = "asc")]
        order: SortOrder,

        /// Include additional lot metadata
        #[arg(long)]
        additional: bool,

        /// Fetch every page
        #[arg(long)]
        all: bool,
    },

    /// Show a character's public profile
    Profile {
        /// Character name
        name: String,
    },

    /// List characters of the authenticated user (user token required)
    Characters,

    /// Show information about a clan
    ClanInfo {
        /// Clan id
        clan: String,
    },

    /// List members of a clan (user token required)
    ClanMembers {
        /// Clan id
        clan: String,
    },

    /// List clans in the region
    Clans {
        #[arg(long, default_value = "0")]
        offset: u32,

        #[arg(long, default_value = "20", value_parser = clap::value_parser!(u32).range(1..))]
        limit: u32,

        /// Fetch every page
        #[arg(long)]
        all: bool,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one document per line)
    Json,
    /// Indented JSON
    Pretty,
}
