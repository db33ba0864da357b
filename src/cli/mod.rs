//! CLI module - Command-line interface for Art Explorer
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Art Explorer - painting metadata and facts API
#[derive(Parser)]
#[command(name = "art-explorer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    #[command(alias = "daemon", alias = "web")]
    Serve,

    /// Apply pending database migrations
    Migrate,

    /// Replace all paintings with a seed dataset
    Seed {
        /// TOML dataset to load (defaults to the built-in dataset)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Resolve an artist/painting slug pair
    Show {
        /// Artist slug
        artist_slug: String,
        /// Painting slug
        painting_slug: String,
    },

    /// Resolve a combined slug
    ShowCombined {
        /// Combined slug, e.g. van-gogh-starry-night
        slug: String,
    },

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

pub use commands::*;
