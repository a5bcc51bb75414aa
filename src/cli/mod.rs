//! CLI module - Command-line interface for Lion Homes
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// Lion Homes - real-estate listings and blog service
#[derive(Parser)]
#[command(name = "lionhomes")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server (default)
    #[command(alias = "web")]
    Serve,

    /// Search property listings
    #[command(alias = "ls")]
    Listings {
        /// Free-text search over title and location
        query: Vec<String>,
        /// Property type, e.g. villa
        #[arg(long = "type")]
        property_type: Option<String>,
        /// Listing status, e.g. "for sale"
        #[arg(long)]
        status: Option<String>,
        /// Price bucket: under-1m, 1m-2m, 2m-3m, over-3m
        #[arg(long)]
        price_range: Option<String>,
        /// Sort key, e.g. price-desc or size-asc
        #[arg(long)]
        sort: Option<String>,
    },

    /// Show one property
    #[command(alias = "info")]
    Listing {
        /// Property ID
        id: u32,
    },

    /// Search blog posts
    Blog {
        /// Free-text search over title, excerpt and tags
        query: Vec<String>,
        /// Category, e.g. "Market Analysis"
        #[arg(long)]
        category: Option<String>,
        /// Author name
        #[arg(long)]
        author: Option<String>,
        /// Sort key, e.g. date-desc or read_time-asc
        #[arg(long)]
        sort: Option<String>,
    },

    /// Create default config file
    Init,
}

pub use commands::*;
