//! Command-line interface for operators.

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::locations;
use crate::services::SearchSource;
use crate::state::SharedState;

/// Vendry - Wedding Vendor Directory Service
#[derive(Parser)]
#[command(name = "vendry")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP service with background cache maintenance
    #[command(alias = "-d", alias = "--daemon")]
    Daemon,

    /// Run one vendor search and print the results
    #[command(alias = "s")]
    Search {
        /// Search keyword, e.g. "photographer"
        #[arg(required = true)]
        keyword: Vec<String>,

        /// Location as "City, State"
        #[arg(short, long)]
        location: String,

        /// Narrow the search, e.g. "portrait"
        #[arg(short, long)]
        subcategory: Option<String>,
    },

    /// List supported states and cities
    #[command(alias = "ls")]
    Locations,

    /// Delete expired cache rows once and exit
    Prune,

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

pub async fn cmd_search(
    config: &Config,
    keyword: &str,
    location: &str,
    subcategory: Option<&str>,
) -> anyhow::Result<()> {
    println!("Searching for: {} in {}", keyword, location);

    let state = SharedState::new(config.clone()).await?;
    let (results, source) = state
        .search_service
        .search(keyword, location, subcategory)
        .await?;

    if results.is_empty() {
        println!("No vendors found for '{}' in {}", keyword, location);
        return Ok(());
    }

    let source_label = match source {
        SearchSource::Cache => "cached",
        SearchSource::Live => "live",
    };

    println!();
    println!("Results ({} total, {}):", results.len(), source_label);
    println!("{:-<60}", "");

    for result in results.iter().take(20) {
        println!("• {} [{}]", result.title, result.vendor_source.as_str());
        if let Some(address) = &result.address {
            println!("  {}", address);
        }
        if let Some(rating) = &result.rating {
            println!("  Rating: {}/5 ({} votes)", rating.value, rating.votes_count);
        }
        if let Some(phone) = &result.phone {
            println!("  Phone: {}", phone);
        }
        if let Some(url) = &result.url {
            println!("  {}", url);
        }
        println!();
    }

    if results.len() > 20 {
        println!("... and {} more", results.len() - 20);
    }

    Ok(())
}

pub fn cmd_locations() {
    println!("Supported locations:");
    println!("{:-<60}", "");

    for state in locations::US_LOCATIONS {
        println!("{} ({})", state.name, state.abbreviation);
        for city in state.cities {
            println!("  • {}", city.name);
        }
        println!();
    }

    println!("Search with: vendry search <keyword> --location \"City, State\"");
}

pub async fn cmd_prune(config: &Config) -> anyhow::Result<()> {
    let state = SharedState::new(config.clone()).await?;
    let removed = state.maintenance.run_once().await?;

    println!("✓ Removed {} expired cache entries", removed);

    Ok(())
}
