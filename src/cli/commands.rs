use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "routescout", about = "Route-network opportunity scanner")]
pub struct Cli {
    /// Verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank candidate airports for a new route network around an HQ
    Scan {
        /// IATA code of the headquarters airport (e.g. LAX, JFK)
        hq_code: String,
        /// Minimum country openness (0-10)
        #[arg(long, default_value = "0")]
        min_openness: i32,
        /// Maximum distance from HQ in km
        #[arg(long, default_value = "20000")]
        max_distance: f64,
        /// Scoring profile (balanced, longhaul, regional); unknown names
        /// fall back to balanced
        #[arg(long, default_value = "balanced")]
        profile: String,
        /// Override the upstream API base URL
        #[arg(long)]
        base_url: Option<String>,
        /// Abort the whole run after this many seconds
        #[arg(long)]
        timeout_secs: Option<u64>,
        /// Print the full report as JSON instead of the table
        #[arg(long)]
        json: bool,
    },
    /// List the available scoring profiles and their parameters
    Profiles,
}
