use clap::{Args, Parser, Subcommand};
use propsearch::criteria::{RawValue, SearchCriteria};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "propsearch", bin_name = "propsearch", version = get_version())]
#[command(about = "Search property listings by type, price, bedrooms, postcode and date", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Listings file (JSON with a top-level "properties" array)
    #[arg(short, long, global = true)]
    pub listings: Option<PathBuf>,

    /// Verbose output (debug logging to stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search listings
    #[command(alias = "s")]
    Search(SearchArgs),

    /// Show one listing in full
    Show {
        /// Listing id
        id: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (listings-file, invalid-records)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct SearchArgs {
    /// Property type, e.g. House or Flat ("any" for all)
    #[arg(short = 't', long = "type")]
    pub kind: Option<String>,

    /// Minimum price (inclusive)
    #[arg(long)]
    pub min_price: Option<String>,

    /// Maximum price (inclusive)
    #[arg(long)]
    pub max_price: Option<String>,

    /// Minimum bedrooms (inclusive)
    #[arg(long)]
    pub min_bedrooms: Option<String>,

    /// Maximum bedrooms (inclusive)
    #[arg(long)]
    pub max_bedrooms: Option<String>,

    /// Postcode prefix, e.g. BR1
    #[arg(short, long)]
    pub postcode: Option<String>,

    /// Added on or after (ISO date, e.g. 2024-11-01)
    #[arg(long)]
    pub from: Option<String>,

    /// Added on or before (ISO date)
    #[arg(long)]
    pub to: Option<String>,

    /// JSON file with a criteria object; flags override its fields
    #[arg(long)]
    pub criteria: Option<PathBuf>,

    /// Print matches as JSON
    #[arg(long)]
    pub json: bool,
}

impl SearchArgs {
    /// Criteria set from the flags alone, each value passed through as text.
    pub fn flag_criteria(&self) -> SearchCriteria {
        let text = |v: &Option<String>| v.clone().map(RawValue::Text);
        SearchCriteria {
            kind: text(&self.kind),
            min_price: text(&self.min_price),
            max_price: text(&self.max_price),
            min_bedrooms: text(&self.min_bedrooms),
            max_bedrooms: text(&self.max_bedrooms),
            postcode: text(&self.postcode),
            date_from: text(&self.from),
            date_to: text(&self.to),
        }
    }
}
