use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use shelfapp::view::{SortDirection, SortOrder};
use std::path::PathBuf;

/// Returns the version string, including git hash for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "shelf", bin_name = "shelf", version = get_version())]
#[command(about = "Product inventory manager for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this product file instead of the one in the data directory
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputMode::Text, help_heading = "Options")]
    pub output: OutputMode,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new product
    Add {
        /// Unique product code (positive integer)
        #[arg(short, long, default_value = "", allow_negative_numbers = true)]
        code: String,

        /// Product name (at least 2 characters)
        #[arg(short, long, default_value = "")]
        name: String,

        /// Product description (at least 5 characters)
        #[arg(short, long, default_value = "")]
        description: String,

        /// Units in stock
        #[arg(short, long, default_value = "", allow_negative_numbers = true)]
        quantity: String,
    },

    /// List products (default command)
    #[command(alias = "ls")]
    List {
        /// Only products whose name contains TERM (case-insensitive)
        #[arg(short, long, value_name = "TERM")]
        search: Option<String>,

        /// Sort order: code, name, quantity or created, optionally with -asc/-desc
        #[arg(long, value_name = "ORDER")]
        sort: Option<SortOrder>,

        /// Sort ascending
        #[arg(long, conflicts_with = "desc")]
        asc: bool,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Look up a thumbnail for each product
        #[arg(long, conflicts_with = "no_images")]
        images: bool,

        /// Skip image lookup even if enabled in config
        #[arg(long)]
        no_images: bool,
    },

    /// Delete a product by code
    #[command(alias = "rm")]
    Delete {
        /// Code of the product to delete
        code: u64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Resolve `--sort`, `--asc` and `--desc` against the configured default.
///
/// `--asc`/`--desc` override whatever direction `--sort` or the default carry.
pub fn resolve_sort(sort: Option<SortOrder>, asc: bool, desc: bool, default: SortOrder) -> SortOrder {
    let mut order = sort.unwrap_or(default);
    if asc {
        order.direction = SortDirection::Asc;
    } else if desc {
        order.direction = SortDirection::Desc;
    }
    order
}
