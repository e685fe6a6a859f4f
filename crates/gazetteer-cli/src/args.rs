use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for gazetteer-cli
#[derive(Debug, Parser)]
#[command(
    name = "gazetteer-cli",
    version,
    about = "CLI for resolving Chinese administrative codes and names"
)]
pub struct CliArgs {
    /// Directory holding provinces.data, cities.data and districts.data
    #[arg(short = 'd', long = "data-dir", env = "GAZETTEER_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Print lists TAB-joined on one line instead of one item per line
    #[arg(long, global = true)]
    pub tab: bool,

    /// Print address results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Province / city / district names; any of them may be abbreviated.
#[derive(Debug, Args)]
pub struct NameArgs {
    #[arg(short, long, default_value = "")]
    pub province: String,

    #[arg(short, long, default_value = "")]
    pub city: String,

    #[arg(short = 'D', long, default_value = "")]
    pub district: String,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the loaded data
    Stats,

    /// List all provinces
    Provinces {
        /// Leave out Hong Kong, Macau and Taiwan
        #[arg(long)]
        mainland: bool,

        /// Print codes instead of names
        #[arg(long)]
        codes: bool,
    },

    /// List the cities of a province
    Cities {
        /// Province name (e.g. 浙江)
        province: String,
    },

    /// List the districts of a city
    Districts {
        /// City name (e.g. 杭州)
        city: String,
    },

    /// Standard name of a code
    Name {
        code: String,
    },

    /// Most specific code for the given names
    Code(NameArgs),

    /// Province, city and district codes of a code
    ParseCode {
        code: String,
    },

    /// Standard names for the given (possibly abbreviated) names
    ParseAddress(NameArgs),
}
