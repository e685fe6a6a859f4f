//! gazetteer-cli - Command-line interface for gazetteer-core
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ gazetteer-cli stats
//!
//! - List provinces, mainland only
//!   $ gazetteer-cli provinces --mainland
//!
//! - Cities of a province, districts of a city
//!   $ gazetteer-cli cities 浙江
//!   $ gazetteer-cli districts 杭州
//!
//! - Resolve names to a code and back
//!   $ gazetteer-cli code --city 杭州 --district 西湖
//!   $ gazetteer-cli parse-code CN033001012
//!   $ gazetteer-cli parse-address --city 杭州 --district 西湖 --json
//!
//! Data source
//! -----------
//!
//! By default the CLI loads the dataset bundled with `gazetteer-core`. Use
//! `--data-dir <dir>` (or `GAZETTEER_DATA_DIR`) to point at another directory
//! containing `provinces.data`, `cities.data` and `districts.data`.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use gazetteer_core::export::{join_address, join_codes, join_list};
use gazetteer_core::{Gazetteer, GazetteerSearch};
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let data_dir = args.data_dir.clone().unwrap_or_else(Gazetteer::default_data_dir);
    debug!(data_dir = %data_dir.display(), "loading gazetteer");
    let gz = Gazetteer::load_from_dir(&data_dir)
        .with_context(|| format!("failed to load data from {}", data_dir.display()))?;

    let print_list = |items: Vec<&str>| {
        if args.tab {
            println!("{}", join_list(items));
        } else {
            for item in items {
                println!("{item}");
            }
        }
    };

    match &args.command {
        Commands::Stats => {
            let stats = gz.stats();
            println!("Gazetteer statistics:");
            println!("  Provinces: {}", stats.provinces);
            println!("  Cities: {}", stats.cities);
            println!("  Districts: {}", stats.districts);
            println!("  Index keys: {}", stats.index_keys);
        }

        Commands::Provinces { mainland, codes } => {
            if *codes {
                print_list(gz.province_codes(*mainland));
            } else {
                print_list(gz.provinces(*mainland));
            }
        }

        Commands::Cities { province } => print_list(gz.cities(province)),

        Commands::Districts { city } => print_list(gz.districts(city)),

        Commands::Name { code } => {
            if let Some(name) = gz.name_of(code) {
                println!("{name}");
            }
        }

        Commands::Code(names) => {
            if let Some(code) = gz.resolve_code(&names.province, &names.city, &names.district) {
                println!("{code}");
            }
        }

        Commands::ParseCode { code } => {
            let codes = gz.parse_code(code)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&codes)?);
            } else {
                println!("{}", join_codes(&codes));
            }
        }

        Commands::ParseAddress(names) => {
            let address = gz.parse_address(&names.province, &names.city, &names.district)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&address)?);
            } else {
                println!("{}", join_address(&address));
            }
        }
    }

    Ok(())
}
