// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line front end for base URL resolution.

use baseurl::adapters::YamlTableAdapter;
use baseurl::domain::{build_url, to_env_key, Result, ServiceName};
use baseurl::ports::{BaseUrlTable, EmptyTable};
use baseurl::service::BaseUrlResolver;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Resolve and build base URLs for named services.
#[derive(Debug, Parser)]
#[command(name = "baseurl")]
#[command(about = "Resolve base URLs from overrides, tables and the environment", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve the base URL for a service and print where it came from.
    Resolve {
        /// Service name.
        #[arg(long, default_value = ServiceName::DEFAULT)]
        name: String,

        /// Preferred value; wins over every other source when non-empty.
        #[arg(long)]
        preferred: Option<String>,

        /// YAML table of service base URLs to consult before the environment.
        /// Without it no table is consulted.
        #[arg(long, value_name = "FILE")]
        table: Option<PathBuf>,
    },

    /// Join a base URL with path segments.
    Build {
        /// Base URL.
        base: String,

        /// Path segments.
        parts: Vec<String>,
    },

    /// Print the environment variable consulted for a service.
    EnvKey {
        /// Service name.
        name: String,
    },
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// A fresh CLI process has no host table, so only `--table` supplies one.
fn resolver_for(table: Option<PathBuf>) -> Result<BaseUrlResolver> {
    let table: Box<dyn BaseUrlTable> = match table {
        Some(path) => Box::new(YamlTableAdapter::from_file(path)?),
        None => Box::new(EmptyTable),
    };
    Ok(BaseUrlResolver::builder()
        .with_table(table)
        .with_standard_env()
        .build())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Resolve {
            name,
            preferred,
            table,
        } => {
            let resolver = resolver_for(table)?;

            let resolution =
                resolver.resolve_with_origin(&ServiceName::from(name), preferred.as_deref());
            println!("{}\t{}", resolution.as_str(), resolution.origin);
        }
        Command::Build { base, parts } => {
            println!("{}", build_url(&base, &parts));
        }
        Command::EnvKey { name } => {
            println!("{}", to_env_key(&name));
        }
    }
    Ok(())
}

fn main() {
    init_logging();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("baseurl error: {}", err);
        std::process::exit(1);
    }
}
