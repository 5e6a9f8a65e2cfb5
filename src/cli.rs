//! Command-line front end over the version operations

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::InputError;
use crate::version::{
    VersionSource, compare, is_at_least, latest_with_keys, normalize, sort_versions,
};

#[derive(Debug, Parser)]
#[command(name = "loose-version")]
#[command(version, about = "Normalize, compare and pick the latest of loosely formatted versions")]
pub struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum Command {
    /// Print the version without whitespace and non-numeric prefix
    Normalize { version: String },
    /// Print -1, 0 or 1 depending on how A compares to B
    Compare { a: String, b: String },
    /// Print whether VERSION is greater than or equal to TARGET
    AtLeast { version: String, target: String },
    /// Print the latest of the given versions
    Latest {
        versions: Vec<String>,
        /// JSON array of version strings or objects
        #[arg(long)]
        input: Option<PathBuf>,
        /// Object field holding the version
        #[arg(long)]
        key: Option<String>,
    },
    /// Print versions in ascending order, one per line
    Sort {
        versions: Vec<String>,
        #[arg(long)]
        descending: bool,
    },
}

/// Run a command, writing its output to `out`.
pub fn run<W: Write>(command: Command, config: &Config, out: &mut W) -> anyhow::Result<()> {
    match command {
        Command::Normalize { version } => {
            if let Some(normalized) = normalize(Some(&version)) {
                writeln!(out, "{normalized}")?;
            }
        }
        Command::Compare { a, b } => {
            writeln!(out, "{}", compare(Some(&a), Some(&b)).signum())?;
        }
        Command::AtLeast { version, target } => {
            writeln!(out, "{}", is_at_least(Some(&version), Some(&target)))?;
        }
        Command::Latest {
            versions,
            input,
            key,
        } => {
            let mut items: Vec<Value> = versions.into_iter().map(Value::String).collect();
            if let Some(path) = input {
                items.extend(read_items(&path)?);
            }

            let source = key
                .as_deref()
                .map_or(VersionSource::Fallback, VersionSource::Key);
            match latest_with_keys(&items, source, &config.fallback_keys) {
                Some(version) => writeln!(out, "{version}")?,
                None => debug!("No version found among {} items", items.len()),
            }
        }
        Command::Sort {
            mut versions,
            descending,
        } => {
            sort_versions(&mut versions);
            if descending {
                versions.reverse();
            }
            for version in versions {
                writeln!(out, "{version}")?;
            }
        }
    }

    Ok(())
}

fn read_items(path: &Path) -> Result<Vec<Value>, InputError> {
    let content = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
