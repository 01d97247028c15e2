//! Command-line interface for scorecard.

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "scorecard")]
#[command(about = "Significance scorecards comparing control and experimental verification runs")]
#[command(version)]
pub struct Cli {
    /// Identifier of the scorecard document to evaluate
    #[arg(short, long)]
    pub document: String,

    /// Root directory of the document store
    #[arg(long)]
    pub store_root: Option<PathBuf>,

    /// p-value level for a major (magnitude 2) score
    #[arg(long)]
    pub major_threshold: Option<f64>,

    /// p-value level for a minor (magnitude 1) score
    #[arg(long)]
    pub minor_threshold: Option<f64>,

    /// Number of cells evaluated concurrently
    #[arg(long)]
    pub workers: Option<usize>,

    /// Dashboard URL to notify after the run
    #[arg(long)]
    pub dashboard_url: Option<String>,

    /// Path to config file
    #[arg(long, default_value = ".scorecard.toml")]
    pub config: String,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply CLI overrides to the configuration.
    ///
    /// CLI arguments take precedence over config file values.
    /// Only non-None optional values will override the config.
    pub fn apply_to_config(&self, config: &mut Config) {
        if let Some(store_root) = &self.store_root {
            config.store.root = store_root.clone();
        }

        if let Some(major_threshold) = self.major_threshold {
            config.significance.major_threshold = major_threshold;
        }

        if let Some(minor_threshold) = self.minor_threshold {
            config.significance.minor_threshold = minor_threshold;
        }

        if let Some(workers) = self.workers {
            config.orchestration.workers = workers;
        }

        if let Some(dashboard_url) = &self.dashboard_url {
            config.notify.dashboard_url = Some(dashboard_url.clone());
        }
    }
}
