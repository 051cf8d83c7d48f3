//! Implementação dos comandos CLI do gradaco.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::colony::{SearchController, SearchReport};
use crate::dataset::Dataset;
use crate::types::config::{Config, SearchConfig};
use crate::GradacoResult;

/// Initializes configuration in the specified directory.
pub fn init(path: Option<PathBuf>) -> GradacoResult<()> {
    let target_dir = path.unwrap_or_else(|| PathBuf::from("."));

    // Create directory if it doesn't exist
    if !target_dir.exists() {
        std::fs::create_dir_all(&target_dir)?;
        tracing::info!("Directory created: {}", target_dir.display());
    }

    let config_path = target_dir.join("gradaco.toml");

    if config_path.exists() {
        println!("Configuration already exists at: {}", config_path.display());
        return Ok(());
    }

    Config::default_config().save(&config_path)?;

    println!("Configuration created at: {}", config_path.display());
    println!();
    println!("Next step:");
    println!("  gradaco mine data.json");

    Ok(())
}

/// Overrides from the `mine` command line.
#[derive(Debug, Clone, Default)]
pub struct MineOptions {
    pub min_support: Option<f64>,
    pub iterations: Option<usize>,
    pub seed: Option<u64>,
    pub output: Option<PathBuf>,
}

impl MineOptions {
    /// Applies the overrides on top of the configured search settings.
    pub fn apply(&self, base: &SearchConfig) -> SearchConfig {
        let mut search = base.clone();
        if let Some(min_support) = self.min_support {
            search.min_support = min_support;
        }
        if let Some(iterations) = self.iterations {
            search.max_iterations = iterations;
        }
        if self.seed.is_some() {
            search.seed = self.seed;
        }
        search
    }
}

/// Mines a dataset and prints the winning patterns.
pub fn mine(data: &Path, options: &MineOptions, config: &Config) -> GradacoResult<SearchReport> {
    let search = options.apply(&config.search);
    search.validate()?;

    let dataset = Dataset::load(data)?;
    let store = dataset.relation_store(search.min_support)?;

    let started_at = Utc::now();
    let mut controller = SearchController::new(&store, search.clone())?;
    let outcome = controller.run()?;

    let report = SearchReport::new(&outcome, &dataset.column_titles(), search.min_support, started_at);
    print!("{}", report.summary());

    if let Some(output) = &options.output {
        report.save(output)?;
        println!("Report written to: {}", output.display());
    }

    Ok(report)
}

/// Shows version.
pub fn version() {
    println!("gradaco {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Ant colony search for gradual patterns");
}
