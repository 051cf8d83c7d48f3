use clap::Parser;
use gradaco::cli::commands::MineOptions;
use gradaco::cli::{Cli, Commands};
use gradaco::types::config::Config;
use gradaco::GradacoResult;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> GradacoResult<()> {
    let cli = Cli::parse();

    // Load configuration first (no logging yet)
    let config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::default_config()
    };

    // Determine log level: CLI flags take precedence over config
    let log_level = if cli.quiet {
        "error".to_string()
    } else if cli.verbose {
        "debug".to_string()
    } else {
        config.general.log_level.clone()
    };

    let filter = EnvFilter::from_default_env().add_directive(
        format!("gradaco={}", log_level)
            .parse()
            .unwrap_or_else(|_| "gradaco=info".parse().expect("fallback directive is valid")),
    );

    let registry = tracing_subscriber::registry().with(filter);
    if config.general.log_format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }

    tracing::debug!("Configuration loaded from: {}", cli.config.display());

    match cli.command {
        Commands::Init { path } => {
            gradaco::cli::commands::init(path)?;
        }
        Commands::Mine {
            data,
            min_support,
            iterations,
            seed,
            output,
        } => {
            let options = MineOptions {
                min_support,
                iterations,
                seed,
                output,
            };
            gradaco::cli::commands::mine(&data, &options, &config)?;
        }
        Commands::Version => {
            gradaco::cli::commands::version();
        }
    }

    Ok(())
}
