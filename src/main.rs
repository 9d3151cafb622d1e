use anyhow::{Context, Result};
use clap::Parser;
use hr_analytics::cli::{self, Cli};
use hr_analytics::ConfigManager;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create log directory: {}", parent.display())
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;

            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(Mutex::new(file))
                        .with_current_span(true)
                        .with_span_list(false),
                )
                .with(env_filter("hrintel=info,hr_analytics=info"))
                .init();
        }
        // Terminal output belongs to the reports; keep stderr quiet by default
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .with(env_filter("warn"))
                .init();
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let mut config = ConfigManager::load()?;
    if let Some(api_base) = &args.api_base {
        config.api_base = api_base.trim_end_matches('/').to_string();
    }

    init_logging(config.log_file.as_deref())?;
    info!(
        "Configuration loaded: api_base={}, timeout={}s, state_dir={}",
        config.api_base,
        config.timeout_seconds,
        config.state_dir.display()
    );

    cli::run(args, config).await
}
