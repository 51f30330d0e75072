//! Order pipeline benchmark binary
//!
//! Usage:
//!   order-pipeline
//!   order-pipeline --config config/pipeline.toml --messages 500000
//!   order-pipeline --json-report > report.json

use anyhow::{Context, Result};
use clap::Parser;
use order_pipeline::run;
use pipeline_config::PipelineConfig;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "order-pipeline")]
#[command(about = "Encode, decode and hand off synthetic orders, reporting latency")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of orders to generate (overrides config)
    #[arg(short, long)]
    messages: Option<u64>,

    /// SPSC channel capacity, a power of two (overrides config)
    #[arg(long)]
    capacity: Option<usize>,

    /// Log level or filter directive (overrides config)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Enable JSON logging format
    #[arg(long)]
    json_logs: bool,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json_report: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = PipelineConfig::load(args.config.as_deref())?;
    apply_overrides(&mut config, &args);
    config.validate()?;

    init_logging(&config)?;

    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    info!("Starting order pipeline benchmark");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let report = run(&config).map_err(|e| {
        error!("Pipeline run failed: {:#}", e);
        e
    })?;

    if args.json_report {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{json}");
    } else {
        println!("{report}");
    }

    Ok(())
}

fn apply_overrides(config: &mut PipelineConfig, args: &Args) {
    if let Some(messages) = args.messages {
        config.workload.message_count = messages;
    }
    if let Some(capacity) = args.capacity {
        config.channel.capacity = capacity;
    }
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.json = true;
    }
}

fn init_logging(config: &PipelineConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.logging.level)
        .with_context(|| format!("Invalid log level {:?}", config.logging.level))?;

    // Logs go to stderr so stdout carries only the report
    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}
