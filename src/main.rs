// src/main.rs
mod cache;
mod cli;
mod config;
mod constants;
mod crawler;
mod data_source;
mod error;
mod recap;

use cache::MatchCache;
use clap::Parser;
use cli::{Args, Command};
use config::Config;
use crawler::Crawler;
use data_source::{Region, RiotClient};
use error::AppError;
use recap::Recap;
use std::io::stdout;
use std::path::Path;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let _guard = match setup_logging(&args).await {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("aram-recap: {e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(args).await {
        error!("{e}");
        eprintln!("aram-recap: {e}");
        std::process::exit(1);
    }
}

/// Sets up logging to a daily-rolling file, plus stdout when --debug is on.
///
/// The returned guard must be kept alive for the duration of the program
/// to ensure logs are flushed properly.
async fn setup_logging(args: &Args) -> Result<WorkerGuard, AppError> {
    // Only consult the config file for a log path if it already exists;
    // first-run setup should not be triggered from here.
    let config_log_path = if Path::new(&Config::get_config_path()).exists() {
        Config::load().await.ok().and_then(|c| c.log_file_path)
    } else {
        None
    };

    let custom_log_path = args.log_file.as_ref().or(config_log_path.as_ref());
    let (log_dir, log_file_name) = match custom_log_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path.parent().unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("aram-recap.log");
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), "aram-recap.log".to_string()),
    };

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(
            EnvFilter::from_default_env().add_directive(
                "aram_recap=info"
                    .parse()
                    .map_err(|e| AppError::log_setup_error(format!("Bad log directive: {e}")))?,
            ),
        );

    let registry = tracing_subscriber::registry().with(file_layer);
    if args.debug {
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(stdout)
                    .with_ansi(true)
                    .with_filter(EnvFilter::from_default_env().add_directive(
                        "aram_recap=debug".parse().map_err(|e| {
                            AppError::log_setup_error(format!("Bad log directive: {e}"))
                        })?,
                    )),
            )
            .init();
    } else {
        registry.init();
    }

    Ok(guard)
}

async fn run(args: Args) -> Result<(), AppError> {
    if let Command::ListConfig = args.command {
        return Config::display().await;
    }

    let mut config = Config::load().await?;

    // Command-line flags override both the config file and the environment
    if let Some(api_token) = args.api_token {
        config.api_token = api_token;
    }
    if let Some(cache_dir) = args.cache_dir {
        config.cache_dir = Some(cache_dir);
    }
    if let Some(rate) = args.rate {
        config.max_requests_per_minute = rate;
    }
    config.validate()?;

    let client = RiotClient::new(&config)?;
    let cache = MatchCache::open(config.resolved_cache_dir()).await?;

    match args.command {
        Command::Crawl {
            summoner_name,
            date,
            region,
        } => {
            let region: Region = region.parse()?;
            info!(
                "Starting crawl for '{}' on {} ({})",
                summoner_name, date, region
            );
            let summary = Crawler::new(client, cache)
                .crawl(&summoner_name, &date, region)
                .await?;
            println!(
                "Crawled {} match(es): {} fetched, {} already cached",
                summary.listed, summary.fetched, summary.skipped
            );
        }
        Command::Recap {
            summoner_name,
            region,
        } => {
            let region: Region = region.parse()?;
            info!("Computing recap for '{}' ({})", summoner_name, region);
            let summary = Recap::new(client, cache).run(&summoner_name, region).await?;
            println!("{summary}");
        }
        Command::ListConfig => unreachable!("handled above"),
    }

    Ok(())
}
