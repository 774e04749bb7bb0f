//! Operator CLI for movies-service.
//!
//! Runs gateway operations in-process against the configured upstreams,
//! without starting the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Aggregate a movie and print it as JSON
//! cargo run --bin movies-cli -- movie abc
//!
//! # Check that both upstreams answer
//! cargo run --bin movies-cli -- check
//!
//! # Show the effective configuration
//! cargo run --bin movies-cli -- config
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `MOVIE_INFO_URL` and `REVIEWS_URL` are required, see
//! [`movies_service::config`].

use movies_service::application::services::MovieService;
use movies_service::config::{self, Config};
use movies_service::server::build_movie_service;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::process::ExitCode;

/// CLI tool for operating movies-service.
#[derive(Parser)]
#[command(name = "movies-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Aggregate a movie with its reviews and print it
    Movie {
        /// Movie info id
        id: String,

        /// Request movie info and reviews concurrently
        #[arg(long)]
        parallel: bool,
    },

    /// Check upstream reachability
    Check,

    /// Show configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = config::load_from_env()?;

    match cli.command {
        Commands::Movie { id, parallel } => {
            config.parallel_fetch |= parallel;
            let service = build_movie_service(&config)?;
            Ok(show_movie(&service, &id).await)
        }
        Commands::Check => {
            let service = build_movie_service(&config)?;
            Ok(check_upstreams(&service).await)
        }
        Commands::Config => {
            show_config(&config);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Prints the aggregated movie, or the status and message the gateway would answer with.
async fn show_movie(service: &MovieService, id: &str) -> ExitCode {
    println!("{}", format!("🎬 Movie {id}").bright_blue().bold());
    println!();

    match service.get_movie_by_id(id).await {
        Ok(movie) => {
            match serde_json::to_string_pretty(&movie) {
                Ok(json) => println!("{json}"),
                Err(e) => println!("{} {}", "Failed to render movie:".red(), e),
            }
            println!();
            println!(
                "  Reviews: {}",
                movie.review_list.len().to_string().bright_white().bold()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            let status = e.status();
            println!("  Status:  {}", status.to_string().red().bold());
            println!("  Message: {}", e.to_string().yellow());
            ExitCode::FAILURE
        }
    }
}

/// Probes both upstreams and prints one line each.
///
/// # Output Format
///
/// ```text
/// 🔍 Upstream check
///
///   MoviesInfoService   OK
///   ReviewsService      FAIL
/// ```
async fn check_upstreams(service: &MovieService) -> ExitCode {
    println!("{}", "🔍 Upstream check".bright_blue().bold());
    println!();

    let health = service.upstream_health().await;

    for (name, reachable) in [
        ("MoviesInfoService", health.movie_info),
        ("ReviewsService", health.reviews),
    ] {
        let status = if reachable { "OK".green() } else { "FAIL".red() };
        println!("  {:<19} {}", name.cyan(), status);
    }
    println!();

    if health.movie_info && health.reviews {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Prints the validated configuration.
fn show_config(config: &Config) {
    println!("{}", "⚙️  Configuration".bright_blue().bold());
    println!();
    println!("  Movie info URL:  {}", config::mask_credentials(&config.movie_info_url).cyan());
    println!("  Reviews URL:     {}", config::mask_credentials(&config.reviews_url).cyan());
    println!("  Listen:          {}", config.listen_addr);
    println!("  Timeout:         {}ms", config.request_timeout_ms);
    println!(
        "  Retries:         {} (backoff {}ms)",
        config.max_retries, config.retry_backoff_ms
    );
    println!("  Fetch mode:      {:?}", config.fetch_mode());
    println!();
}
