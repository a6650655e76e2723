use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use podium::client::{create_http_client, LeaderboardApi, SlackWebhook};
use podium::fetch::{fetch_and_post, fetch_leaderboard, watch, Watcher};
use podium::Error;

const EXIT_SUCCESS: i32 = 0;
const EXIT_AUTH: i32 = 1;
const EXIT_NETWORK: i32 = 2;
const EXIT_DECODE: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch the leaderboard and post it to Slack (default if no subcommand)
    Post {
        /// Print the message instead of posting it
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the ranked leaderboard without posting
    Preview,
    /// Poll the leaderboard and post whenever the ranking changes
    Watch {
        /// Delay between polls, e.g. "15m" (defaults to poll_interval from config)
        #[arg(short, long, value_parser = humantime::parse_duration)]
        interval: Option<Duration>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "podium")]
#[command(about = "Post a ranked Advent of Code leaderboard to Slack", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/podium/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn exit_code(err: &Error) -> i32 {
    match err {
        Error::Transport(_) => EXIT_NETWORK,
        Error::Decode(_) => EXIT_DECODE,
    }
}

fn fail(err: Error) -> ! {
    tracing::error!("{}", err);
    if matches!(err, Error::Decode(_)) {
        eprintln!("Hint: an expired session cookie makes the leaderboard endpoint return HTML instead of JSON.");
    }
    std::process::exit(exit_code(&err));
}

fn report_success(message: &str) {
    if podium::output::should_use_colors() {
        eprintln!("{}", message.green());
    } else {
        eprintln!("{}", message);
    }
}

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for rustls 0.23+)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Post { dry_run: false });
    let start_time = Instant::now();

    if let Err(e) = podium::logging::init(cli.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match podium::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = podium::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    tracing::debug!(url = %config.leaderboard_url, timeout = ?config.timeout(), "config loaded");

    let session = match podium::credentials::get_session_from_env() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Credential error: {}", e);
            std::process::exit(EXIT_AUTH);
        }
    };

    let http = match create_http_client(config.timeout()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create HTTP client: {}", e);
            std::process::exit(EXIT_NETWORK);
        }
    };

    let source = LeaderboardApi::new(http.clone(), config.leaderboard_url.clone(), session);

    // Preview and dry runs never touch the webhook
    let webhook = || match podium::credentials::get_webhook_url(&config) {
        Ok(url) => SlackWebhook::new(http.clone(), url),
        Err(e) => {
            eprintln!("Credential error: {}", e);
            std::process::exit(EXIT_AUTH);
        }
    };

    match command {
        Commands::Preview => {
            let leaderboard = fetch_leaderboard(&source).await.unwrap_or_else(|e| fail(e));
            println!("{}", podium::output::format_leaderboard(&leaderboard));
        }
        Commands::Post { dry_run: true } => {
            let leaderboard = fetch_leaderboard(&source).await.unwrap_or_else(|e| fail(e));
            println!("{}", podium::output::format_message(config.header(), &leaderboard));
        }
        Commands::Post { dry_run: false } => {
            let notifier = webhook();
            let leaderboard = fetch_and_post(&source, &notifier, config.header())
                .await
                .unwrap_or_else(|e| fail(e));
            report_success(&format!(
                "Successfully posted the leaderboard to Slack ({} members in {:?})",
                leaderboard.len(),
                start_time.elapsed()
            ));
        }
        Commands::Watch { interval } => {
            let notifier = webhook();
            let interval = interval.unwrap_or_else(|| config.poll_interval());
            let mut watcher = Watcher::new(config.header());

            tracing::info!(interval = %humantime::format_duration(interval), "watching leaderboard");

            let shutdown = async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::error!("failed to listen for Ctrl-C: {}", e);
                    std::future::pending::<()>().await;
                }
            };
            watch(&mut watcher, &source, &notifier, interval, shutdown).await;
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
