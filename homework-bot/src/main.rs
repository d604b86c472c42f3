//! Homework Bot
//!
//! Relays review statuses of Practicum homeworks to a Telegram chat.
//!
//! Architecture:
//! - Configuration: secrets and tunables from the command line or environment
//! - Repositories: the review API and the chat, behind traits
//! - Services: response validation and status formatting
//! - Scheduler: the poll, compare, notify, sleep loop
//!
//! The bot polls the review API every retry period and sends a message only
//! when the newest status (or the error it ran into) differs from the last
//! message it delivered.

mod config;
mod error;
mod logging;
mod repository;
mod scheduler;
mod service;

use anyhow::{Context, Result};
use clap::Parser;
use homework_client::{DEFAULT_ENDPOINT, PracticumClient, TelegramClient};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

use crate::config::Config;
use crate::repository::{
    HomeworkRepository, HttpHomeworkRepository, MessageRepository, TelegramMessageRepository,
};
use crate::scheduler::{PollOutcome, StatusPoller};

#[derive(Parser)]
#[command(name = "homework-bot")]
#[command(about = "Relays Practicum homework review statuses to Telegram", long_about = None)]
struct Cli {
    /// Practicum OAuth token
    #[arg(long, env = "PRACTICUM_TOKEN", hide_env_values = true)]
    practicum_token: Option<String>,

    /// Telegram bot token
    #[arg(long, env = "TELEGRAM_TOKEN", hide_env_values = true)]
    telegram_token: Option<String>,

    /// Chat receiving the notifications
    #[arg(long, env = "TELEGRAM_CHAT_ID")]
    telegram_chat_id: Option<String>,

    /// Homework statuses endpoint
    #[arg(long, env = "PRACTICUM_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Seconds between two polls
    #[arg(long, env = "RETRY_PERIOD", default_value_t = 600)]
    retry_period: u64,

    /// Timeout of every outbound request, in seconds
    #[arg(long, env = "REQUEST_TIMEOUT", default_value_t = 30)]
    request_timeout: u64,

    /// Debug log file, truncated on start
    #[arg(long, env = "LOG_FILE", default_value = "main.log")]
    log_file: PathBuf,

    /// Poll once and exit instead of looping
    #[arg(long)]
    once: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            practicum_token: cli.practicum_token.unwrap_or_default(),
            telegram_token: cli.telegram_token.unwrap_or_default(),
            telegram_chat_id: cli.telegram_chat_id.unwrap_or_default(),
            endpoint: cli.endpoint,
            retry_period: Duration::from_secs(cli.retry_period),
            request_timeout: Duration::from_secs(cli.request_timeout),
            log_file: cli.log_file,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Variables already set in the environment take precedence over `.env`
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let once = cli.once;
    let config = Config::from(cli);

    logging::init(&config.log_file).context("Failed to initialize logging")?;

    info!("Starting Homework Bot");

    if let Err(e) = config.validate() {
        error!("CRITICAL: {}. The bot is stopped.", e);
        return Err(e).context("Invalid configuration");
    }

    info!(
        "Loaded configuration: endpoint={}, chat_id={}, retry_period={:?}, request_timeout={:?}",
        config.endpoint, config.telegram_chat_id, config.retry_period, config.request_timeout
    );

    let practicum = PracticumClient::with_endpoint(
        config.endpoint.clone(),
        config.practicum_token.clone(),
        config.request_timeout,
    )
    .context("Failed to create Practicum client")?;

    let telegram = TelegramClient::new(
        config.telegram_token.clone(),
        config.telegram_chat_id.clone(),
        config.request_timeout,
    )
    .context("Failed to create Telegram client")?;

    let homeworks: Arc<dyn HomeworkRepository> = Arc::new(HttpHomeworkRepository::new(practicum));
    let messages: Arc<dyn MessageRepository> = Arc::new(TelegramMessageRepository::new(telegram));

    let mut poller = StatusPoller::new(config, homeworks, messages);

    if once {
        info!("Running a single poll cycle");
        if poller.poll_once().await == PollOutcome::SendFailed {
            anyhow::bail!("Notification could not be delivered");
        }
        return Ok(());
    }

    if let Err(e) = poller.run().await {
        error!("Poller error: {}", e);
        return Err(e);
    }

    Ok(())
}
