mod bots;
mod store;

use clap::{Parser, Subcommand};
use silbot_api::BotApi;
use silbot_core::config::{self, Config};
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "silbot", version, about = "Telegram Bot API framework, demo bots")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the token and print the bot's username.
    Me,
    /// Echo text messages, with an inline and a reply keyboard demo.
    Echo,
    /// Count the text messages of each chat in SQLite.
    Counter,
    /// Check whether users joined or administer a channel.
    Joined {
        /// Channel id; the bot must be an administrator there.
        #[arg(long, allow_hyphen_values = true)]
        channel: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let fallback = config_fallback_notice(&cli.config);
    let cfg = config::load(&cli.config)?;
    let _log_guard = init_logging(&cfg);
    if let Some(notice) = fallback {
        info!("{notice}");
    }
    cfg.validate()?;

    let bot = Arc::new(BotApi::from_config(&cfg.bot)?);
    let me = bots::check_token(&bot).await?;

    if let Commands::Me = cli.command {
        println!("{}", me.display_name());
        return Ok(());
    }

    let shutdown = CancellationToken::new();
    let signal = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received shutdown signal");
            signal.cancel();
        }
    });

    let dispatcher = bots::dispatcher(bot, &cfg.polling, shutdown);
    match cli.command {
        Commands::Me => {}
        Commands::Echo => {
            dispatcher.run(bots::echo::EchoBot).await;
        }
        Commands::Counter => {
            let store = store::SqliteManager::open(&cfg.storage.db_path).await?;
            dispatcher
                .database_manager(Arc::new(store))
                .run(bots::counter::CounterBot)
                .await;
        }
        Commands::Joined { channel } => {
            dispatcher
                .run(bots::joined::JoinedBot {
                    channel_id: channel,
                })
                .await;
        }
    }

    Ok(())
}

/// Logging is configured from the file, so the missing-file notice has to
/// wait until the subscriber exists.
fn config_fallback_notice(path: &str) -> Option<String> {
    (!Path::new(path).exists())
        .then(|| format!("Config file not found at {path}, using defaults"))
}

/// Console logging, plus a daily rolling file when `logging.log_dir` is set.
/// `RUST_LOG` wins over `logging.level`.
fn init_logging(cfg: &Config) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.logging.level));

    let (file_layer, guard) = match cfg.logging.log_dir.as_deref() {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "silbot.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .init();
    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_notice_only_for_missing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(config_fallback_notice(file.path().to_str().unwrap()), None);

        let notice = config_fallback_notice("/definitely/not/here/silbot.toml").unwrap();
        assert!(notice.contains("/definitely/not/here/silbot.toml"));
        assert!(notice.contains("using defaults"));
    }
}
