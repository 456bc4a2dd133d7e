use std::sync::Arc;

use clap::{Parser, Subcommand};

use btc_bot::application::errors::{BotError, ConfigError};
use btc_bot::application::messaging::MessageDispatcher;
use btc_bot::application::triage::{KeywordClassifier, LlmClassifier};
use btc_bot::domain::traits::{Bot, Classifier};
use btc_bot::infrastructure::adapters::{ConsoleAdapter, TelegramAdapter};
use btc_bot::infrastructure::config::{ClassifierPolicy, Config, Transport};
use btc_bot::infrastructure::llm::build_provider;
use btc_bot::infrastructure::pricing::CoinpaprikaFetcher;

#[derive(Parser)]
#[command(name = "btc-bot")]
#[command(about = "Telegram bot that answers BTC/USDT price questions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Bot token (overrides config)
    #[arg(short, long)]
    token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot
    Run,
    /// Answer a single message and exit
    Ask {
        /// Message text
        text: String,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run => run_bot(&cli.config, cli.token).await,
        Commands::Ask { ref text } => ask(&cli.config, text).await,
        Commands::Version => {
            println!("btc-bot v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn load_config(config_path: &str, token_override: Option<String>) -> Result<Config, BotError> {
    let mut config = if std::path::Path::new(config_path).exists() {
        match Config::load(config_path) {
            Ok(mut config) => {
                config.apply_env();
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config: {}, using defaults", e);
                Config::load_env()
            }
        }
    } else {
        Config::load_env()
    };

    if let Some(token) = token_override {
        config.set_telegram_token(token);
    }

    config.validate()?;
    Ok(config)
}

/// Wire classifier, fetcher and router from config
fn build_dispatcher(config: &Config) -> Result<MessageDispatcher, BotError> {
    let fetcher = CoinpaprikaFetcher::new(&config.price)
        .map_err(|e| BotError::Internal(e.to_string()))?;

    let classifier: Arc<dyn Classifier> = match config.classifier.policy {
        ClassifierPolicy::Keyword => Arc::new(KeywordClassifier::new()),
        ClassifierPolicy::Llm => {
            let llm = build_provider(&config.llm)
                .map_err(|e| ConfigError::InvalidValue(format!("llm: {}", e)))?;
            Arc::new(
                LlmClassifier::new(llm)
                    .with_temperature(config.llm.temperature)
                    .with_max_tokens(config.llm.max_tokens),
            )
        }
    };

    tracing::info!(
        "Using {} classifier, price endpoint {} (timeout {}s)",
        classifier.name(),
        config.price.endpoint,
        config.price.timeout_secs
    );

    Ok(MessageDispatcher::new(&config.bot.prefix, classifier, Arc::new(fetcher)))
}

async fn run_bot(config_path: &str, token_override: Option<String>) -> Result<(), BotError> {
    let config = load_config(config_path, token_override)?;
    tracing::info!("Starting {}", config.bot.name);

    let dispatcher = build_dispatcher(&config)?;

    match config.transport()? {
        Transport::Telegram { token } => {
            let mut bot = TelegramAdapter::new(token);
            run_telegram_bot(&mut bot, &dispatcher).await
        }
        Transport::Console => run_console_bot(ConsoleAdapter::new(), &dispatcher).await,
    }
}

async fn run_telegram_bot(bot: &mut TelegramAdapter, dispatcher: &MessageDispatcher) -> Result<(), BotError> {
    bot.start().await?;
    bot.fetch_bot_info().await?;

    let info = bot.bot_info();
    tracing::info!("Bot started: @{}", info.username);

    let mut offset: i64 = 0;
    let timeout_seconds = 30;

    tracing::info!("Starting message loop...");

    loop {
        match bot.get_updates(offset, timeout_seconds).await {
            Ok(updates) => {
                if !updates.is_empty() {
                    tracing::info!("Received {} updates", updates.len());
                }
                for update in &updates {
                    let Some(msg) = &update.message else {
                        continue;
                    };
                    let Some(text) = msg.text.as_deref() else {
                        continue;
                    };

                    let chat_id = msg.chat.id.to_string();
                    let sender_id = msg.from
                        .as_ref()
                        .map(|u| u.id.to_string())
                        .unwrap_or_else(|| chat_id.clone());

                    let reply = dispatcher.process_text(&chat_id, sender_id, text).await;
                    if let Err(e) = bot.send_reply(&chat_id, &reply).await {
                        tracing::error!("Failed to send message: {}", e);
                    }
                }

                offset = TelegramAdapter::get_next_offset(&updates, offset);
            }
            Err(e) => {
                tracing::error!("Failed to get updates: {}", e);
                tokio::time::sleep(tokio::time::Duration::from_secs(5)).await;
            }
        }
    }
}

async fn run_console_bot(bot: ConsoleAdapter, dispatcher: &MessageDispatcher) -> Result<(), BotError> {
    bot.start().await?;

    let info = bot.bot_info();
    tracing::info!("Bot started: @{}", info.username);

    while let Some(input) = bot.read_line("> ").await? {
        if input.is_empty() {
            continue;
        }

        let reply = dispatcher.process_text("console", "console", input).await;
        bot.send_reply("console", &reply).await?;
    }

    Ok(())
}

async fn ask(config_path: &str, text: &str) -> Result<(), BotError> {
    let config = load_config(config_path, None)?;
    let dispatcher = build_dispatcher(&config)?;

    let reply = dispatcher.process_text("cli", "cli", text).await;
    println!("{}", reply.text);
    Ok(())
}

fn init_config() -> Result<(), BotError> {
    let config = Config::default();
    let yaml = serde_yaml::to_string(&config)
        .map_err(|e| BotError::Internal(format!("Failed to render config: {}", e)))?;
    println!("{}", yaml);
    println!("\nSave this to config.yaml and adjust as needed.");
    Ok(())
}
