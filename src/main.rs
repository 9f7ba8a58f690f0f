use clap::{Parser, Subcommand};
use std::time::Duration;

mod application;
mod domain;
mod infrastructure;

use application::services::ChatService;
use domain::entities::Message;
use domain::traits::Chat;
use infrastructure::adapters::console::ConsoleAdapter;
use infrastructure::config::Config;

#[derive(Parser)]
#[command(name = "patter-bot")]
#[command(about = "A tiny event-driven chat bot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat with the bot on the console
    Run,
    /// Replay the canned demonstration conversation
    Demo,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run => {
            run_bot(cli.config);
        }
        Commands::Demo => {
            run_demo(cli.config);
        }
        Commands::Version => {
            println!("patter-bot v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => {
            init_config();
        }
    }
}

fn load_config(config_path: &str) -> Config {
    if std::path::Path::new(config_path).exists() {
        Config::load(config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::load_env()
        })
    } else {
        Config::load_env()
    }
}

fn run_bot(config_path: String) {
    let config = load_config(&config_path);
    tracing::info!("Starting patter-bot: {}", config.bot.name);

    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let adapter = ConsoleAdapter::new(&config.bot.name);
        let service = ChatService::new(adapter);
        run_console_bot(service, &config.console.prompt).await;
    });
}

async fn run_console_bot(mut service: ChatService<ConsoleAdapter>, prompt: &str) {
    if let Err(e) = service.chat().start().await {
        tracing::error!("Failed to start chat: {}", e);
        return;
    }

    let info = service.chat().info();
    let mut triggers: Vec<&str> = service.bot().triggers().collect();
    triggers.sort_unstable();
    tracing::info!("Bot started: {} (answers to: {})", info.name, triggers.join(", "));

    // Main loop (for console mode)
    loop {
        let Some(input) = service.chat().read_line(prompt).await else {
            break;
        };
        if input.is_empty() {
            continue;
        }
        if input == "exit" || input == "quit" {
            break;
        }

        let message = Message::from_text("console", input).with_platform("console");
        if let Err(e) = service.process(message).await {
            tracing::error!("Failed to process message: {}", e);
        }
    }

    tracing::info!("Console chat closed");
}

fn run_demo(config_path: String) {
    let config = load_config(&config_path);
    tracing::info!("Replaying the demo conversation: {}", config.bot.name);

    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let adapter = ConsoleAdapter::new(&config.bot.name);
        let mut service = ChatService::new(adapter);

        let pause = Duration::from_secs_f64(config.demo.pause_seconds);
        let script = ["hi", "age?", "age?", "age?", "bye"];

        for (i, line) in script.iter().enumerate() {
            // Pause between the second and third exchange so the age
            // output has something to show.
            if i == 2 {
                tokio::time::sleep(pause).await;
            }

            println!("> {}", line);
            let message = Message::from_text("console", *line).with_platform("console");
            if let Err(e) = service.process(message).await {
                tracing::error!("Failed to process message: {}", e);
                return;
            }
        }
    });
}

fn init_config() {
    let config = Config::default();
    match serde_yaml::to_string(&config) {
        Ok(yaml) => {
            println!("{}", yaml);
            println!("\nSave this to config.yaml and adjust as needed.");
        }
        Err(e) => tracing::error!("Failed to serialize config: {}", e),
    }
}
