use clap::{Parser, Subcommand};
use std::sync::{Arc, Mutex};

mod application;
mod domain;
mod infrastructure;

use application::services::{ChatService, CommandService, ConversationStore};
use infrastructure::adapters::console::ConsoleChat;
use infrastructure::assistant::HttpAssistant;
use infrastructure::config::Config;

#[derive(Parser)]
#[command(name = "counsel-chat")]
#[command(about = "A console chat client for a local assistant service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Assistant endpoint (overrides config)
    #[arg(short, long)]
    endpoint: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat session
    Chat,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging; stderr so the transcript on stdout stays clean
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat => {
            run_chat(cli.config, cli.endpoint);
        }
        Commands::Version => {
            println!("counsel-chat v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => {
            init_config();
        }
    }
}

fn run_chat(config_path: String, endpoint_override: Option<String>) {
    // Load config
    let mut config = if std::path::Path::new(&config_path).exists() {
        Config::load(&config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::load_env()
        })
    } else {
        Config::load_env()
    };

    if let Some(endpoint) = endpoint_override {
        config.backend.endpoint = endpoint;
    }

    tracing::info!(
        "Starting counsel-chat: {} via {}",
        config.bot.name,
        config.backend.endpoint
    );

    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let assistant = HttpAssistant::new(&config.backend.endpoint);
        let store = Arc::new(Mutex::new(ConversationStore::new(&config.bot.greeting)));
        let service = Arc::new(ChatService::new(assistant, store));

        let mut commands = CommandService::new(&config.bot.command_prefix);
        commands.register_defaults();
        tracing::debug!("Registered {} commands", commands.command_count());

        let console = ConsoleChat::new(service, commands, &config.bot.name);
        console.run().await;
    });
}

fn init_config() {
    let config = Config::default();
    let yaml = serde_yaml::to_string(&config).unwrap();
    println!("{}", yaml);
    println!("\nSave this to config.yaml and adjust as needed.");
}
