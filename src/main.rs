use clap::{Parser, Subcommand};

use botkit::infrastructure::adapters::console::ConsoleConnector;
use botkit::infrastructure::config::ConfigFile;
use botkit::Bot;

#[derive(Parser)]
#[command(name = "botkit")]
#[command(about = "A minimal chat-bot scaffold", long_about = None)]
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

    match cli.command {
        Commands::Run => {
            run_bot(cli.config, cli.token).await;
        }
        Commands::Version => {
            println!("botkit v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => {
            init_config();
        }
    }
}

async fn run_bot(config_path: String, token_override: Option<String>) {
    let mut config = match ConfigFile::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load {}: {}", config_path, e);
            std::process::exit(1);
        }
    };
    config.apply_env();
    if let Some(token) = token_override {
        config.bot.token = token;
    }

    let base_dir = std::env::current_dir().unwrap_or_else(|_| ".".into());
    let options = match config.into_options(&base_dir) {
        Ok(options) => options,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let mut bot = Bot::new(&options, &ConsoleConnector);
    if let Err(e) = bot.initialize().await {
        tracing::error!("Command loading failed: {}", e);
        std::process::exit(1);
    }
    tracing::info!(
        "Bot ready: {} commands in {} groups",
        bot.commands().len(),
        bot.groups().len()
    );

    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutting down");
}

fn init_config() {
    let config = ConfigFile::default();
    match serde_yaml::to_string(&config) {
        Ok(yaml) => {
            println!("{}", yaml);
            println!("\nSave this to config.yaml and adjust as needed.");
        }
        Err(e) => {
            tracing::error!("Failed to render default config: {}", e);
            std::process::exit(1);
        }
    }
}
