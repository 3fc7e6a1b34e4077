//! Home Assistant lights skill - main entry point

use anyhow::Context;
use clap::{Parser, Subcommand};
use hass_lights_skill::{
    client::create_client,
    config::DEFAULT_CONFIG_PATH,
    intents::registered_intents,
    logging::{init_logging, LogConfig},
    server::stdio::serve_stdio,
    IntentDispatcher, IntentRequest, SkillConfig,
};
use std::path::PathBuf;
use tracing::info;

/// Command line arguments
#[derive(Parser)]
#[command(name = "hass-lights-skill")]
#[command(about = "Voice assistant skill controlling Home Assistant lights")]
#[command(version)]
struct Cli {
    /// Path to the INI configuration file
    #[arg(short, long, env = "HASS_SKILL_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer newline-delimited JSON intents from stdin on stdout
    Serve,
    /// Handle a single intent and print the completion
    Handle {
        /// Namespaced intent name, e.g. s710:turnOnLight
        #[arg(short, long)]
        intent: String,
        /// Site of the originating voice device
        #[arg(short, long)]
        site: String,
        #[arg(long, default_value = "cli")]
        session: String,
        /// Slot value as name=value, may be repeated
        #[arg(long = "slot", value_parser = parse_slot)]
        slots: Vec<(String, String)>,
    },
    /// Print the intent names to register with the NLU pipeline
    Intents,
}

fn parse_slot(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected name=value, got '{raw}'"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = init_logging(LogConfig::from_env()) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    if let Commands::Intents = cli.command {
        for intent in registered_intents() {
            println!("{intent}");
        }
        return Ok(());
    }

    let config = SkillConfig::load(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;
    info!("Using Home Assistant at {}", config.hass_host);

    let client = create_client(&config)?;
    let dispatcher = IntentDispatcher::new(&config, client);

    match cli.command {
        Commands::Serve => {
            info!("Serving {} intents on stdio", dispatcher.intent_list().len());
            serve_stdio(&dispatcher).await?;
        }
        Commands::Handle {
            intent,
            site,
            session,
            slots,
        } => {
            let mut request = IntentRequest::new(session, site, intent);
            request.slots.extend(slots);

            let completion = dispatcher.handle(&request).await;
            println!("{}", serde_json::to_string_pretty(&completion)?);
        }
        Commands::Intents => {}
    }

    Ok(())
}
