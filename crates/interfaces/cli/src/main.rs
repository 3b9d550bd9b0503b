mod logging;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use giftwise_config::{AppConfig, DEFAULT_CONFIG_PATH};
use giftwise_ui::wizard::print_suggestions;
use giftwise_ui::{run_gift_wizard, suggestions};

#[derive(Debug, Parser)]
#[command(
    name = "giftwise",
    version,
    about = "A terminal wizard that suggests gifts"
)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the wizard (default).
    Run,
    /// Print the suggestion catalog.
    Suggestions {
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration as TOML.
    #[command(visible_alias = "config")]
    Configuration {
        /// Also write it to the --config path.
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = AppConfig::load_from(&cli.config)?;
    execute(cli.command.unwrap_or(Commands::Run), &config, &cli.config)
}

/// Only the wizard writes a log file; the printing commands touch nothing
/// on disk unless asked to save.
fn execute(command: Commands, config: &AppConfig, config_path: &Path) -> Result<()> {
    match command {
        Commands::Run => {
            let _log_guard = logging::init(&config.telemetry)?;
            info!(config = %config_path.display(), "giftwise starting");
            let wizard = run_gift_wizard(config)?;
            info!(
                step = ?wizard.step(),
                style = ?wizard.profile().style,
                "session ended"
            );
        }
        Commands::Suggestions { json } => {
            let mut stdout = io::stdout().lock();
            if json {
                writeln!(stdout, "{}", serde_json::to_string_pretty(suggestions())?)?;
            } else {
                print_suggestions(&mut stdout)?;
            }
        }
        Commands::Configuration { save } => {
            print!("{}", config.to_toml()?);
            if save {
                config.save_to(config_path)?;
                println!("\nSaved to {}", config_path.display());
            }
        }
    }

    Ok(())
}
