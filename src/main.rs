use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use home_inventory::cli::{handle_audit_command, handle_config_command, run_shell, ConfigCommands};
use home_inventory::config::{InventoryPaths, Settings};
use home_inventory::logging::init_logging;

#[derive(Parser)]
#[command(
    name = "home-inventory",
    version,
    about = "Console-driven inventory manager for real-estate home records",
    long_about = "Keeps an in-memory inventory of homes for the length of a session. \
                  Add, remove, update and list homes from an interactive menu, then \
                  optionally print the inventory to a text file on the way out."
)]
struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu (default)
    Shell {
        /// Print the inventory to this file instead of the configured one
        #[arg(short, long)]
        export_file: Option<PathBuf>,
    },

    /// Show or change configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Show recent inventory changes
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.unwrap_or(Commands::Shell { export_file: None }) {
        Commands::Shell { export_file } => run_shell(export_file)?,
        Commands::Config(cmd) => {
            let paths = InventoryPaths::new()?;
            let mut settings = Settings::load_or_create(&paths)?;
            handle_config_command(&paths, &mut settings, cmd)?;
        }
        Commands::Audit { limit } => handle_audit_command(&InventoryPaths::new()?, limit)?,
    }

    Ok(())
}
