mod client;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "focusguard")]
#[command(about = "Focusguard CLI - Control the focusguard daemon", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter focus mode
    Focus {
        /// Duration in minutes (defaults to the daemon's configured duration)
        minutes: Option<u32>,
    },
    /// Leave focus mode early
    Normal,
    /// Show the current mode and remaining focus time
    Status {
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a site to the focus-mode block list
    Block {
        /// Substring matched against the tab URL, e.g. news.example
        entry: String,
    },
    /// List user-blocked sites
    Blocked,
    /// List the browsers the daemon watches
    Browsers,
    /// Check that the daemon is running
    Ping,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Focus { minutes } => commands::focus(minutes).await,
        Commands::Normal => commands::normal().await,
        Commands::Status { json } => commands::status(json).await,
        Commands::Block { entry } => commands::block(entry).await,
        Commands::Blocked => commands::blocked().await,
        Commands::Browsers => commands::browsers().await,
        Commands::Ping => commands::ping().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_minutes_are_optional() {
        let cli = Cli::try_parse_from(["focusguard", "focus"]).unwrap();
        assert!(matches!(cli.command, Commands::Focus { minutes: None }));

        let cli = Cli::try_parse_from(["focusguard", "focus", "45"]).unwrap();
        assert!(matches!(cli.command, Commands::Focus { minutes: Some(45) }));
    }

    #[test]
    fn status_accepts_json_flag() {
        let cli = Cli::try_parse_from(["focusguard", "status", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Status { json: true }));
    }

    #[test]
    fn block_requires_an_entry() {
        assert!(Cli::try_parse_from(["focusguard", "block"]).is_err());
    }

    #[test]
    fn negative_minutes_are_rejected() {
        assert!(Cli::try_parse_from(["focusguard", "focus", "-5"]).is_err());
    }
}
