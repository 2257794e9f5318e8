//! Command-line interface for tictactoe.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tictactoe_core::GameMode;

use crate::tui::Theme;

/// Tic-tac-toe in the terminal, against a friend or the computer.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe with a heuristic computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Skip mode selection and start in this mode
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Path to the TOML config file
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Computer thinking pause in milliseconds (overrides config)
    #[arg(long)]
    pub ai_delay_ms: Option<u64>,

    /// Starting theme (overrides config)
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Log file (overrides config)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Game mode as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Two players on one keyboard
    Pvp,
    /// Play X against the computer
    Pvc,
}

impl From<ModeArg> for GameMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Pvp => GameMode::HumanVsHuman,
            ModeArg::Pvc => GameMode::HumanVsComputer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mode_and_overrides() {
        let cli =
            Cli::try_parse_from(["tictactoe", "--mode", "pvc", "--ai-delay-ms", "0"]).unwrap();
        assert_eq!(cli.mode, Some(ModeArg::Pvc));
        assert_eq!(cli.ai_delay_ms, Some(0));
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
        assert_eq!(GameMode::from(ModeArg::Pvc), GameMode::HumanVsComputer);
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["tictactoe", "--mode", "online"]).is_err());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
