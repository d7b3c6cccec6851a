//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Vitalis using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Vitalis - Patient Records HTTP Service
#[derive(Parser, Debug)]
#[command(name = "vitalis")]
#[command(version, about, long_about = None)]
#[command(author = "Vitalis Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "vitalis.toml", env = "VITALIS_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "VITALIS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Show record count and verdict breakdown for the data file
    Status(commands::status::StatusArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_serve() {
        let cli = Cli::parse_from(["vitalis", "serve"]);
        assert_eq!(cli.config, "vitalis.toml");
        assert!(matches!(cli.command, Commands::Serve(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["vitalis", "--config", "custom.toml", "serve"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["vitalis", "--log-level", "debug", "serve"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_serve_with_port() {
        let cli = Cli::parse_from(["vitalis", "serve", "--port", "9000"]);
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve command");
        };
        assert_eq!(args.port, Some(9000));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["vitalis", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_status() {
        let cli = Cli::parse_from(["vitalis", "status"]);
        assert!(matches!(cli.command, Commands::Status(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["vitalis", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
