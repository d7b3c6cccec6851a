//! Serve command implementation
//!
//! This module implements the `serve` command, the main operation of
//! Vitalis: run the HTTP server over the configured data file.

use crate::config::load_config;
use crate::http;
use clap::Args;
use tokio::sync::watch;

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Override the configured listen port
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl ServeArgs {
    /// Execute the serve command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Starting Vitalis server");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        if let Some(port) = self.port {
            config.server.port = port;
        }

        println!(
            "🩺 Vitalis listening on http://{}:{}",
            config.server.host, config.server.port
        );
        println!("   Data file: {}", config.storage.data_path);

        http::run(&config, shutdown).await?;

        println!("👋 Server stopped");
        Ok(0)
    }
}
