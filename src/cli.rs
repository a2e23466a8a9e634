use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use crate::config::AppConfig;
use commands::serve;

#[derive(Parser)]
#[command(name = "watchtower")]
#[command(about = "Watchtower dashboard API server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    ///
    /// Serves the prediction explanation endpoint, the CSV upload endpoint
    /// and, when a static directory is given, the built dashboard itself.
    Serve(AppConfig),
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve(config) => {
                serve(config).await?;
            }
        }
        Ok(())
    }
}
