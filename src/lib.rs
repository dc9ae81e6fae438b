pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod output;
pub mod rate_limiter;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::services::FetchService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command.unwrap_or(Command::Fetch)
}

pub fn handle_fetch() -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let mut service = FetchService::new(config)?;
        service.run().await
    })
}
