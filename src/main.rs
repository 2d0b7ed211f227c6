//! Todo MCP Server - Main Entry Point
//!
//! This is the main entry point for the todo MCP server application.
//! The actual implementation is in the `todo_mcp` library.

use anyhow::Result;
use clap::Parser;
use mcp_attr::server::serve_stdio;
use std::path::PathBuf;
use todo_mcp::{TodoConfig, TodoServerHandler, logging};

/// Todo MCP Server - a single-session todo list via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// TOML file with the initial todos (defaults to built-in samples)
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Delay between a valid submit and the commit, in milliseconds
    #[arg(long)]
    submit_delay_ms: Option<u64>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = TodoConfig::load_or_default(args.config.as_deref())?;
    config.apply_overrides(args.seed, args.submit_delay_ms, args.log_level);

    let _logger = logging::init_logging(&config.log_level)?;
    let handler = TodoServerHandler::from_config(&config)?;
    serve_stdio(handler).await?;
    Ok(())
}
