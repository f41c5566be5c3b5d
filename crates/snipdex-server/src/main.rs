//! snipdex server binary
//!
//! Loads configuration, wires the providers and serves the HTTP API until
//! interrupted.

use clap::Parser;
use snipdex_server::run;

/// Command line interface for the snipdex server
#[derive(Parser, Debug)]
#[command(name = "snipdex-server")]
#[command(about = "Code snippet indexing and similarity search server")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, env = "SNIPDEX_CONFIG")]
    pub config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli.config.as_deref()).await
}
