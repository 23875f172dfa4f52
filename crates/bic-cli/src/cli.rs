use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bic",
    about = "BIC Registry — SWIFT code registry and lookup service",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the registry HTTP server
    Serve(ServeArgs),
    /// Validate a CSV export of SWIFT codes
    Import(ImportArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind, e.g. 0.0.0.0:8080 (overrides the config file)
    #[arg(long)]
    pub bind: Option<SocketAddr>,

    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// CSV export to load into the registry at startup
    #[arg(long)]
    pub seed: Option<PathBuf>,
}

#[derive(Args)]
pub struct ImportArgs {
    /// CSV export to validate
    pub input: PathBuf,
}
