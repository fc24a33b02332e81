//! CLI surface for the user service

pub mod serve;

use clap::{Parser, Subcommand};

/// User management REST API
#[derive(Parser)]
#[command(name = "user-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,
}
