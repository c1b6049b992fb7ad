use std::path::PathBuf;

use clap::Parser;

use crate::models::constants::{DEFAULT_HOSTILES, DEFAULT_STARBASES};

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "trek")]
#[command(about = "Real-time Star Trek tactics in the terminal")]
pub struct Args {
    /// Seed for the random number generator
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of Klingon ships in the galaxy
    #[arg(long, default_value_t = DEFAULT_HOSTILES)]
    pub hostiles: u32,

    /// Number of starbases in the galaxy
    #[arg(long, default_value_t = DEFAULT_STARBASES)]
    pub starbases: u32,

    /// Milliseconds between torpedo steps; a full turn is every second step
    #[arg(long, default_value_t = 500)]
    pub tick_ms: u64,

    /// Write the game log to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub fn parse() -> Args {
    Args::parse()
}
