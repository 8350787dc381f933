use crate::estimate::EstimateArgs;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about = "LLM Training Time Calculator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the calculator window (Default)
    Gui,

    /// Estimate training time from the command line
    Estimate(EstimateArgs),

    /// List GPU throughput presets
    Presets,
}
