use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "hiscore",
    about = "hiscore: a minimal high-score leaderboard service",
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
    /// Start the leaderboard HTTP server
    Serve(ServeArgs),
    /// Print the ranked leaderboard from a scores file
    Top(TopArgs),
    /// Validate and append a score to a scores file
    Submit(SubmitArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// TOML config file; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub bind: Option<String>,
    #[arg(long)]
    pub scores: Option<PathBuf>,
    #[arg(long)]
    pub prefix: Option<String>,
    #[arg(long)]
    pub top: Option<usize>,
}

#[derive(Args)]
pub struct TopArgs {
    #[arg(short = 'n', long, default_value = "5")]
    pub limit: usize,
    #[arg(long, default_value = "scores.json")]
    pub scores: PathBuf,
}

#[derive(Args)]
pub struct SubmitArgs {
    pub name: String,
    #[arg(allow_negative_numbers = true)]
    pub score: i64,
    #[arg(long, default_value = "scores.json")]
    pub scores: PathBuf,
}
