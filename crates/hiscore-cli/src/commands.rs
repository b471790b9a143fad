use std::net::SocketAddr;

use anyhow::Context;
use colored::Colorize;
use hiscore_server::{HiscoreServer, ScoreSubmission, ServerConfig};
use hiscore_store::{JsonFileScoreStore, ScoreRecord, ScoreStore};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Top(args) => cmd_top(args),
        Command::Submit(args) => cmd_submit(args),
    }
}

fn serve_config(args: ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid bind address {bind:?}"))?;
    }
    if let Some(scores) = args.scores {
        config.scores_path = scores;
    }
    if let Some(prefix) = args.prefix {
        config.api_prefix = prefix;
    }
    if let Some(top) = args.top {
        config.top_n = top;
    }
    Ok(config)
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = serve_config(args)?;
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime.block_on(HiscoreServer::new(config).serve())?;
    Ok(())
}

fn print_table(records: &[ScoreRecord]) {
    if records.is_empty() {
        println!("No scores yet.");
        return;
    }
    for (rank, record) in records.iter().enumerate() {
        println!("{:>3}. {:<24} {}", rank + 1, record.name.bold(), record.score.to_string().yellow());
    }
}

fn cmd_top(args: TopArgs) -> anyhow::Result<()> {
    let store = JsonFileScoreStore::new(args.scores);
    let top = store
        .top_n(args.limit)
        .with_context(|| format!("failed to read {}", store.path().display()))?;
    print_table(&top);
    Ok(())
}

fn submit(store: &dyn ScoreStore, submission: ScoreSubmission) -> anyhow::Result<ScoreRecord> {
    let record = submission.validate()?;
    store.append(record.clone())?;
    Ok(record)
}

fn cmd_submit(args: SubmitArgs) -> anyhow::Result<()> {
    let store = JsonFileScoreStore::new(args.scores);
    let record = submit(&store, ScoreSubmission::new(args.name, args.score))
        .with_context(|| format!("score not saved to {}", store.path().display()))?;
    println!("{} Saved {} with {}", "✓".green().bold(), record.name.bold(), record.score.to_string().yellow());
    Ok(())
}
