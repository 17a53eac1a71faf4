//! aicommit - CLI entry point.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use aicommit::git::{check_git_installed, discover_workdir};
use aicommit::{
    CategoryTable, Config, OllamaClient, Outcome, Pipeline, RepositoryInspector, RunOptions,
    SystemGit, Verbosity, logging,
};

/// AI assistant for git commit.
#[derive(Parser, Debug)]
#[command(name = "aicommit")]
#[command(about = "Generate a commit message for pending changes with a local LLM and commit")]
#[command(version)]
struct Cli {
    /// Message placed above the generated one
    #[arg(short = 'm', long)]
    message: Option<String>,

    /// Stage all working-tree changes before committing
    #[arg(short = 'a', long)]
    add: bool,

    /// Amend the previous commit instead of creating a new one
    #[arg(long)]
    amend: bool,

    /// Show detailed progress, including diffs and model reasoning
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(Verbosity::from_flag(cli.verbose));

    match run(cli).await {
        Ok(Outcome::NothingToCommit) => ExitCode::SUCCESS,
        Ok(Outcome::Committed { message }) => {
            println!("{message}");
            info!("Done!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<Outcome> {
    // Step 1: Check prerequisites
    check_git_installed().context("git is required")?;

    let workdir = discover_workdir(".")?;

    // Step 2: Wire collaborators
    let config = Config::from_env();
    info!("Using model {} at {}", config.model, config.ollama_url);

    let inspector = RepositoryInspector::new(SystemGit::new(workdir));
    let model = OllamaClient::new(&config);
    let pipeline = Pipeline::new(inspector, model, CategoryTable::default());

    // Step 3: Generate and commit
    let options = RunOptions {
        message: cli.message,
        stage_all: cli.add,
        amend: cli.amend,
    };

    pipeline
        .run(&options)
        .await
        .context("Failed to generate commit")
}
