mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    apply, get, init, projects, validate, ApplyArgs, GetArgs, InitArgs, ProjectsCommand,
    ValidateArgs,
};
use config::Config;
use tracing_subscriber::EnvFilter;

/// LandingGen CLI - edit landing page projects from the terminal
#[derive(Parser, Debug)]
#[command(name = "landing")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a new project with the default page
    Init(InitArgs),

    /// Check that a project file can be imported
    Validate(ValidateArgs),

    /// Run an edit script against a project
    Apply(ApplyArgs),

    /// Print the value at a dotted path
    Get(GetArgs),

    /// Manage the saved project library
    Projects {
        #[command(subcommand)]
        command: ProjectsCommand,
    },
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?.display().to_string();
    let config = Config::load(&cwd)?;
    init_logging(&config);
    tracing::debug!("Using config {:?}", config);

    match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Validate(args) => validate(args),
        Command::Apply(args) => apply(args, &config),
        Command::Get(args) => get(args),
        Command::Projects { command } => projects(command, &config, &cwd),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
