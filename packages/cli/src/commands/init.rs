use super::write_project;
use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use landing_document::default_document;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project file to create
    #[arg(default_value = "landing-page.json")]
    pub path: PathBuf,

    /// Force overwrite existing files
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let project_path = PathBuf::from(cwd).join(&args.path);

    // Check if project already exists
    if project_path.exists() && !args.force {
        println!("{} {} already exists", "⚠️".yellow(), args.path.display().to_string().bright_white());
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing landing page project...".bright_blue().bold());

    if let Some(parent) = project_path.parent() {
        fs::create_dir_all(parent)?;
    }
    write_project(&project_path, &default_document())?;
    println!("  {} Created {}", "✓".green(), args.path.display());

    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);
    if !config_path.exists() || args.force {
        let config_json = serde_json::to_string_pretty(&Config::default())?;
        fs::write(&config_path, config_json)?;
        println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    }

    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Write an edit script (a JSON list of operations)");
    println!("  2. Run: landing apply {} script.json", args.path.display());
    println!("  3. Run: landing projects save {}", args.path.display());

    Ok(())
}
