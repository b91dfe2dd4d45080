use super::read_project;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use landing_document::{Node, CONTENT_BLOCKS_KEY, SECTION_ORDER_KEY};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Project file to check
    pub file: PathBuf,
}

pub fn validate(args: ValidateArgs) -> Result<()> {
    let project = read_project(&args.file)?;

    let count = |key: &str| project.get(key).and_then(Node::as_list).map_or(0, |l| l.len());

    println!("{} {} is a valid project", "✓".green(), args.file.display());
    println!("   Sections in order: {}", count(SECTION_ORDER_KEY));
    println!("   Content blocks:    {}", count(CONTENT_BLOCKS_KEY));

    Ok(())
}
