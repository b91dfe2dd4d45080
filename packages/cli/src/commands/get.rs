use anyhow::{anyhow, Context, Result};
use clap::Args;
use landing_document::{FieldPath, Node};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GetArgs {
    /// Project file to read
    pub file: PathBuf,

    /// Dotted path, e.g. `hero.headingTypography.fontSize`
    pub path: String,
}

/// Value at `path`, as pretty JSON
pub fn lookup(document: &Node, path: &str) -> Result<String> {
    let path = FieldPath::parse(path)?;
    let value = path
        .get(document)
        .ok_or_else(|| anyhow!("No value at `{}`", path))?;
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn get(args: GetArgs) -> Result<()> {
    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("Cannot read {}", args.file.display()))?;
    let document: Node = serde_json::from_str(&text)?;

    println!("{}", lookup(&document, &args.path)?);
    Ok(())
}
