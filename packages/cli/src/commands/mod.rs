pub mod apply;
pub mod get;
pub mod init;
pub mod projects;
pub mod validate;

pub use apply::{apply, ApplyArgs};
pub use get::{get, GetArgs};
pub use init::{init, InitArgs};
pub use projects::{projects, ProjectsCommand};
pub use validate::{validate, ValidateArgs};

use anyhow::{Context, Result};
use landing_document::{parse_project, Node};
use std::fs;
use std::path::Path;

/// Read and validate a project file
pub fn read_project(path: &Path) -> Result<Node> {
    let text = fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;
    parse_project(&text).with_context(|| format!("{} is not a valid project", path.display()))
}

/// Write a document as pretty JSON
pub fn write_project(path: &Path, document: &Node) -> Result<()> {
    let text = serde_json::to_string_pretty(document)?;
    fs::write(path, text).with_context(|| format!("Cannot write {}", path.display()))?;
    Ok(())
}
