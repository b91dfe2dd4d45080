//! Saved project library.
//!
//! A flat list of named document snapshots, newest first, persisted as one
//! JSON file. Only the document itself is stored; undo history never is.

use crate::errors::{EditorError, EditorResult};
use landing_document::Node;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name used when the document has no logo text to borrow
pub const DEFAULT_PROJECT_NAME: &str = "My Landing Page";

/// One saved snapshot of a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedProject {
    /// Creation time in milliseconds since the epoch
    pub id: String,

    pub name: String,

    /// Human-readable save time
    pub date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    pub config: Node,
}

#[derive(Debug)]
pub struct ProjectLibrary {
    /// Backing file; `None` for an in-memory library
    path: Option<PathBuf>,

    projects: Vec<SavedProject>,
}

impl ProjectLibrary {
    /// Library that is never written to disk
    pub fn in_memory() -> Self {
        Self {
            path: None,
            projects: Vec::new(),
        }
    }

    /// Open the library stored at `path`. A missing file is an empty library.
    pub fn open(path: impl Into<PathBuf>) -> EditorResult<Self> {
        let path = path.into();

        let projects = if path.exists() {
            let text = std::fs::read_to_string(&path)?;
            serde_json::from_str(&text)?
        } else {
            Vec::new()
        };

        tracing::debug!("Opened project library {} ({} projects)", path.display(), projects.len());

        Ok(Self {
            path: Some(path),
            projects,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Saved projects, newest first
    pub fn list(&self) -> &[SavedProject] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&SavedProject> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Save a snapshot of `config` at the front of the library and persist.
    ///
    /// Without a name, the navbar logo text is used.
    pub fn save_project(&mut self, name: Option<&str>, config: &Node) -> EditorResult<&SavedProject> {
        let now = chrono::Local::now();

        let mut millis = now.timestamp_millis();
        while self.get(&millis.to_string()).is_some() {
            millis += 1;
        }

        let name = name
            .map(str::to_string)
            .unwrap_or_else(|| default_project_name(config));

        let project = SavedProject {
            id: millis.to_string(),
            name,
            date: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            thumbnail: None,
            config: config.clone(),
        };

        tracing::info!("Saving project {:?} as {}", project.name, project.id);
        self.projects.insert(0, project);
        self.persist()?;

        Ok(&self.projects[0])
    }

    /// Remove a project and persist
    pub fn delete(&mut self, id: &str) -> EditorResult<SavedProject> {
        let index = self
            .projects
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| EditorError::ProjectNotFound(id.to_string()))?;

        let removed = self.projects.remove(index);
        tracing::info!("Deleted project {:?}", removed.name);
        self.persist()?;

        Ok(removed)
    }

    /// Write the library to its backing file
    pub fn persist(&self) -> EditorResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let text = serde_json::to_string_pretty(&self.projects)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}

/// Navbar logo text, or [`DEFAULT_PROJECT_NAME`]
pub fn default_project_name(config: &Node) -> String {
    config
        .get("navbar")
        .and_then(|navbar| navbar.get("logoText"))
        .and_then(Node::as_str)
        .filter(|text| !text.trim().is_empty())
        .unwrap_or(DEFAULT_PROJECT_NAME)
        .to_string()
}

/// File name for a JSON export: `project-<logo-text-slug>.json`
pub fn export_file_name(config: &Node) -> String {
    let logo = config
        .get("navbar")
        .and_then(|navbar| navbar.get("logoText"))
        .and_then(Node::as_str)
        .unwrap_or_default();

    let slug = logo.split_whitespace().collect::<Vec<_>>().join("-").to_lowercase();
    if slug.is_empty() {
        "project-site.json".to_string()
    } else {
        format!("project-{}.json", slug)
    }
}
