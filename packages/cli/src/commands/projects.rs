use super::{read_project, write_project};
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Subcommand;
use colored::Colorize;
use landing_editor::{export_file_name, ProjectLibrary};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
pub enum ProjectsCommand {
    /// List saved projects, newest first
    List,

    /// Save a project file into the library
    Save {
        /// Project file to save
        file: PathBuf,

        /// Name (defaults to the navbar logo text)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Delete a saved project
    Delete {
        /// Project id
        id: String,
    },

    /// Write a saved project back out as a project file
    Export {
        /// Project id
        id: String,

        /// Output file (defaults to `project-<logo-text>.json`)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

pub fn projects(command: ProjectsCommand, config: &Config, cwd: &str) -> Result<()> {
    let mut library = ProjectLibrary::open(config.get_projects_file(cwd))?;

    match command {
        ProjectsCommand::List => {
            if library.is_empty() {
                println!("{}", "No saved projects yet.".dimmed());
            }
            for project in library.list() {
                println!("{}  {}  {}", project.id.bright_white(), project.date.dimmed(), project.name);
            }
        }

        ProjectsCommand::Save { file, name } => {
            let document = read_project(&file)?;
            let project = library.save_project(name.as_deref(), &document)?;
            println!("{} Saved {} as {}", "✓".green(), project.name.bright_white(), project.id);
        }

        ProjectsCommand::Delete { id } => {
            let removed = library.delete(&id)?;
            println!("{} Deleted {}", "✓".green(), removed.name);
        }

        ProjectsCommand::Export { id, out } => {
            let project = library
                .get(&id)
                .ok_or_else(|| anyhow!("Project not found: {}", id))?;
            let out = out.unwrap_or_else(|| PathBuf::from(cwd).join(export_file_name(&project.config)));

            write_project(&out, &project.config)?;
            println!("{} Exported {} to {}", "✓".green(), project.name, out.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use landing_document::default_document;

    #[test]
    fn test_save_then_export() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        let config = Config::default();

        let file = dir.path().join("site.json");
        write_project(&file, &default_document()).unwrap();

        projects(ProjectsCommand::Save { file, name: None }, &config, &cwd).unwrap();

        let library = ProjectLibrary::open(config.get_projects_file(&cwd)).unwrap();
        assert_eq!(library.len(), 1);
        let id = library.list()[0].id.clone();
        assert_eq!(library.list()[0].name, "LandingGen");

        projects(ProjectsCommand::Export { id: id.clone(), out: None }, &config, &cwd).unwrap();
        let exported = read_project(&dir.path().join("project-landinggen.json")).unwrap();
        assert_eq!(exported.to_json(), default_document().to_json());

        projects(ProjectsCommand::Delete { id: id.clone() }, &config, &cwd).unwrap();
        assert!(projects(ProjectsCommand::Export { id, out: None }, &config, &cwd).is_err());
    }
}
