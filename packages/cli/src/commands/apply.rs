use super::{read_project, write_project};
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use landing_editor::{ConfigurationController, Mutation};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Project file to edit
    pub file: PathBuf,

    /// Edit script: a JSON list of operations, "undo" or "redo"
    pub script: PathBuf,

    /// Write the result here instead of overwriting the project
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryStep {
    Undo,
    Redo,
}

/// One entry of an edit script
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScriptStep {
    History(HistoryStep),
    Edit(Mutation),
}

/// Parse edit script text
pub fn parse_script(text: &str) -> Result<Vec<ScriptStep>> {
    Ok(serde_json::from_str(text)?)
}

/// Run `steps` in order, stopping at the first failing edit
pub fn run_script(controller: &mut ConfigurationController, steps: Vec<ScriptStep>) -> Result<()> {
    for (index, step) in steps.into_iter().enumerate() {
        match step {
            ScriptStep::History(HistoryStep::Undo) => {
                let moved = controller.undo();
                println!("  {} undo{}", "↶".cyan(), if moved { "" } else { " (nothing to undo)" });
            }
            ScriptStep::History(HistoryStep::Redo) => {
                let moved = controller.redo();
                println!("  {} redo{}", "↷".cyan(), if moved { "" } else { " (nothing to redo)" });
            }
            ScriptStep::Edit(mutation) => {
                let name = mutation.name();
                let committed = controller
                    .apply(mutation)
                    .with_context(|| format!("Step {} ({}) failed", index + 1, name))?;

                if committed {
                    println!("  {} {}", "✓".green(), name);
                } else {
                    println!("  {} {} (no change)", "·".dimmed(), name);
                }
            }
        }
    }

    Ok(())
}

pub fn apply(args: ApplyArgs, config: &Config) -> Result<()> {
    let document = read_project(&args.file)?;
    let script = fs::read_to_string(&args.script)
        .with_context(|| format!("Cannot read {}", args.script.display()))?;
    let steps = parse_script(&script)
        .with_context(|| format!("{} is not a valid edit script", args.script.display()))?;

    println!("{}", format!("✏️  Applying {} steps...", steps.len()).bright_blue().bold());

    let mut controller = ConfigurationController::with_history_limit(document, config.history_limit);
    run_script(&mut controller, steps)?;

    let out = args.out.as_ref().unwrap_or(&args.file);
    write_project(out, controller.document())?;

    let history = controller.history();
    println!();
    println!("{} Wrote {}", "✅".green(), out.display());
    println!("   Undo levels: {}", history.undo_levels());
    println!("   Redo levels: {}", history.redo_levels());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use landing_document::{default_document, get_deep_value, Node};

    #[test]
    fn test_parse_script_mixes_edits_and_history() {
        let steps = parse_script(
            r#"[
                {"op": "updateField", "section": "hero", "path": "title", "value": "Hi"},
                "undo",
                "redo"
            ]"#,
        )
        .unwrap();

        assert_eq!(steps.len(), 3);
        assert!(matches!(steps[0], ScriptStep::Edit(Mutation::UpdateField { .. })));
        assert_eq!(steps[1], ScriptStep::History(HistoryStep::Undo));
        assert_eq!(steps[2], ScriptStep::History(HistoryStep::Redo));
    }

    #[test]
    fn test_parse_script_rejects_unknown_step() {
        assert!(parse_script(r#"["rewind"]"#).is_err());
        assert!(parse_script(r#"[{"op": "explode"}]"#).is_err());
    }

    #[test]
    fn test_run_script() {
        let steps = parse_script(
            r#"[
                {"op": "updateField", "section": "hero", "path": "title", "value": "One"},
                {"op": "updateField", "section": "hero", "path": "title", "value": "Two"},
                "undo"
            ]"#,
        )
        .unwrap();

        let mut controller = ConfigurationController::new(default_document());
        run_script(&mut controller, steps).unwrap();

        assert_eq!(get_deep_value(controller.document(), "hero.title"), Some(&Node::from("One")));
        assert!(controller.can_redo());
    }

    #[test]
    fn test_run_script_stops_at_failure() {
        let steps = parse_script(
            r#"[
                {"op": "setRoot", "path": "theme", "value": "dark"},
                {"op": "removeListItem", "collection": "contentBlocks", "index": 4},
                {"op": "setRoot", "path": "theme", "value": "nord"}
            ]"#,
        )
        .unwrap();

        let mut controller = ConfigurationController::new(default_document());
        let err = run_script(&mut controller, steps).unwrap_err();

        assert!(err.to_string().contains("Step 2"));
        assert_eq!(controller.document().get("theme"), Some(&Node::from("dark")));
    }

    #[test]
    fn test_apply_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("site.json");
        let script = dir.path().join("edit.json");
        let out = dir.path().join("out.json");

        write_project(&project, &default_document()).unwrap();
        fs::write(&script, r#"[{"op": "applyThemePreset", "theme": "ocean"}]"#).unwrap();

        apply(
            ApplyArgs { file: project.clone(), script, out: Some(out.clone()) },
            &Config::default(),
        )
        .unwrap();

        assert_eq!(read_project(&out).unwrap().get("theme"), Some(&Node::from("ocean")));
        assert_eq!(read_project(&project).unwrap().get("theme"), Some(&Node::from("light")));
    }
}
