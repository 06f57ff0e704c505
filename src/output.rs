//! Output writing and manifest maintenance.
//!
//! Rendered documents land under `<output>/<provider-root>/<category>/`.
//! Each category keeps a `manifest.txt` of entity names, one per line, in
//! first-appearance order with per-line dedup.

use anyhow::{Context as _, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Layout;
use crate::descriptor::EntityKind;
use crate::provider::Provider;

pub const MANIFEST_FILE: &str = "manifest.txt";

/// Write a rendered entity and record it in the category manifest.
/// Returns the path of the written document.
pub fn write_entity(
    layout: &Layout,
    provider: Provider,
    kind: EntityKind,
    name: &str,
    content: &str,
) -> Result<PathBuf> {
    let root = layout.provider_root(provider);
    let (path, manifest_dir) = match kind {
        EntityKind::Agent | EntityKind::Command => {
            let dir = root.join(kind.category());
            fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
            let file_name = match (kind, provider) {
                // Copilot expects the .agent.md suffix for agent files
                (EntityKind::Agent, Provider::Copilot) => format!("{name}.agent.md"),
                _ => format!("{name}.md"),
            };
            (dir.join(file_name), dir)
        }
        EntityKind::Skill => {
            let skills_dir = root.join("skills");
            let dir = skills_dir.join(name);
            fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
            (dir.join("SKILL.md"), skills_dir)
        }
    };

    fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))?;
    append_manifest(&manifest_dir.join(MANIFEST_FILE), name)?;
    Ok(path)
}

/// Append a name to a manifest unless an existing line already equals it.
/// The check is per line, so names that are substrings of other names do
/// not suppress each other.
fn append_manifest(path: &Path, name: &str) -> Result<()> {
    let existing = if path.exists() {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
    } else {
        String::new()
    };

    let seen: HashSet<&str> = existing.lines().collect();
    if seen.contains(name) {
        return Ok(());
    }

    let mut updated = existing;
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    updated.push_str(name);
    updated.push('\n');
    fs::write(path, updated).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn layout(dir: &TempDir) -> Layout {
        Layout::from_base(dir.path())
    }

    #[test]
    fn test_write_agent_paths() {
        let dir = TempDir::new().unwrap();
        let layout = layout(&dir);

        let path =
            write_entity(&layout, Provider::Claude, EntityKind::Agent, "reviewer", "body").unwrap();
        assert!(path.ends_with(".claude/agents/reviewer.md"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "body");

        let path =
            write_entity(&layout, Provider::Copilot, EntityKind::Agent, "reviewer", "body")
                .unwrap();
        assert!(path.ends_with(".github/agents/reviewer.agent.md"));
    }

    #[test]
    fn test_write_skill_layout() {
        let dir = TempDir::new().unwrap();
        let layout = layout(&dir);

        let path = write_entity(&layout, Provider::Gemini, EntityKind::Skill, "docx", "body")
            .unwrap();
        assert!(path.ends_with(".gemini/skills/docx/SKILL.md"));

        let manifest = layout
            .provider_root(Provider::Gemini)
            .join("skills")
            .join(MANIFEST_FILE);
        assert_eq!(fs::read_to_string(manifest).unwrap(), "docx\n");
    }

    #[test]
    fn test_manifest_dedup_preserves_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(MANIFEST_FILE);

        append_manifest(&path, "alpha").unwrap();
        append_manifest(&path, "beta").unwrap();
        append_manifest(&path, "alpha").unwrap();
        append_manifest(&path, "gamma").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "alpha\nbeta\ngamma\n");
    }

    #[test]
    fn test_manifest_substring_names_not_confused() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(MANIFEST_FILE);

        append_manifest(&path, "code-reviewer").unwrap();
        append_manifest(&path, "reviewer").unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "code-reviewer\nreviewer\n"
        );
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let layout = layout(&dir);

        let first =
            write_entity(&layout, Provider::Claude, EntityKind::Agent, "reviewer", "body").unwrap();
        write_entity(&layout, Provider::Claude, EntityKind::Agent, "reviewer", "body").unwrap();

        assert_eq!(fs::read_to_string(&first).unwrap(), "body");
        let manifest = layout
            .provider_root(Provider::Claude)
            .join("agents")
            .join(MANIFEST_FILE);
        assert_eq!(fs::read_to_string(manifest).unwrap(), "reviewer\n");
    }
}
