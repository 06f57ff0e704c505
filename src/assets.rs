//! Skill asset mirroring.
//!
//! A skill's source folder carries arbitrary support files next to its JSON
//! descriptor. Everything except top-level `*.json` files is mirrored into
//! the provider's skill output folder. Destination entries are replaced
//! wholesale so a reshaped skill leaves no stale files behind.

use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Mirror the non-descriptor contents of `source` into `dest`.
///
/// A failure on one entry is reported and the remaining entries are still
/// copied. Returns the number of top-level entries copied.
pub fn copy_skill_assets(source: &Path, dest: &Path) -> Result<usize> {
    fs::create_dir_all(dest).with_context(|| format!("failed to create {}", dest.display()))?;

    let entries =
        fs::read_dir(source).with_context(|| format!("failed to read {}", source.display()))?;

    let mut copied = 0;
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                eprintln!("  ✗ failed to read entry in {}: {e}", source.display());
                continue;
            }
        };
        let path = entry.path();
        if is_descriptor(&path) {
            continue;
        }
        let Some(file_name) = path.file_name() else {
            continue;
        };
        let target = dest.join(file_name);

        match copy_entry(&path, &target) {
            Ok(()) => copied += 1,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "asset copy failed");
                eprintln!("  ✗ failed to copy {}: {e:#}", path.display());
            }
        }
    }
    Ok(copied)
}

fn is_descriptor(path: &Path) -> bool {
    path.is_file() && path.extension().is_some_and(|ext| ext == "json")
}

fn copy_entry(source: &Path, target: &Path) -> Result<()> {
    // replace whatever is there, whatever its shape
    if target.exists() {
        if target.is_dir() {
            fs::remove_dir_all(target)
                .with_context(|| format!("failed to clear {}", target.display()))?;
        } else {
            fs::remove_file(target)
                .with_context(|| format!("failed to clear {}", target.display()))?;
        }
    }

    if source.is_dir() {
        copy_dir(source, target)
    } else {
        fs::copy(source, target)
            .map(|_| ())
            .with_context(|| format!("failed to copy {}", source.display()))
    }
}

fn copy_dir(source: &Path, target: &Path) -> Result<()> {
    for entry in WalkDir::new(source) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .expect("walkdir yields paths under its root");
        let dest = target.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)
                .with_context(|| format!("failed to create {}", dest.display()))?;
        } else {
            fs::copy(entry.path(), &dest)
                .with_context(|| format!("failed to copy {}", entry.path().display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_descriptors_stay_behind() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        write(&source.path().join("skill.json"), "{}");
        write(&source.path().join("notes.md"), "notes");
        write(&source.path().join("scripts/run.sh"), "#!/bin/sh\n");

        let copied = copy_skill_assets(source.path(), dest.path()).unwrap();
        assert_eq!(copied, 2);
        assert!(!dest.path().join("skill.json").exists());
        assert!(dest.path().join("notes.md").exists());
        assert!(dest.path().join("scripts/run.sh").exists());
    }

    #[test]
    fn test_nested_json_is_copied() {
        // only top-level JSON files are descriptors
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        write(&source.path().join("data/config.json"), "{}");

        copy_skill_assets(source.path(), dest.path()).unwrap();
        assert!(dest.path().join("data/config.json").exists());
    }

    #[test]
    fn test_reshaped_skill_leaves_no_stale_files() {
        let old = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        write(&old.path().join("scripts/old.sh"), "old");
        copy_skill_assets(old.path(), dest.path()).unwrap();
        assert!(dest.path().join("scripts/old.sh").exists());

        let new = TempDir::new().unwrap();
        write(&new.path().join("scripts/new.sh"), "new");
        copy_skill_assets(new.path(), dest.path()).unwrap();

        assert!(dest.path().join("scripts/new.sh").exists());
        assert!(!dest.path().join("scripts/old.sh").exists());
    }

    #[test]
    fn test_copy_twice_is_idempotent() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        write(&source.path().join("reference.md"), "ref");

        copy_skill_assets(source.path(), dest.path()).unwrap();
        copy_skill_assets(source.path(), dest.path()).unwrap();

        assert_eq!(
            fs::read_to_string(dest.path().join("reference.md")).unwrap(),
            "ref"
        );
    }

    #[test]
    fn test_file_replaced_by_directory() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        write(&dest.path().join("assets"), "was a file");
        write(&source.path().join("assets/logo.txt"), "logo");

        copy_skill_assets(source.path(), dest.path()).unwrap();
        assert!(dest.path().join("assets/logo.txt").exists());
    }
}
