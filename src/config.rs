//! Compiler path layout.
//!
//! All input and output locations derive from a base directory, with
//! optional per-directory overrides from a `compiler.toml` file at the
//! base. The layout is plain data handed to each component; there is no
//! process-global configuration.

use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::descriptor::EntityKind;
use crate::provider::Provider;

pub const CONFIG_FILE: &str = "compiler.toml";

/// Input/output directory layout
#[derive(Debug, Clone)]
pub struct Layout {
    pub agents_dir: PathBuf,
    pub skills_dir: PathBuf,
    pub commands_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub schema_dir: PathBuf,
    pub output_dir: PathBuf,
}

/// `[paths]` table of `compiler.toml`; every key optional
#[derive(Debug, Default, Deserialize)]
struct PathOverrides {
    agents_dir: Option<PathBuf>,
    skills_dir: Option<PathBuf>,
    commands_dir: Option<PathBuf>,
    templates_dir: Option<PathBuf>,
    schema_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    paths: PathOverrides,
}

impl Layout {
    /// Default layout rooted at `base`
    pub fn from_base(base: &Path) -> Self {
        Layout {
            agents_dir: base.join("agents"),
            skills_dir: base.join("skills"),
            commands_dir: base.join("commands"),
            templates_dir: base.join("templates"),
            schema_dir: base.join("schema"),
            output_dir: base.join("output"),
        }
    }

    /// Build the layout for a base directory, applying `compiler.toml`
    /// overrides when present, then the CLI output override.
    pub fn load(base: &Path, output_override: Option<PathBuf>) -> Result<Self> {
        let mut layout = Self::from_base(base);

        let config_path = base.join(CONFIG_FILE);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("failed to read {}", config_path.display()))?;
            let file: ConfigFile = toml::from_str(&content)
                .with_context(|| format!("invalid config {}", config_path.display()))?;
            layout.merge(base, file.paths);
        }

        if let Some(output) = output_override {
            layout.output_dir = output;
        }
        Ok(layout)
    }

    /// Apply overrides; relative paths resolve against the base directory
    fn merge(&mut self, base: &Path, overrides: PathOverrides) {
        if let Some(p) = overrides.agents_dir {
            self.agents_dir = base.join(p);
        }
        if let Some(p) = overrides.skills_dir {
            self.skills_dir = base.join(p);
        }
        if let Some(p) = overrides.commands_dir {
            self.commands_dir = base.join(p);
        }
        if let Some(p) = overrides.templates_dir {
            self.templates_dir = base.join(p);
        }
        if let Some(p) = overrides.schema_dir {
            self.schema_dir = base.join(p);
        }
        if let Some(p) = overrides.output_dir {
            self.output_dir = base.join(p);
        }
    }

    /// Input directory for an entity kind
    pub fn input_dir(&self, kind: EntityKind) -> &Path {
        match kind {
            EntityKind::Agent => &self.agents_dir,
            EntityKind::Skill => &self.skills_dir,
            EntityKind::Command => &self.commands_dir,
        }
    }

    /// Root of a provider's output tree (`<output>/.claude` etc.)
    pub fn provider_root(&self, provider: Provider) -> PathBuf {
        self.output_dir.join(provider.root_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_layout() {
        let layout = Layout::from_base(Path::new("/project"));
        assert_eq!(layout.agents_dir, Path::new("/project/agents"));
        assert_eq!(layout.output_dir, Path::new("/project/output"));
        assert_eq!(
            layout.provider_root(Provider::Opencode),
            Path::new("/project/output/.opencode")
        );
    }

    #[test]
    fn test_config_file_overrides() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[paths]\nagents_dir = \"definitions/agents\"\noutput_dir = \"dist\"\n",
        )
        .unwrap();

        let layout = Layout::load(dir.path(), None).unwrap();
        assert_eq!(layout.agents_dir, dir.path().join("definitions/agents"));
        assert_eq!(layout.output_dir, dir.path().join("dist"));
        // untouched keys keep their defaults
        assert_eq!(layout.skills_dir, dir.path().join("skills"));
    }

    #[test]
    fn test_cli_output_wins_over_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[paths]\noutput_dir = \"dist\"\n").unwrap();

        let layout = Layout::load(dir.path(), Some(PathBuf::from("/elsewhere"))).unwrap();
        assert_eq!(layout.output_dir, Path::new("/elsewhere"));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "paths = 3").unwrap();
        assert!(Layout::load(dir.path(), None).is_err());
    }
}
