//! Entity descriptors: loading, field access, and required-field checks.
//!
//! Descriptors keep their raw JSON shape instead of deserializing into a
//! rigid struct. Field-shape problems (a string where a list was expected,
//! say) must degrade to empty output in the formatters, not fail the whole
//! entity, so typed access happens at the point of use.

use anyhow::{anyhow, Context as _, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use crate::provider::Provider;

/// The three kinds of entity the compiler understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Agent,
    Skill,
    Command,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Agent => "agent",
            EntityKind::Skill => "skill",
            EntityKind::Command => "command",
        }
    }

    /// Output category directory name (also the input directory name)
    pub fn category(&self) -> &'static str {
        match self {
            EntityKind::Agent => "agents",
            EntityKind::Skill => "skills",
            EntityKind::Command => "commands",
        }
    }

    /// Template set directory. Commands reuse the agent templates.
    pub fn template_set(&self) -> &'static str {
        match self {
            EntityKind::Agent | EntityKind::Command => "agents",
            EntityKind::Skill => "skills",
        }
    }

    pub fn schema_file(&self) -> &'static str {
        match self {
            EntityKind::Agent => "agent.schema.json",
            EntityKind::Skill => "skill.schema.json",
            EntityKind::Command => "command.schema.json",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A loaded entity definition
#[derive(Debug, Clone)]
pub struct Descriptor {
    kind: EntityKind,
    path: PathBuf,
    fields: Map<String, Value>,
}

impl Descriptor {
    /// Load a descriptor from a JSON file
    pub fn load(path: &Path, kind: EntityKind) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let value: Value = serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON in {}", path.display()))?;
        let fields = match value {
            Value::Object(map) => map,
            _ => return Err(anyhow!("{}: expected a JSON object", path.display())),
        };
        Ok(Descriptor {
            kind,
            path: path.to_path_buf(),
            fields,
        })
    }

    /// Build a descriptor from an in-memory value (used by tests)
    pub fn from_value(value: Value, kind: EntityKind) -> Result<Self> {
        let fields = match value {
            Value::Object(map) => map,
            _ => return Err(anyhow!("expected a JSON object")),
        };
        Ok(Descriptor {
            kind,
            path: PathBuf::new(),
            fields,
        })
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw field access
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The entity name, if present and non-empty
    pub fn name(&self) -> Option<&str> {
        self.fields
            .get("name")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// String field, empty if absent or not a string
    pub fn str_field(&self, key: &str) -> &str {
        self.fields.get(key).and_then(Value::as_str).unwrap_or("")
    }

    /// Whether this entity is enabled for the given provider.
    ///
    /// Only an explicit `false` in the `providers` map disables; an absent
    /// map, absent key, or non-boolean value all mean enabled.
    pub fn provider_enabled(&self, provider: Provider) -> bool {
        self.fields
            .get("providers")
            .and_then(Value::as_object)
            .and_then(|map| map.get(provider.id()))
            .and_then(Value::as_bool)
            .unwrap_or(true)
    }
}

/// Required-field declarations loaded from a `<kind>.schema.json` file.
///
/// Only the `required` array is honored; type and shape constraints in the
/// schema are deliberately ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub required: Vec<String>,
}

impl Schema {
    /// Load the schema for a kind. A missing schema file is not an error;
    /// validation then only checks the name.
    pub fn load(schema_dir: &Path, kind: EntityKind) -> Result<Option<Self>> {
        let path = schema_dir.join(kind.schema_file());
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no schema file, skipping required-field check");
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read schema {}", path.display()))?;
        let schema: Schema = serde_json::from_str(&content)
            .with_context(|| format!("invalid schema {}", path.display()))?;
        Ok(Some(schema))
    }

    /// Check that every required field is present (presence only, no shapes)
    pub fn check(&self, descriptor: &Descriptor) -> Result<()> {
        let missing: Vec<&str> = self
            .required
            .iter()
            .map(String::as_str)
            .filter(|field| descriptor.get(field).is_none())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(anyhow!("missing required field(s): {}", missing.join(", ")))
        }
    }
}

/// Full driver-level validation: schema required fields plus a usable name
pub fn validate(descriptor: &Descriptor, schema: Option<&Schema>) -> Result<()> {
    if let Some(schema) = schema {
        schema.check(descriptor)?;
    }
    if descriptor.name().is_none() {
        return Err(anyhow!("missing or empty 'name'"));
    }
    Ok(())
}
