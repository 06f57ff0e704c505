//! Discovery, validation, and compile orchestration.
//!
//! Each entity file is processed independently: load, required-field check,
//! then one compile + write per requested provider. Per-entity failures are
//! reported and the run continues; a missing template or an explicitly
//! named entity that does not exist aborts the run.

use anyhow::{anyhow, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::assets;
use crate::compiler;
use crate::config::Layout;
use crate::descriptor::{self, Descriptor, EntityKind, Schema};
use crate::output;
use crate::provider::Provider;

pub struct Driver {
    layout: Layout,
    providers: Option<Vec<Provider>>,
}

/// Per-kind compile tally
#[derive(Debug, Default, Clone, Copy)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl RunSummary {
    fn absorb(&mut self, other: RunSummary) {
        self.succeeded += other.succeeded;
        self.failed += other.failed;
    }
}

impl Driver {
    pub fn new(layout: Layout, providers: Option<Vec<Provider>>) -> Self {
        Driver { layout, providers }
    }

    /// Providers to compile for a kind: the requested set filtered to what
    /// the kind supports, or the kind's default set.
    fn providers_for(&self, kind: EntityKind) -> Vec<Provider> {
        match &self.providers {
            Some(requested) => requested
                .iter()
                .copied()
                .filter(|p| p.supports(kind))
                .collect(),
            None => Provider::defaults_for(kind).to_vec(),
        }
    }

    /// Compile one explicitly named entity. A name that resolves to no
    /// descriptor file is a fatal error.
    pub fn compile_named(&self, kind: EntityKind, name: &str) -> Result<bool> {
        let path = self
            .named_path(kind, name)
            .ok_or_else(|| anyhow!("{kind} not found: {name}"))?;
        self.compile_file(kind, &path)
    }

    fn named_path(&self, kind: EntityKind, name: &str) -> Option<PathBuf> {
        match kind {
            EntityKind::Agent | EntityKind::Command => {
                let path = self.layout.input_dir(kind).join(format!("{name}.json"));
                path.exists().then_some(path)
            }
            EntityKind::Skill => skill_descriptor(&self.layout.skills_dir.join(name)),
        }
    }

    /// Compile every discovered entity of one kind
    pub fn compile_kind(&self, kind: EntityKind) -> Result<RunSummary> {
        println!("\n=== Compiling {} ===", kind.category());

        let files = self.discover(kind)?;
        if files.is_empty() {
            println!("No {kind} definitions found.");
            return Ok(RunSummary::default());
        }

        let mut summary = RunSummary::default();
        for file in &files {
            if self.compile_file(kind, file)? {
                summary.succeeded += 1;
            } else {
                summary.failed += 1;
            }
        }

        println!(
            "\n✓ Compiled {}/{} {}",
            summary.succeeded,
            files.len(),
            kind.category()
        );
        Ok(summary)
    }

    /// Compile agents, skills, and commands
    pub fn compile_all(&self) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        for kind in [EntityKind::Agent, EntityKind::Skill, EntityKind::Command] {
            summary.absorb(self.compile_kind(kind)?);
        }
        Ok(summary)
    }

    /// Locate descriptor files for a kind. A missing input directory is
    /// reported and yields an empty list, not an error.
    fn discover(&self, kind: EntityKind) -> Result<Vec<PathBuf>> {
        let dir = self.layout.input_dir(kind);
        if !dir.exists() {
            println!("{} directory not found: {}", kind.category(), dir.display());
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            match kind {
                EntityKind::Agent | EntityKind::Command => {
                    if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                        files.push(path);
                    }
                }
                EntityKind::Skill => {
                    if let Some(descriptor) = skill_descriptor(&path) {
                        files.push(descriptor);
                    }
                }
            }
        }
        files.sort();
        Ok(files)
    }

    /// Compile a single descriptor file for every requested provider.
    ///
    /// Returns `Ok(false)` when the entity was reported as failed (bad
    /// JSON, failed validation, write error); `Err` only for fatal
    /// configuration problems such as a missing template.
    pub fn compile_file(&self, kind: EntityKind, path: &Path) -> Result<bool> {
        println!("\nCompiling {kind}: {}", file_label(path));

        let descriptor = match self.load_checked(kind, path) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                println!("  ✗ {e:#}");
                return Ok(false);
            }
        };
        let name = descriptor
            .name()
            .ok_or_else(|| anyhow!("validated descriptor lost its name"))?
            .to_string();

        let mut compiled = 0;
        let mut clean = true;
        for provider in self.providers_for(kind) {
            let Some(content) = compiler::compile(&descriptor, provider, &self.layout.templates_dir)?
            else {
                continue;
            };

            match output::write_entity(&self.layout, provider, kind, &name, &content) {
                Ok(written) => {
                    println!("  Written: {}", written.display());
                    compiled += 1;
                }
                Err(e) => {
                    println!("  ✗ {e:#}");
                    clean = false;
                    continue;
                }
            }

            if kind == EntityKind::Skill {
                let source = descriptor
                    .path()
                    .parent()
                    .ok_or_else(|| anyhow!("skill descriptor has no parent directory"))?;
                let dest = self.layout.provider_root(provider).join("skills").join(&name);
                if let Err(e) = assets::copy_skill_assets(source, &dest) {
                    println!("  ✗ asset copy for {provider}: {e:#}");
                    clean = false;
                }
            }
        }

        println!("  Compiled to {compiled} provider(s)");
        Ok(clean)
    }

    fn load_checked(&self, kind: EntityKind, path: &Path) -> Result<Descriptor> {
        let descriptor = Descriptor::load(path, kind)?;
        let schema = Schema::load(&self.layout.schema_dir, kind)?;
        descriptor::validate(&descriptor, schema.as_ref())?;
        Ok(descriptor)
    }

    /// Load-and-check every definition without producing output.
    /// Returns whether all files passed.
    pub fn validate_all(&self) -> Result<bool> {
        println!("\n=== Validating All Definitions ===");

        let mut all_valid = true;
        for kind in [EntityKind::Agent, EntityKind::Skill, EntityKind::Command] {
            for file in self.discover(kind)? {
                match self.load_checked(kind, &file) {
                    Ok(_) => println!("✓ {}", file_label(&file)),
                    Err(e) => {
                        println!("✗ {} - {e:#}", file_label(&file));
                        all_valid = false;
                    }
                }
            }
        }

        if all_valid {
            println!("\n✓ All definitions are valid");
        } else {
            println!("\n✗ Some definitions have errors");
        }
        Ok(all_valid)
    }
}

/// Descriptor file inside a skill folder: `skill.json`, or `<dirname>.json`
fn skill_descriptor(dir: &Path) -> Option<PathBuf> {
    if !dir.is_dir() {
        return None;
    }
    let primary = dir.join("skill.json");
    if primary.exists() {
        return Some(primary);
    }
    let name = dir.file_name()?.to_str()?;
    let fallback = dir.join(format!("{name}.json"));
    fallback.exists().then_some(fallback)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
