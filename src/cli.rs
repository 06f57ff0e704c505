//! Command-line interface.

use anyhow::{bail, Result};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use crate::config::Layout;
use crate::descriptor::EntityKind;
use crate::driver::Driver;
use crate::provider::Provider;

/// Compile agent, skill, and command definitions to provider-specific formats
#[derive(Parser, Debug)]
#[command(name = "agentc")]
#[command(about = "Compile agent, skill, and command definitions to provider-specific formats")]
pub struct Cli {
    /// Compile all agents, skills, and commands
    #[arg(long)]
    pub all: bool,

    /// Compile a single agent by name
    #[arg(long, value_name = "NAME")]
    pub agent: Option<String>,

    /// Compile a single skill by name
    #[arg(long, value_name = "NAME")]
    pub skill: Option<String>,

    /// Compile a single command by name
    #[arg(long, value_name = "NAME")]
    pub command: Option<String>,

    /// Compile only agents
    #[arg(long)]
    pub agents_only: bool,

    /// Compile only skills
    #[arg(long)]
    pub skills_only: bool,

    /// Compile only commands
    #[arg(long)]
    pub commands_only: bool,

    /// Restrict output to specific provider(s); may be repeated
    #[arg(long, value_enum, value_name = "PROVIDER")]
    pub provider: Vec<Provider>,

    /// Validate definitions without writing any output
    #[arg(long)]
    pub validate: bool,

    /// Project base directory containing the definition folders
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub base_dir: PathBuf,

    /// Output directory (default: <base-dir>/output)
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, env = "AGENTC_VERBOSE")]
    pub verbose: bool,
}

pub fn run(cli: Cli) -> Result<()> {
    let layout = Layout::load(&cli.base_dir, cli.output_dir.clone())?;
    let providers = (!cli.provider.is_empty()).then(|| cli.provider.clone());
    let driver = Driver::new(layout, providers);

    if cli.validate {
        if !driver.validate_all()? {
            bail!("some definitions failed validation");
        }
        return Ok(());
    }

    // single named entities take precedence over the scope flags
    let named = [
        (EntityKind::Agent, cli.agent.as_deref()),
        (EntityKind::Skill, cli.skill.as_deref()),
        (EntityKind::Command, cli.command.as_deref()),
    ];
    if named.iter().any(|(_, name)| name.is_some()) {
        for (kind, name) in named {
            if let Some(name) = name {
                driver.compile_named(kind, name)?;
            }
        }
        return Ok(());
    }

    if !(cli.all || cli.agents_only || cli.skills_only || cli.commands_only) {
        Cli::command().print_help().ok();
        bail!("nothing to do: pass --all, a named entity, or a *-only flag");
    }

    if cli.all {
        driver.compile_all()?;
    } else {
        if cli.agents_only {
            driver.compile_kind(EntityKind::Agent)?;
        }
        if cli.skills_only {
            driver.compile_kind(EntityKind::Skill)?;
        }
        if cli.commands_only {
            driver.compile_kind(EntityKind::Command)?;
        }
    }

    println!("\n=== Compilation Complete ===");
    Ok(())
}
