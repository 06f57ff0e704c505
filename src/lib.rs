//! Multi-provider agent compiler.
//!
//! Compiles vendor-neutral JSON definitions of agents, skills, and commands
//! into the markdown formats expected by individual AI tool providers
//! (Claude Code, OpenCode, GitHub Copilot, Gemini CLI).
//!
//! Each definition is loaded, rendered, and written independently; the only
//! state shared across entities is the per-category `manifest.txt` kept by
//! the output writer.

pub mod assets;
pub mod cli;
pub mod compiler;
pub mod config;
pub mod descriptor;
pub mod driver;
pub mod format;
pub mod logging;
pub mod output;
pub mod provider;
pub mod template;

pub use config::Layout;
pub use descriptor::{Descriptor, EntityKind};
pub use provider::Provider;
