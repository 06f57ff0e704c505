//! Provider identifiers and capabilities.
//!
//! The provider set is closed: adding a provider means adding a variant
//! here, a template, and (if it has custom frontmatter fields) a formatter
//! module under `format/`.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::descriptor::EntityKind;

/// A supported output provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Claude,
    Opencode,
    Copilot,
    Gemini,
}

impl Provider {
    pub const ALL: [Provider; 4] = [
        Provider::Claude,
        Provider::Opencode,
        Provider::Copilot,
        Provider::Gemini,
    ];

    /// Stable lowercase identifier, used in `providers` maps and template names
    pub fn id(&self) -> &'static str {
        match self {
            Provider::Claude => "claude",
            Provider::Opencode => "opencode",
            Provider::Copilot => "copilot",
            Provider::Gemini => "gemini",
        }
    }

    /// Name of the provider's directory under the output root
    pub fn root_dir(&self) -> &'static str {
        match self {
            Provider::Claude => ".claude",
            Provider::Opencode => ".opencode",
            Provider::Copilot => ".github",
            Provider::Gemini => ".gemini",
        }
    }

    /// Whether this provider consumes the given entity kind at all.
    ///
    /// Gemini has no agent/command format; Copilot has no skill format.
    pub fn supports(&self, kind: EntityKind) -> bool {
        match kind {
            EntityKind::Agent | EntityKind::Command => !matches!(self, Provider::Gemini),
            EntityKind::Skill => !matches!(self, Provider::Copilot),
        }
    }

    /// Default provider set when the user does not pass `--provider`
    pub fn defaults_for(kind: EntityKind) -> &'static [Provider] {
        match kind {
            EntityKind::Agent | EntityKind::Command => {
                &[Provider::Claude, Provider::Opencode, Provider::Copilot]
            }
            EntityKind::Skill => &[Provider::Claude, Provider::Opencode, Provider::Gemini],
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_support_matrix() {
        assert!(Provider::Claude.supports(EntityKind::Agent));
        assert!(Provider::Claude.supports(EntityKind::Skill));
        assert!(!Provider::Gemini.supports(EntityKind::Agent));
        assert!(!Provider::Gemini.supports(EntityKind::Command));
        assert!(Provider::Gemini.supports(EntityKind::Skill));
        assert!(!Provider::Copilot.supports(EntityKind::Skill));
        assert!(Provider::Copilot.supports(EntityKind::Command));
    }

    #[test]
    fn test_defaults_exclude_unsupported() {
        for kind in [EntityKind::Agent, EntityKind::Skill, EntityKind::Command] {
            for provider in Provider::defaults_for(kind) {
                assert!(provider.supports(kind), "{provider} in defaults for {kind}");
            }
        }
    }

    #[test]
    fn test_root_dirs() {
        assert_eq!(Provider::Claude.root_dir(), ".claude");
        assert_eq!(Provider::Copilot.root_dir(), ".github");
    }
}
