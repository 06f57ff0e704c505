//! Entity compiler: assembles the template context for one entity and one
//! provider, and renders it.
//!
//! Each provider gets only the frontmatter sections its format understands;
//! everything else is left out of the context and therefore renders empty.

use anyhow::Result;
use std::path::Path;

use crate::descriptor::{Descriptor, EntityKind};
use crate::format;
use crate::provider::Provider;
use crate::template::{self, Context};

const DEFAULT_SKILL_VERSION: &str = "1.0.0";

/// Compile an entity for a single provider.
///
/// Returns `Ok(None)` when the provider is disabled in the descriptor's
/// `providers` map or does not consume this entity kind at all. A missing
/// template is an error and aborts the run.
pub fn compile(
    descriptor: &Descriptor,
    provider: Provider,
    templates_dir: &Path,
) -> Result<Option<String>> {
    if !descriptor.provider_enabled(provider) {
        tracing::debug!(
            entity = descriptor.str_field("name"),
            %provider,
            "disabled in descriptor, skipping"
        );
        return Ok(None);
    }
    if !provider.supports(descriptor.kind()) {
        return Ok(None);
    }

    let context = match descriptor.kind() {
        EntityKind::Skill => skill_context(descriptor),
        EntityKind::Agent | EntityKind::Command => agent_context(descriptor, provider),
    };

    let template = template::for_entity(templates_dir, descriptor.kind(), provider)?;
    Ok(Some(template::substitute(&template, &context)))
}

fn base_context(descriptor: &Descriptor) -> Context {
    let mut context = Context::new();
    context.insert("name".into(), descriptor.str_field("name").to_string());
    context.insert(
        "description".into(),
        descriptor.str_field("description").to_string(),
    );
    context
}

fn agent_context(descriptor: &Descriptor, provider: Provider) -> Context {
    let mut context = base_context(descriptor);
    context.insert("prompt".into(), descriptor.str_field("prompt").to_string());

    let tools = descriptor.get("tools");
    match provider {
        Provider::Claude => {
            context.insert("tools_section".into(), format::claude::tools(tools));
            context.insert(
                "model_section".into(),
                format::scalar("model", descriptor.get("model")),
            );
            context.insert(
                "color_section".into(),
                format::scalar("color", descriptor.get("color")),
            );
        }
        Provider::Opencode => {
            context.insert("tools_section".into(), format::opencode::tools(tools));
            context.insert(
                "model_section".into(),
                format::scalar("model", descriptor.get("model")),
            );
            context.insert(
                "temperature_section".into(),
                format::scalar("temperature", descriptor.get("temperature")),
            );
            context.insert(
                "max_iterations_section".into(),
                format::scalar("maxIterations", descriptor.get("maxIterations")),
            );
            context.insert(
                "permissions_section".into(),
                format::opencode::permissions(descriptor.get("permissions")),
            );
        }
        Provider::Copilot => {
            context.insert("tools_section".into(), format::copilot::tools(tools));
            context.insert(
                "model_section".into(),
                format::scalar("model", descriptor.get("model")),
            );
            context.insert(
                "handoffs_section".into(),
                format::copilot::handoffs(descriptor.get("handoffs")),
            );
            context.insert(
                "mcp_servers_section".into(),
                format::copilot::mcp_servers(descriptor.get("mcpServers")),
            );
            context.insert(
                "target_section".into(),
                format::scalar("target", descriptor.get("target")),
            );
        }
        // filtered out by Provider::supports before we get here
        Provider::Gemini => {}
    }
    context
}

fn skill_context(descriptor: &Descriptor) -> Context {
    let mut context = base_context(descriptor);
    context.insert(
        "instructions".into(),
        descriptor.str_field("instructions").to_string(),
    );

    let version = descriptor.str_field("version");
    context.insert(
        "version".into(),
        if version.is_empty() {
            DEFAULT_SKILL_VERSION.to_string()
        } else {
            version.to_string()
        },
    );

    let tags = descriptor
        .get("tags")
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();
    context.insert("tags".into(), tags);

    context
}
