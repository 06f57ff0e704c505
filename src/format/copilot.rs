//! GitHub Copilot frontmatter fields.

use serde_json::Value;

use super::bare;

/// Format a tools list as a single-quoted lowercase list:
/// `tools: ['read', 'write']`
pub fn tools(value: Option<&Value>) -> String {
    let Some(names) = super::tool_names(value) else {
        return String::new();
    };
    let formatted: Vec<String> = names
        .iter()
        .map(|name| format!("'{}'", name.to_lowercase()))
        .collect();
    format!("tools: [{}]\n", formatted.join(", "))
}

/// Format an ordered handoff list. Each record emits `label` and `agent`;
/// `prompt` and `send` appear only when present.
pub fn handoffs(value: Option<&Value>) -> String {
    let Some(items) = value.and_then(Value::as_array) else {
        if value.is_some_and(|v| !v.is_null()) {
            tracing::debug!("handoffs field is not a list, rendering nothing");
        }
        return String::new();
    };
    if items.is_empty() {
        return String::new();
    }
    let mut out = String::from("handoffs:\n");
    for item in items {
        let Some(record) = item.as_object() else {
            tracing::debug!("handoff entry is not a map, skipping");
            continue;
        };
        let label = record.get("label").map(bare).unwrap_or_default();
        let agent = record.get("agent").map(bare).unwrap_or_default();
        out.push_str(&format!("  - label: {label}\n"));
        out.push_str(&format!("    agent: {agent}\n"));
        if let Some(prompt) = record.get("prompt").filter(|v| !v.is_null()) {
            out.push_str(&format!("    prompt: {}\n", bare(prompt)));
        }
        if let Some(send) = record.get("send").filter(|v| !v.is_null()) {
            out.push_str(&format!("    send: {}\n", bare(send)));
        }
    }
    out
}

/// Format MCP server registrations as nested YAML-like text.
///
/// Each registration's config mapping is emitted at 4-space indent; values
/// that are themselves mappings or lists recurse exactly one level (6-space
/// indent). Deeper structures fall back to their compact JSON form — the
/// format supports a single nesting level, by contract with the templates.
pub fn mcp_servers(value: Option<&Value>) -> String {
    let Some(servers) = value.and_then(Value::as_object) else {
        if value.is_some_and(|v| !v.is_null()) {
            tracing::debug!("mcpServers field is not a map, rendering nothing");
        }
        return String::new();
    };
    if servers.is_empty() {
        return String::new();
    }
    let mut out = String::from("mcpServers:\n");
    for (name, config) in servers {
        out.push_str(&format!("  {name}:\n"));
        let Some(config) = config.as_object() else {
            tracing::debug!(server = name.as_str(), "server config is not a map, skipping");
            continue;
        };
        for (key, value) in config {
            match value {
                Value::Object(nested) => {
                    out.push_str(&format!("    {key}:\n"));
                    for (k, v) in nested {
                        out.push_str(&format!("      {k}: {}\n", bare(v)));
                    }
                }
                Value::Array(items) => {
                    out.push_str(&format!("    {key}:\n"));
                    for item in items {
                        out.push_str(&format!("      - {}\n", bare(item)));
                    }
                }
                other => out.push_str(&format!("    {key}: {}\n", bare(other))),
            }
        }
    }
    out
}
