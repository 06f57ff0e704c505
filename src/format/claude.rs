//! Claude Code frontmatter fields.

use serde_json::Value;

/// Format a tools list as a bracketed, capitalized list:
/// `tools: [Read, Write]`
pub fn tools(value: Option<&Value>) -> String {
    let Some(names) = super::tool_names(value) else {
        return String::new();
    };
    let formatted: Vec<String> = names.iter().map(|name| capitalize(name)).collect();
    format!("tools: [{}]\n", formatted.join(", "))
}

/// First letter uppercased, remainder lowercased ("webSearch" -> "Websearch")
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}
