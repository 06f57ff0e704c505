//! OpenCode frontmatter fields.

use serde_json::Value;

use super::bare;

/// Format a tools list as a lowercase enablement map:
/// ```text
/// tools:
///   read: true
///   write: true
/// ```
pub fn tools(value: Option<&Value>) -> String {
    let Some(names) = super::tool_names(value) else {
        return String::new();
    };
    let mut out = String::from("tools:\n");
    for name in names {
        out.push_str(&format!("  {}: true\n", name.to_lowercase()));
    }
    out
}

/// Format a permission map, one `name: level` line per entry
pub fn permissions(value: Option<&Value>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    let Some(map) = value.as_object() else {
        if !value.is_null() {
            tracing::debug!("permissions field is not a map, rendering nothing");
        }
        return String::new();
    };
    if map.is_empty() {
        return String::new();
    }
    let mut out = String::from("permissions:\n");
    for (name, level) in map {
        out.push_str(&format!("  {name}: {}\n", bare(level)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tools_enablement_map() {
        let value = json!(["Read", "Write"]);
        assert_eq!(tools(Some(&value)), "tools:\n  read: true\n  write: true\n");
    }

    #[test]
    fn test_permissions_lines() {
        let value = json!({"edit": "ask", "bash": "allow"});
        assert_eq!(
            permissions(Some(&value)),
            "permissions:\n  edit: ask\n  bash: allow\n"
        );
    }

    #[test]
    fn test_permissions_empty_or_malformed() {
        assert_eq!(permissions(None), "");
        assert_eq!(permissions(Some(&json!({}))), "");
        assert_eq!(permissions(Some(&json!(["edit"]))), "");
    }
}
