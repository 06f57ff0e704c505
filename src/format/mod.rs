//! Field formatters: turn descriptor values into frontmatter fragments.
//!
//! Contains the generic scalar formatter plus one module per provider with
//! custom frontmatter fields. Every formatter returns a ready-to-splice
//! fragment ending in a newline, or an empty string when the field is
//! absent or unusable. Malformed shapes never fail a compile; they log at
//! debug and render nothing.

pub mod claude;
pub mod copilot;
pub mod opencode;

use serde_json::Value;

/// Render a single `key: value` frontmatter line.
///
/// Booleans render lowercase, numbers as serialized, multi-line strings as
/// a block scalar indented two spaces. Strings containing a colon or with
/// surrounding whitespace are double-quoted; embedded quote characters are
/// not escaped, so descriptor authors must avoid them. Absent, null, and
/// empty-string values render nothing, as do arrays and objects.
pub fn scalar(key: &str, value: Option<&Value>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => format!("{key}: {b}\n"),
        Value::Number(n) => format!("{key}: {n}\n"),
        Value::String(s) => scalar_string(key, s),
        _ => {
            tracing::debug!(key, "value is not a scalar, rendering nothing");
            String::new()
        }
    }
}

fn scalar_string(key: &str, s: &str) -> String {
    if s.is_empty() {
        String::new()
    } else if s.contains('\n') {
        let mut out = format!("{key}: |\n");
        for line in s.lines() {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
        out
    } else if s.contains(':') || s.trim() != s {
        format!("{key}: \"{s}\"\n")
    } else {
        format!("{key}: {s}\n")
    }
}

/// Extract a tools list from a descriptor value.
///
/// `None`, `null`, and `false` all mean "no tools". Anything other than an
/// array also yields `None`; non-string array items are dropped.
pub(crate) fn tool_names(value: Option<&Value>) -> Option<Vec<&str>> {
    let value = value?;
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Array(items) => {
            let names: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            if names.is_empty() {
                None
            } else {
                Some(names)
            }
        }
        _ => {
            tracing::debug!("tools field is not a list, rendering nothing");
            None
        }
    }
}

/// Render a JSON value as a bare YAML-ish scalar: strings unquoted,
/// everything else via its compact JSON form.
pub(crate) fn bare(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_absent_and_null() {
        assert_eq!(scalar("model", None), "");
        assert_eq!(scalar("model", Some(&Value::Null)), "");
        assert_eq!(scalar("model", Some(&json!(""))), "");
    }

    #[test]
    fn test_scalar_bool_and_number() {
        assert_eq!(scalar("enabled", Some(&json!(true))), "enabled: true\n");
        assert_eq!(scalar("temperature", Some(&json!(0.2))), "temperature: 0.2\n");
        assert_eq!(scalar("maxIterations", Some(&json!(5))), "maxIterations: 5\n");
    }

    #[test]
    fn test_scalar_plain_string() {
        assert_eq!(scalar("model", Some(&json!("sonnet"))), "model: sonnet\n");
    }

    #[test]
    fn test_scalar_quotes_colon_and_whitespace() {
        assert_eq!(
            scalar("target", Some(&json!("vscode: insiders"))),
            "target: \"vscode: insiders\"\n"
        );
        assert_eq!(scalar("color", Some(&json!(" teal"))), "color: \" teal\"\n");
    }

    #[test]
    fn test_scalar_multiline_block() {
        assert_eq!(
            scalar("notes", Some(&json!("first\nsecond"))),
            "notes: |\n  first\n  second\n"
        );
    }

    #[test]
    fn test_scalar_containers_render_nothing() {
        assert_eq!(scalar("model", Some(&json!(["a"]))), "");
        assert_eq!(scalar("model", Some(&json!({"a": 1}))), "");
    }

    #[test]
    fn test_tool_names_shapes() {
        assert_eq!(tool_names(None), None);
        assert_eq!(tool_names(Some(&json!(false))), None);
        assert_eq!(tool_names(Some(&json!("read"))), None);
        assert_eq!(
            tool_names(Some(&json!(["read", "write"]))),
            Some(vec!["read", "write"])
        );
        // non-string entries are dropped
        assert_eq!(tool_names(Some(&json!(["read", 3]))), Some(vec!["read"]));
    }
}
