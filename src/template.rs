//! Template loading and placeholder substitution.
//!
//! Templates are markdown files with `$name` / `${name}` placeholders.
//! Substitution is total: every placeholder present in the context is
//! replaced, unknown placeholders render as empty strings, and `$$` is an
//! escaped literal dollar sign. Templates are deployed configuration, so a
//! missing template file is a fatal error for the whole run.

use anyhow::{Context as _, Result};
use std::collections::HashMap;
use std::path::Path;

use crate::descriptor::EntityKind;
use crate::provider::Provider;

/// Placeholder name to replacement text
pub type Context = HashMap<String, String>;

/// Load the template for an entity kind and provider.
///
/// Agents and commands use `agents/<provider>.md`; skills share a single
/// `skills/skill.md` across providers.
pub fn for_entity(templates_dir: &Path, kind: EntityKind, provider: Provider) -> Result<String> {
    let path = match kind.template_set() {
        "skills" => templates_dir.join("skills").join("skill.md"),
        set => templates_dir.join(set).join(format!("{}.md", provider.id())),
    };
    std::fs::read_to_string(&path).with_context(|| format!("template not found: {}", path.display()))
}

/// Substitute `$name` / `${name}` placeholders from the context.
///
/// Placeholder names are ASCII alphanumerics and underscores. A `$` that
/// introduces neither a name nor `{` passes through unchanged.
pub fn substitute(template: &str, context: &Context) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(tail) = after.strip_prefix('$') {
            out.push('$');
            rest = tail;
        } else if let Some(braced) = after.strip_prefix('{') {
            match braced.find('}') {
                Some(end) => {
                    if let Some(value) = context.get(&braced[..end]) {
                        out.push_str(value);
                    }
                    rest = &braced[end + 1..];
                }
                None => {
                    // unterminated brace, emit literally
                    out.push('$');
                    rest = after;
                }
            }
        } else {
            let end = after
                .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
                .unwrap_or(after.len());
            if end == 0 {
                out.push('$');
                rest = after;
            } else {
                if let Some(value) = context.get(&after[..end]) {
                    out.push_str(value);
                }
                rest = &after[end..];
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(pairs: &[(&str, &str)]) -> Context {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_substitute_both_forms() {
        let c = ctx(&[("name", "reviewer"), ("description", "reviews code")]);
        assert_eq!(
            substitute("# $name\n${description}!", &c),
            "# reviewer\nreviews code!"
        );
    }

    #[test]
    fn test_unknown_placeholder_renders_empty() {
        let c = ctx(&[]);
        assert_eq!(substitute("a${missing}b $gone c", &c), "ab  c");
    }

    #[test]
    fn test_dollar_escaping() {
        let c = ctx(&[("x", "1")]);
        assert_eq!(substitute("cost: $$5, x=$x", &c), "cost: $5, x=1");
    }

    #[test]
    fn test_bare_dollar_passes_through() {
        let c = ctx(&[]);
        assert_eq!(substitute("100$ and $-sign", &c), "100$ and $-sign");
    }

    #[test]
    fn test_unterminated_brace_is_literal() {
        let c = ctx(&[("name", "x")]);
        assert_eq!(substitute("${name", &c), "${name");
    }
}
