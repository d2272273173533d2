//! Variable specifications for captures.

use serde::Deserialize;
use std::collections::HashMap;

/// A map of variable names to their specifications.
pub type VarsMap = HashMap<String, VarSpec>;

/// Specification for a single variable.
///
/// Variables can be declared in two forms in YAML:
///
/// Simple form (just the prompt string):
/// ```yaml
/// vars:
///   text: "What happened?"
/// ```
///
/// Full form (with metadata):
/// ```yaml
/// vars:
///   text:
///     prompt: "What happened?"
///     required: true
///   day:
///     default: "{{date}}"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum VarSpec {
    Simple(String),
    Full(VarMetadata),
}

impl VarSpec {
    /// Prompt text shown when a value is missing.
    #[must_use]
    pub fn prompt(&self) -> &str {
        match self {
            VarSpec::Simple(s) => s,
            VarSpec::Full(m) => m.prompt.as_deref().unwrap_or(""),
        }
    }

    /// Default value template, if any.
    #[must_use]
    pub fn default(&self) -> Option<&str> {
        match self {
            VarSpec::Simple(_) => None,
            VarSpec::Full(m) => m.default.as_deref(),
        }
    }

    /// A variable is required when it has no default, unless the full form
    /// says otherwise.
    #[must_use]
    pub fn is_required(&self) -> bool {
        match self {
            VarSpec::Simple(_) => true,
            VarSpec::Full(m) => m.required.unwrap_or_else(|| m.default.is_none()),
        }
    }
}

/// Full metadata for a variable specification.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VarMetadata {
    /// Human-readable prompt.
    pub prompt: Option<String>,

    /// Whether this variable is required. Default: true if no default.
    pub required: Option<bool>,

    /// Default value (static string or a template like "{{date}}").
    pub default: Option<String>,
}

/// Extract variable names from a template string.
///
/// Finds all `{{var_name}}` patterns and returns the unique names, minus
/// the built-ins that never need to be supplied.
#[must_use]
pub fn extract_variable_names(template: &str) -> Vec<String> {
    use regex::Regex;

    const BUILTINS: &[&str] =
        &["date", "time", "datetime", "today", "now", "vault_root", "captures_dir"];

    let re = Regex::new(r"\{\{([a-zA-Z_][a-zA-Z0-9_]*)\}\}").expect("valid regex");
    let mut seen = std::collections::HashSet::new();
    let mut vars = Vec::new();

    for cap in re.captures_iter(template) {
        let name = &cap[1];
        if !BUILTINS.contains(&name) && seen.insert(name.to_string()) {
            vars.push(name.to_string());
        }
    }

    vars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_skips_builtins() {
        let vars = extract_variable_names("- {{text}} at {{time}} on {{date}}");
        assert_eq!(vars, vec!["text"]);
    }

    #[test]
    fn extract_dedupes_in_order() {
        let vars = extract_variable_names("{{b}} {{a}} {{b}}");
        assert_eq!(vars, vec!["b", "a"]);
    }

    #[test]
    fn simple_var_is_required_without_default() {
        let spec = VarSpec::Simple("What happened?".into());
        assert!(spec.is_required());
        assert_eq!(spec.default(), None);
        assert_eq!(spec.prompt(), "What happened?");
    }

    #[test]
    fn full_var_with_default_is_optional() {
        let spec = VarSpec::Full(VarMetadata {
            prompt: None,
            required: None,
            default: Some("{{date}}".into()),
        });
        assert!(!spec.is_required());
        assert_eq!(spec.default(), Some("{{date}}"));
    }

    #[test]
    fn yaml_deserializes_both_forms() {
        let yaml = r#"
text: "What happened?"
day:
  default: "{{date}}"
"#;
        let vars: VarsMap = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(vars.get("text"), Some(VarSpec::Simple(_))));
        assert!(matches!(vars.get("day"), Some(VarSpec::Full(_))));
    }
}
