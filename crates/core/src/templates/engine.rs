use std::collections::HashMap;

use chrono::Local;
use regex::Regex;
use thiserror::Error;

use crate::config::types::ResolvedConfig;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid regex for template placeholder: {0}")]
    Regex(String),
}

pub type RenderContext = HashMap<String, String>;

/// Anything able to expand a template string into literal text.
///
/// The placement engine renders anchor templates through this seam so it
/// stays independent of the substitution syntax.
pub trait Render {
    /// # Errors
    /// Returns an error when the template cannot be expanded.
    fn render(&self, template: &str) -> Result<String, RenderError>;
}

impl Render for RenderContext {
    fn render(&self, template: &str) -> Result<String, RenderError> {
        render_string(template, self)
    }
}

/// Build the built-in render context with date/time and config variables.
#[must_use]
pub fn build_capture_context(cfg: &ResolvedConfig) -> RenderContext {
    let mut ctx = RenderContext::new();

    let now = Local::now();
    ctx.insert("date".into(), now.format("%Y-%m-%d").to_string());
    ctx.insert("time".into(), now.format("%H:%M").to_string());
    ctx.insert("datetime".into(), now.to_rfc3339());
    // Aliases
    ctx.insert("today".into(), now.format("%Y-%m-%d").to_string());
    ctx.insert("now".into(), now.to_rfc3339());

    ctx.insert("vault_root".into(), cfg.vault_root.to_string_lossy().to_string());
    ctx.insert("captures_dir".into(), cfg.captures_dir.to_string_lossy().to_string());

    ctx
}

/// Render a string template with variable substitution.
///
/// Supports:
/// - Simple variables: `{{var_name}}`
/// - Filters: `{{var_name | filter}}` (slugify, lowercase, uppercase, trim)
///
/// Unknown variables are left in place so the caller can spot them.
///
/// # Errors
/// Returns `RenderError::Regex` when the placeholder pattern fails to build.
pub fn render_string(
    template: &str,
    ctx: &RenderContext,
) -> Result<String, RenderError> {
    let re = Regex::new(r"\{\{([^{}]+)\}\}")
        .map_err(|e| RenderError::Regex(e.to_string()))?;

    let result = re.replace_all(template, |caps: &regex::Captures<'_>| {
        let expr = caps[1].trim();

        // Filter syntax: "var_name | filter"
        if let Some((var_name, filter)) = parse_filter_expr(expr) {
            if let Some(value) = ctx.get(var_name) {
                return apply_filter(value, filter);
            }
            return caps[0].to_string();
        }

        ctx.get(expr).cloned().unwrap_or_else(|| caps[0].to_string())
    });

    Ok(result.into_owned())
}

/// Parse a filter expression like "var_name | filter_name".
fn parse_filter_expr(expr: &str) -> Option<(&str, &str)> {
    let (var_name, filter) = expr.split_once('|')?;
    let var_name = var_name.trim();
    let filter = filter.trim();
    if var_name.is_empty() || filter.is_empty() {
        return None;
    }
    Some((var_name, filter))
}

fn apply_filter(value: &str, filter: &str) -> String {
    match filter {
        "slugify" => slugify(value),
        "lowercase" | "lower" => value.to_lowercase(),
        "uppercase" | "upper" => value.to_uppercase(),
        "trim" => value.trim().to_string(),
        // Unknown filter, return unchanged
        _ => value.to_string(),
    }
}

/// Convert a string to a URL-friendly slug.
fn slugify(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
        } else if (c == ' ' || c == '_' || c == '-') && !result.ends_with('-') {
            result.push('-');
        }
    }

    result.trim_matches('-').to_string()
}
