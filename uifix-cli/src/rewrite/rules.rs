use anyhow::{Context, Result};
use regex::Regex;

/// A single find/replace rule
///
/// The pattern is matched globally over the whole file buffer; the
/// replacement may reference capture groups (`$1`, `$2`, ...).
pub struct RewriteRule {
    pattern: Regex,
    replacement: String,
}

impl RewriteRule {
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .with_context(|| format!("Invalid rewrite pattern: {}", pattern))?;

        Ok(Self {
            pattern,
            replacement: replacement.to_string(),
        })
    }

    /// Replace all non-overlapping matches in `content`
    pub fn apply(&self, content: &str) -> String {
        self.pattern
            .replace_all(content, self.replacement.as_str())
            .into_owned()
    }
}

/// Apply an ordered rule list to a whole buffer, each rule's output
/// feeding the next
pub fn apply_rules(rules: &[RewriteRule], content: &str) -> String {
    rules
        .iter()
        .fold(content.to_string(), |buf, rule| rule.apply(&buf))
}

/// Rules that swap the electric/cyan accent gradient for the darker blue
/// palette
///
/// The border rule also swaps in a hover fill for the outlined buttons,
/// which the first two rules have no counterpart for.
pub fn accent_gradient_rules() -> Result<Vec<RewriteRule>> {
    Ok(vec![
        RewriteRule::new(
            "from-accent-electric to-accent-cyan",
            "from-blue-600 to-blue-700",
        )?,
        RewriteRule::new(
            "shadow-accent-electric/50 hover:shadow-xl hover:shadow-accent-electric/70",
            "shadow-blue-600/50 hover:shadow-xl hover:shadow-blue-600/70",
        )?,
        RewriteRule::new(
            "border-2 border-accent-electric/30\"",
            "border-2 border-blue-500/50 hover:from-blue-500 hover:to-blue-600\"",
        )?,
    ])
}

/// Rules that strip `required` attributes and the trailing asterisk
/// inside label elements
pub fn required_field_rules() -> Result<Vec<RewriteRule>> {
    Ok(vec![
        RewriteRule::new(r"\s+required\s+", " ")?,
        RewriteRule::new(r"\s+required>", ">")?,
        RewriteRule::new(r"required\s+", "")?,
        RewriteRule::new(r"(<label[^>]*>)([^*]+)\s*\*\s*(</label>)", "$1$2$3")?,
        RewriteRule::new(r"(label[^>]*>)([^*]+)\s*\*\s*(</label>)", "$1$2$3")?,
    ])
}
