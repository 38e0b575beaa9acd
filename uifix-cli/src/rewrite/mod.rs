mod rewriter;
mod rules;

pub use rewriter::TreeRewriter;
pub use rules::{accent_gradient_rules, apply_rules, required_field_rules, RewriteRule};

use std::path::PathBuf;

/// Result of one rewrite pass over a component tree
#[derive(Debug, Clone, serde::Serialize)]
pub struct RewriteReport {
    /// Files matching the suffix filter that were scanned
    pub files_scanned: usize,

    /// Files whose content changed and were written back
    pub files_updated: usize,

    /// Paths of the updated files
    pub updated: Vec<PathBuf>,

    /// Per-file failures, logged and skipped
    pub errors: Vec<String>,
}

impl RewriteReport {
    pub fn new() -> Self {
        Self {
            files_scanned: 0,
            files_updated: 0,
            updated: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn record_updated(&mut self, path: PathBuf) {
        self.files_updated += 1;
        self.updated.push(path);
    }

    pub fn record_error(&mut self, message: String) {
        self.errors.push(message);
    }
}

impl Default for RewriteReport {
    fn default() -> Self {
        Self::new()
    }
}
