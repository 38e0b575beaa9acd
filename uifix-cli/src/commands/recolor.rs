use anyhow::Result;
use std::path::PathBuf;

use super::{print_report, APP_DIR};
use crate::rewrite::{accent_gradient_rules, TreeRewriter};

pub fn run(path: Option<PathBuf>, format: &crate::OutputFormat) -> Result<()> {
    let root = path.unwrap_or_else(|| PathBuf::from(APP_DIR));

    let rewriter = TreeRewriter::new(accent_gradient_rules()?, root, &[".tsx"]);
    let report = rewriter.run()?;

    print_report("Recolor complete", &report, format)
}
