use anyhow::Result;
use std::path::PathBuf;

use super::{print_report, APP_DIR};
use crate::rewrite::{required_field_rules, TreeRewriter};

pub fn run(path: Option<PathBuf>, format: &crate::OutputFormat) -> Result<()> {
    let root = path.unwrap_or_else(|| PathBuf::from(APP_DIR));

    // Form markup also lives in plain .ts helpers, so both suffixes are in scope
    let rewriter = TreeRewriter::new(required_field_rules()?, root, &[".tsx", ".ts"]);
    let report = rewriter.run()?;

    print_report("Required fields removed", &report, format)
}
