use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::rules::{apply_rules, RewriteRule};
use super::RewriteReport;

/// Applies an ordered rule set to every matching file under a root
/// directory
///
/// Files are processed one at a time. Each file is read in full and
/// written back only when the transformed buffer differs from the
/// original bytes.
pub struct TreeRewriter {
    /// Rules applied in order to each file's content
    rules: Vec<RewriteRule>,

    /// Root directory to walk
    root: PathBuf,

    /// Filename suffixes that select target files (e.g. ".tsx")
    extensions: Vec<String>,
}

impl TreeRewriter {
    pub fn new(rules: Vec<RewriteRule>, root: PathBuf, extensions: &[&str]) -> Self {
        Self {
            rules,
            root,
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Walk the tree and rewrite every matching file
    ///
    /// Per-file failures are logged and recorded on the report; only a
    /// missing root directory fails the whole pass.
    pub fn run(&self) -> Result<RewriteReport> {
        if !self.root.is_dir() {
            bail!("Root directory not found: {}", self.root.display());
        }

        let mut report = RewriteReport::new();

        for entry in WalkDir::new(&self.root).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    report.record_error(e.to_string());
                    continue;
                }
            };

            if !entry.file_type().is_file() || !self.matches_extension(entry.path()) {
                continue;
            }

            report.files_scanned += 1;

            match self.rewrite_file(entry.path()) {
                Ok(true) => {
                    info!("Updated {}", entry.path().display());
                    report.record_updated(entry.path().to_path_buf());
                }
                Ok(false) => {
                    debug!("Unchanged {}", entry.path().display());
                }
                Err(e) => {
                    warn!("{}: {:#}", entry.path().display(), e);
                    report.record_error(format!("{}: {:#}", entry.path().display(), e));
                }
            }
        }

        Ok(report)
    }

    /// Apply the rules to a single file, returning whether it was written
    fn rewrite_file(&self, path: &Path) -> Result<bool> {
        let original = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let rewritten = apply_rules(&self.rules, &original);

        // Only write if content changed
        if rewritten == original {
            return Ok(false);
        }

        fs::write(path, rewritten)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        Ok(true)
    }

    /// Check if a file name ends with one of the target suffixes
    fn matches_extension(&self, path: &Path) -> bool {
        match path.file_name() {
            Some(name) => {
                let name = name.to_string_lossy();
                self.extensions.iter().any(|ext| name.ends_with(ext))
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::accent_gradient_rules;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn gradient_rewriter(root: &Path) -> TreeRewriter {
        TreeRewriter::new(
            accent_gradient_rules().unwrap(),
            root.to_path_buf(),
            &[".tsx"],
        )
    }

    #[test]
    fn test_rewrites_nested_component_files() -> Result<()> {
        let temp = TempDir::new()?;
        let page = temp.path().join("page.tsx");
        let button = temp.path().join("contato").join("button.tsx");
        fs::create_dir(temp.path().join("contato"))?;
        fs::write(&page, "from-accent-electric to-accent-cyan\n")?;
        fs::write(
            &button,
            "shadow-accent-electric/50 hover:shadow-xl hover:shadow-accent-electric/70\n",
        )?;

        let report = gradient_rewriter(temp.path()).run()?;

        assert_eq!(report.files_scanned, 2);
        assert_eq!(report.files_updated, 2);
        assert!(report.updated.contains(&page));
        assert!(report.updated.contains(&button));
        assert_eq!(fs::read_to_string(&page)?, "from-blue-600 to-blue-700\n");
        assert_eq!(
            fs::read_to_string(&button)?,
            "shadow-blue-600/50 hover:shadow-xl hover:shadow-blue-600/70\n"
        );

        Ok(())
    }

    #[test]
    fn test_unchanged_file_is_not_reported() -> Result<()> {
        let temp = TempDir::new()?;
        let file = temp.path().join("layout.tsx");
        let content = "export default function Layout() {}\n";
        fs::write(&file, content)?;

        let report = gradient_rewriter(temp.path()).run()?;

        assert_eq!(report.files_scanned, 1);
        assert_eq!(report.files_updated, 0);
        assert!(report.updated.is_empty());
        assert!(report.errors.is_empty());
        assert_eq!(fs::read_to_string(&file)?, content);

        Ok(())
    }

    #[test]
    fn test_files_outside_suffix_filter_are_skipped() -> Result<()> {
        let temp = TempDir::new()?;
        let module = temp.path().join("theme.ts");
        let styles = temp.path().join("globals.css");
        fs::write(&module, "from-accent-electric to-accent-cyan\n")?;
        fs::write(&styles, "from-accent-electric to-accent-cyan\n")?;

        let report = gradient_rewriter(temp.path()).run()?;

        assert_eq!(report.files_scanned, 0);
        assert_eq!(report.files_updated, 0);
        assert_eq!(
            fs::read_to_string(&module)?,
            "from-accent-electric to-accent-cyan\n"
        );
        assert_eq!(
            fs::read_to_string(&styles)?,
            "from-accent-electric to-accent-cyan\n"
        );

        Ok(())
    }

    #[test]
    fn test_undecodable_file_is_skipped_without_aborting() -> Result<()> {
        let temp = TempDir::new()?;
        let first = temp.path().join("a.tsx");
        let broken = temp.path().join("b.tsx");
        let last = temp.path().join("c.tsx");
        fs::write(&first, "from-accent-electric to-accent-cyan")?;
        fs::write(&broken, [0xff, 0xfe, 0x80])?;
        fs::write(&last, "from-accent-electric to-accent-cyan")?;

        let report = gradient_rewriter(temp.path()).run()?;

        assert_eq!(report.files_scanned, 3);
        assert_eq!(report.files_updated, 2);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("b.tsx"));
        assert_eq!(fs::read_to_string(&first)?, "from-blue-600 to-blue-700");
        assert_eq!(fs::read_to_string(&last)?, "from-blue-600 to-blue-700");

        Ok(())
    }

    #[test]
    fn test_missing_root_fails_the_run() {
        let temp = TempDir::new().unwrap();
        let rewriter = gradient_rewriter(&temp.path().join("missing"));

        assert!(rewriter.run().is_err());
    }

    #[test]
    fn test_second_pass_reports_no_updates() -> Result<()> {
        let temp = TempDir::new()?;
        let file = temp.path().join("page.tsx");
        fs::write(
            &file,
            "border-2 border-accent-electric/30\" from-accent-electric to-accent-cyan",
        )?;

        let rewriter = gradient_rewriter(temp.path());
        let first = rewriter.run()?;
        let second = rewriter.run()?;

        assert_eq!(first.files_updated, 1);
        assert_eq!(second.files_updated, 0);

        Ok(())
    }
}
