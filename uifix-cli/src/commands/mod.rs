pub mod recolor;
pub mod remove_required;

use anyhow::Result;

use crate::rewrite::RewriteReport;
use crate::OutputFormat;

/// Directory the UI component files live under
pub const APP_DIR: &str = "app";

/// Print the run report in the selected output format
pub fn print_report(title: &str, report: &RewriteReport, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Markdown => {
            println!("# {}\n", title);
            println!("| Metric | Value |");
            println!("|--------|-------|");
            println!("| Files scanned | {} |", report.files_scanned);
            println!("| Files updated | {} |", report.files_updated);

            if !report.updated.is_empty() {
                println!("\n## Updated files\n");
                for file in &report.updated {
                    println!("- `{}`", file.display());
                }
            }

            if !report.errors.is_empty() {
                println!("\n## Errors\n");
                for error in &report.errors {
                    println!("- {}", error);
                }
            }
        }
        OutputFormat::Text => {
            println!("✓ {}!", title);
            println!("  Files scanned: {}", report.files_scanned);
            println!("  Files updated: {}", report.files_updated);

            if !report.updated.is_empty() {
                println!("\nUpdated files:");
                for file in &report.updated {
                    println!("  • {}", file.display());
                }
            }

            if !report.errors.is_empty() {
                println!("\nErrors:");
                for error in &report.errors {
                    println!("  ⚠️  {}", error);
                }
            }
        }
    }

    Ok(())
}
