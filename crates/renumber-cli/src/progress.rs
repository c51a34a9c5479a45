use colored::*;
use renumber_core::{EntryError, RenumberReporter, RenumberSummary, SkipReason};
use std::path::Path;

/// Line-oriented console reporter. One line per action on stdout.
///
/// Files without a `name_number.ext` pattern are skipped silently.
pub struct ConsoleReporter;

impl RenumberReporter for ConsoleReporter {
    fn on_start(&self, dir: &Path) {
        println!("Renumbering files in {}", dir.display());
    }

    fn on_renamed(&self, old: &str, new: &str) {
        println!("{} {} -> {}", "Renamed:".green(), old, new);
    }

    fn on_planned(&self, old: &str, new: &str) {
        println!("{} {} -> {}", "Would rename:".cyan(), old, new);
    }

    fn on_unchanged(&self, name: &str) {
        println!("{} {}", "Unchanged:".dimmed(), name);
    }

    fn on_skipped(&self, name: &str, reason: SkipReason) {
        if reason != SkipReason::NoSequencePattern {
            println!("{} {} ({})", "Skipping file:".yellow(), name, reason);
        }
    }

    fn on_failed(&self, name: &str, error: &EntryError) {
        println!("{} {} ({})", "Failed:".red(), name, error);
    }

    fn on_complete(&self, summary: &RenumberSummary) {
        println!(
            "Done: {} renamed, {} unchanged, {} failed",
            format!("{}", summary.renamed).green(),
            summary.unchanged,
            format!("{}", summary.failed).red(),
        );
    }
}
