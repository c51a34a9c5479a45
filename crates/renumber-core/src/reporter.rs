use crate::error::{EntryError, SkipReason};
use crate::renumber::RenumberSummary;
use std::path::Path;

/// Trait for reporting renumbering progress.
///
/// The CLI implements it with console output. All methods have default no-op
/// implementations.
pub trait RenumberReporter {
    fn on_start(&self, _dir: &Path) {}
    fn on_renamed(&self, _old: &str, _new: &str) {}
    /// Dry run: `old` would have been renamed to `new`.
    fn on_planned(&self, _old: &str, _new: &str) {}
    fn on_unchanged(&self, _name: &str) {}
    fn on_skipped(&self, _name: &str, _reason: SkipReason) {}
    fn on_failed(&self, _name: &str, _error: &EntryError) {}
    fn on_complete(&self, _summary: &RenumberSummary) {}
}

/// No-op reporter for silent operation.
pub struct SilentReporter;

impl RenumberReporter for SilentReporter {}
