pub mod config;
pub mod error;
pub mod naming;
pub mod renumber;
pub mod reporter;
pub mod sequencer;

pub use crate::config::{AppConfig, OrderPolicy};
pub use error::{EntryError, Error, SkipReason};
pub use renumber::{renumber, RenumberOptions, RenumberSummary};
pub use reporter::{RenumberReporter, SilentReporter};
