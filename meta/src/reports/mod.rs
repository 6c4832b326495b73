//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod clean;
mod generate;
mod inspect;
mod output;

pub use check::CheckReport;
pub use clean::CleanReport;
pub use generate::{FileEntry, GenerateReport, Outcome};
pub use inspect::InspectReport;
pub use output::{Report, TerminalOutput};
