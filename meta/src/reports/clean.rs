//! Clean command report data structures.

use super::output::{Output, Report};

/// Report data from cleaning orphaned files.
#[derive(Debug)]
pub struct CleanReport {
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// Deleted generated files.
    pub deleted: Vec<String>,
}

impl CleanReport {
    /// Whether any files were deleted (or would be deleted in dry run).
    pub fn has_deletions(&self) -> bool {
        !self.deleted.is_empty()
    }
}

impl Report for CleanReport {
    fn render(&self, out: &mut dyn Output) {
        if !self.has_deletions() {
            out.preformatted("No orphaned files found.");
            return;
        }

        if self.dry_run {
            out.section("Would delete");
        } else {
            out.section("Deleted");
        }
        for path in &self.deleted {
            out.removed_item(path);
        }
    }
}
