//! Check command report data structures.

use std::path::PathBuf;

use cavemeta_scan::{FieldRecord, Severity};

use super::{
    generate::{FileEntry, Outcome},
    output::{Output, Report},
};

/// Report data from scanning every input without writing.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    pub files: Vec<FileEntry>,
    pub aborted: bool,
}

impl CheckReport {
    /// Whether every input scanned cleanly.
    pub fn is_valid(&self) -> bool {
        !self.aborted && !self.files.iter().any(FileEntry::is_failed)
    }

    /// Generated files that differ from what would be generated now.
    pub fn stale(&self) -> impl Iterator<Item = &FileEntry> {
        self.files
            .iter()
            .filter(|f| f.outcome == Outcome::Checked { up_to_date: false })
    }

    fn field_count(&self) -> usize {
        self.files.iter().map(|f| f.fields.len()).sum()
    }
}

/// `uint32_t m_flags (type = flags), line 12`
pub(crate) fn describe_field(field: &FieldRecord) -> String {
    let mut text = if field.declared_type.is_empty() {
        field.field_name.clone()
    } else {
        format!("{} {}", field.declared_type, field.field_name)
    };
    if !field.metadata.is_empty() {
        text.push_str(&format!(" ({})", field.metadata));
    }
    text.push_str(&format!(", line {}", field.line));
    text
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for file in &self.files {
            file.render_warnings(out);
            match &file.outcome {
                Outcome::Failed { message } => {
                    out.error(message);
                    continue;
                }
                Outcome::Missing { path } => {
                    out.warning(&format!("{} not found, skipped", path.display()));
                    continue;
                }
                _ => {}
            }

            out.section(&format!(
                "{} ({})",
                file.input,
                file.class_name.as_deref().unwrap_or("?")
            ));
            for (i, field) in file.fields.iter().enumerate() {
                out.numbered_item(i + 1, &describe_field(field));
            }
            for diag in &file.diagnostics {
                if diag.severity == Severity::Info {
                    out.list_item(&format!("info: line {}: {}", diag.line, diag.message));
                }
            }
            out.newline();
        }

        let stale: Vec<_> = self.stale().collect();
        if !stale.is_empty() {
            out.section("Out of date");
            for file in stale {
                out.list_item(&file.output_name());
            }
            out.newline();
        }

        if self.aborted {
            out.error("check aborted on a missing input; remaining inputs were not scanned");
        } else if self.is_valid() {
            out.preformatted(&format!(
                "✓ {} is valid ({} headers, {} fields)",
                self.config_path.display(),
                self.files.len(),
                self.field_count()
            ));
        }
    }
}
