//! Generate command report data structures.

use std::path::{Path, PathBuf};

use cavemeta_scan::{Diagnostic, FieldRecord};

use super::output::{Output, Report};

/// Outcome for one input, with failures already rendered for display.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Written,
    Unchanged,
    Preview { content: String },
    Checked { up_to_date: bool },
    NoProperties,
    Removed,
    Missing { path: PathBuf },
    Failed { message: String },
}

/// One configured input and what happened to it.
#[derive(Debug)]
pub struct FileEntry {
    /// Input path as written in the manifest.
    pub input: String,
    /// Generated file path, when one applies.
    pub output: Option<PathBuf>,
    pub class_name: Option<String>,
    pub fields: Vec<FieldRecord>,
    pub diagnostics: Vec<Diagnostic>,
    pub outcome: Outcome,
}

impl FileEntry {
    /// Generated file name, falling back to the input path.
    pub fn output_name(&self) -> String {
        self.output
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input.clone())
    }

    /// Short description, e.g. `light.meta.cpp (LightComponent, 2 fields)`.
    pub fn summary(&self) -> String {
        let count = self.fields.len();
        format!(
            "{} ({}, {} field{})",
            self.output_name(),
            self.class_name.as_deref().unwrap_or("?"),
            count,
            if count == 1 { "" } else { "s" }
        )
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, Outcome::Failed { .. })
    }

    /// Emit warning diagnostics prefixed with the input path.
    pub fn render_warnings(&self, out: &mut dyn Output) {
        for diag in self.diagnostics.iter().filter(|d| d.severity.is_warning()) {
            out.warning(&format!("{}:{}: {}", self.input, diag.line, diag.message));
        }
    }
}

/// Report data from a generate run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Absolute output directory.
    pub output_dir: PathBuf,
    /// Whether files were only previewed.
    pub dry_run: bool,
    /// A missing input stopped the run early.
    pub aborted: bool,
    pub files: Vec<FileEntry>,
}

impl GenerateReport {
    pub fn failed_count(&self) -> usize {
        self.files.iter().filter(|f| f.is_failed()).count()
    }

    /// Whether the process should exit non-zero.
    pub fn has_failures(&self) -> bool {
        self.aborted || self.failed_count() > 0
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.files.iter().filter(|f| pred(&f.outcome)).count()
    }

    fn render_preview(&self, out: &mut dyn Output) {
        let mut previewed = 0;
        for file in &self.files {
            if let Outcome::Preview { content } = &file.outcome {
                let path = file.output.as_deref().unwrap_or(Path::new(&file.input));
                out.divider(&path.display().to_string());
                out.preformatted(content);
                previewed += 1;
            }
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} file{} would be generated",
            previewed,
            if previewed == 1 { "" } else { "s" }
        ));
    }

    fn render_written(&self, out: &mut dyn Output) {
        let changed: Vec<_> = self
            .files
            .iter()
            .filter(|f| {
                matches!(
                    f.outcome,
                    Outcome::Written | Outcome::Unchanged | Outcome::Removed
                )
            })
            .collect();
        if !changed.is_empty() {
            out.section(&format!("Generated ({})", self.output_dir.display()));
            for file in changed {
                match file.outcome {
                    Outcome::Written => out.added_item(&file.summary()),
                    Outcome::Removed => {
                        out.removed_item(&format!("{} removed, no properties", file.output_name()))
                    }
                    _ => out.unchanged_item(&format!("{} unchanged", file.summary())),
                }
            }
        }

        out.newline();
        out.preformatted(&format!(
            "{} written, {} unchanged, {} removed, {} skipped, {} failed",
            self.count(|o| *o == Outcome::Written),
            self.count(|o| *o == Outcome::Unchanged),
            self.count(|o| *o == Outcome::Removed),
            self.count(|o| matches!(o, Outcome::NoProperties | Outcome::Missing { .. })),
            self.failed_count()
        ));
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for file in &self.files {
            file.render_warnings(out);
            match &file.outcome {
                Outcome::Failed { message } => out.error(message),
                Outcome::Missing { path } => {
                    out.warning(&format!("{} not found, skipped", path.display()))
                }
                _ => {}
            }
        }

        let skipped: Vec<_> = self
            .files
            .iter()
            .filter(|f| f.outcome == Outcome::NoProperties)
            .collect();
        if !skipped.is_empty() {
            out.section("No properties");
            for file in skipped {
                out.list_item(&file.input);
            }
            out.newline();
        }

        if self.dry_run {
            self.render_preview(out);
        } else {
            self.render_written(out);
        }

        if self.aborted {
            out.error("run aborted on a missing input; remaining inputs were not processed");
        }
    }
}
