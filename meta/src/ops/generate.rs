//! Generate operation - scan inputs and emit meta files.

use cavemeta_codegen::{FileReport, FileStatus, Generator, Mode};
use cavemeta_manifest::{MetaToml, MissingInputPolicy};

use crate::reports::{FileEntry, GenerateReport, Outcome};

/// Options for the generate operation.
pub struct GenerateOptions {
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Abort on the first missing input regardless of the manifest policy.
    pub strict: bool,
}

/// Execute the generate operation.
pub fn generate(meta_toml: &MetaToml, opts: GenerateOptions) -> GenerateReport {
    let generator = generator(meta_toml, opts.strict);
    let mode = if opts.dry_run {
        Mode::Preview
    } else {
        Mode::Write
    };
    let result = generator.run(mode);

    GenerateReport {
        output_dir: generator.output_dir(),
        dry_run: opts.dry_run,
        aborted: result.aborted,
        files: result.files.into_iter().map(file_entry).collect(),
    }
}

pub(crate) fn generator(meta_toml: &MetaToml, strict: bool) -> Generator<'_> {
    let generator = Generator::new(meta_toml.manifest(), meta_toml.engine_root());
    if strict {
        generator.with_missing_policy(MissingInputPolicy::Abort)
    } else {
        generator
    }
}

/// Convert a generator report into display data, rendering failures.
pub(crate) fn file_entry(report: FileReport) -> FileEntry {
    let outcome = match report.status {
        FileStatus::Written => Outcome::Written,
        FileStatus::Unchanged => Outcome::Unchanged,
        FileStatus::Preview { content } => Outcome::Preview { content },
        FileStatus::Checked { up_to_date } => Outcome::Checked { up_to_date },
        FileStatus::NoProperties => Outcome::NoProperties,
        FileStatus::Removed => Outcome::Removed,
        FileStatus::Missing { path } => Outcome::Missing { path },
        FileStatus::Failed(e) => Outcome::Failed {
            message: format!("{:?}", miette::Report::new(*e)),
        },
    };

    FileEntry {
        input: report.input,
        output: report.output,
        class_name: report.class_name,
        fields: report.fields,
        diagnostics: report.diagnostics,
        outcome,
    }
}
