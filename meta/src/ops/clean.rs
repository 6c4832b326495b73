//! Clean operation - remove orphaned generated files.

use cavemeta_codegen::Generator;
use cavemeta_manifest::MetaToml;
use eyre::{Context, Result};

use crate::reports::CleanReport;

/// Options for the clean operation.
pub struct CleanOptions {
    /// Whether to preview without deleting.
    pub dry_run: bool,
}

/// Execute the clean operation.
///
/// Removes generated files whose header is no longer listed in the manifest.
pub fn clean(meta_toml: &MetaToml, opts: CleanOptions) -> Result<CleanReport> {
    let generator = Generator::new(meta_toml.manifest(), meta_toml.engine_root());
    let output_dir = generator.output_dir();

    let removed = generator
        .clean(opts.dry_run)
        .wrap_err("Failed to clean orphaned files")?;

    Ok(CleanReport {
        dry_run: opts.dry_run,
        deleted: removed
            .iter()
            .map(|p| {
                p.strip_prefix(&output_dir)
                    .unwrap_or(p)
                    .display()
                    .to_string()
            })
            .collect(),
    })
}
