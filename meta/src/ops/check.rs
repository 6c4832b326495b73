//! Check operation - scan every input without writing.

use cavemeta_codegen::Mode;
use cavemeta_manifest::MetaToml;

use super::generate::{file_entry, generator};
use crate::reports::CheckReport;

/// Execute the check operation.
pub fn check(meta_toml: &MetaToml, strict: bool) -> CheckReport {
    let result = generator(meta_toml, strict).run(Mode::Check);

    CheckReport {
        config_path: meta_toml.path().to_path_buf(),
        aborted: result.aborted,
        files: result.files.into_iter().map(file_entry).collect(),
    }
}
