use std::path::PathBuf;

use cavemeta_scan::ScanError;
use miette::Diagnostic;
use thiserror::Error;

/// Result type for generation (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<GenerateError>>;

/// Failures that stop one input header from producing its meta file.
#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    #[error("input header '{}' does not exist", path.display())]
    #[diagnostic(
        code(cavemeta::missing_input),
        help("input paths in [inputs] files are relative to the engine root")
    )]
    MissingInput { path: PathBuf },

    #[error("input '{input}' has no file name")]
    #[diagnostic(code(cavemeta::invalid_input))]
    InvalidInput { input: String },

    #[error("failed to read '{}'", path.display())]
    #[diagnostic(code(cavemeta::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Scan(#[from] ScanError),

    #[error("no class marker in '{input}'")]
    #[diagnostic(
        code(cavemeta::unresolved_class),
        help("add `{class_marker}(ClassName)` inside the class body")
    )]
    UnresolvedClass { input: String, class_marker: String },

    #[error("failed to write '{}'", path.display())]
    #[diagnostic(code(cavemeta::write))]
    Write {
        path: PathBuf,
        #[source]
        source: eyre::Report,
    },
}

impl From<Box<ScanError>> for Box<GenerateError> {
    fn from(e: Box<ScanError>) -> Self {
        Box::new(GenerateError::Scan(*e))
    }
}
