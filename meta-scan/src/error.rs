use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for scan operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<ScanError>>;

/// Malformed annotations that make a header's metadata ambiguous.
#[derive(Debug, Error, Diagnostic)]
pub enum ScanError {
    #[error("property marker appears before any class marker")]
    #[diagnostic(
        code(cavemeta::property_before_class),
        help("add `{class_marker}(ClassName)` to the class body above its first property")
    )]
    PropertyBeforeClass {
        #[source_code]
        src: NamedSource<String>,
        #[label("no owning class for this property")]
        span: SourceSpan,
        class_marker: String,
        line: usize,
    },

    #[error("second class marker '{second}' in a header already declaring '{first}'")]
    #[diagnostic(
        code(cavemeta::duplicate_class),
        help("a header may declare reflection metadata for exactly one class")
    )]
    DuplicateClass {
        #[source_code]
        src: NamedSource<String>,
        #[label("'{first}' declared here")]
        first_span: SourceSpan,
        #[label("second class marker")]
        second_span: SourceSpan,
        first: String,
        second: String,
        line: usize,
    },
}

impl ScanError {
    /// 1-based line of the offending marker.
    pub fn line(&self) -> usize {
        match self {
            ScanError::PropertyBeforeClass { line, .. } | ScanError::DuplicateClass { line, .. } => {
                *line
            }
        }
    }
}
