// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Annotation scanner for engine headers.
//!
//! The scanner walks a header line by line looking for a class marker
//! (`CAVE_META(TransformComponent)`) and property markers
//! (`CAVE_PROP(editor = Scale)`). Each property marker is paired with the
//! next non-blank line, which is read as a single-line field declaration.
//!
//! ```
//! use cavemeta_scan::{MarkerSet, Scanner};
//!
//! let src = "CAVE_META(Foo)\nCAVE_PROP(editable)\nfloat m_speed;\n";
//! let result = Scanner::new(&MarkerSet::default()).scan(src, "foo.h").unwrap();
//!
//! assert_eq!(result.class_name(), Some("Foo"));
//! assert_eq!(result.fields[0].field_name, "m_speed");
//! ```

mod declaration;
mod diagnostic;
mod error;
mod marker;
mod result;
mod scanner;

pub use declaration::{Declaration, DeclarationError, parse_declaration};
pub use diagnostic::{Diagnostic, Severity};
pub use error::{Result, ScanError};
pub use marker::{Marker, MarkerSet};
pub use result::{ClassAnnotation, FieldRecord, ScanResult};
pub use scanner::Scanner;
