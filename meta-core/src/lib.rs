//! Core utilities and types for the cavemeta reflection generator.
//!
//! This crate provides the generated-file abstraction and the small string
//! transforms shared by the scanner and the emitter.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::{
    generated_file_name, include_path, is_identifier, strip_member_prefix, to_snake_case,
};
