// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Manifest (`cavemeta.toml`) parsing and validation.
//!
//! The manifest names the engine source root, the marker keywords, the
//! output layout and the list of headers to scan.

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    DEFAULT_MANIFEST, EngineConfig, InputsConfig, Manifest, MANIFEST_FILE_NAME, MarkerConfig,
    MetaToml, MissingInputPolicy, OutputConfig,
};
