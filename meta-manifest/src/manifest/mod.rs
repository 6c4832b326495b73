//! Manifest types and parsing for cavemeta.toml files.

mod config;
mod file;
mod inputs;
mod parse;
mod template;
mod validate;

use std::path::{Path, PathBuf};

use cavemeta_core::generated_file_name;
pub use config::{EngineConfig, MarkerConfig, OutputConfig};
pub use file::MetaToml;
pub use inputs::{InputsConfig, MissingInputPolicy};
use serde::Deserialize;
pub use template::DEFAULT_MANIFEST;

/// Conventional manifest file name.
pub const MANIFEST_FILE_NAME: &str = "cavemeta.toml";

/// Root manifest for cavemeta.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Engine source tree layout
    #[serde(default)]
    pub engine: EngineConfig,

    /// Annotation keywords recognized in headers
    #[serde(default)]
    pub markers: MarkerConfig,

    /// Generated file layout and C++ contract
    #[serde(default)]
    pub output: OutputConfig,

    /// Headers to scan
    pub inputs: InputsConfig,
}

impl Manifest {
    /// Resolve the engine source root against the directory holding the manifest.
    pub fn engine_root(&self, manifest_dir: &Path) -> PathBuf {
        manifest_dir.join(&self.engine.root)
    }

    /// Directory (relative to the engine root) that receives generated files.
    pub fn output_dir(&self) -> &Path {
        Path::new(&self.output.dir)
    }

    /// Name of the file generated for `input`, e.g. `"scene/camera.h"` -> `"camera.meta.cpp"`.
    ///
    /// Returns `None` when the input has no usable base name.
    pub fn output_file_name(&self, input: &str) -> Option<String> {
        generated_file_name(input, &self.output.suffix)
    }
}
