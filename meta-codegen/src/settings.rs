use std::path::PathBuf;

use cavemeta_manifest::{EngineConfig, Manifest, MarkerConfig, OutputConfig};

/// Everything the emitter needs to know about the target engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitSettings {
    /// Namespace holding the `MetaDataTable` specialization.
    pub namespace: String,
    /// Header providing `MetaDataTable` and `REGISTER_FIELD`.
    pub runtime_include: String,
    /// Prefix prepended to the input path when re-including the header.
    pub include_prefix: String,
    /// Member prefix stripped from registered display names.
    pub member_prefix: String,
    /// Output directory relative to the engine root.
    pub output_dir: PathBuf,
    /// Suffix replacing the header extension.
    pub suffix: String,
    /// Class marker keyword, used in error help.
    pub class_marker: String,
}

impl EmitSettings {
    pub fn new(engine: &EngineConfig, markers: &MarkerConfig, output: &OutputConfig) -> Self {
        Self {
            namespace: output.namespace.clone(),
            runtime_include: output.runtime_include.clone(),
            include_prefix: engine.include_prefix.clone(),
            member_prefix: output.member_prefix.clone(),
            output_dir: PathBuf::from(&output.dir),
            suffix: output.suffix.clone(),
            class_marker: markers.class.clone(),
        }
    }
}

impl Default for EmitSettings {
    fn default() -> Self {
        Self::new(
            &EngineConfig::default(),
            &MarkerConfig::default(),
            &OutputConfig::default(),
        )
    }
}

impl From<&Manifest> for EmitSettings {
    fn from(manifest: &Manifest) -> Self {
        Self::new(&manifest.engine, &manifest.markers, &manifest.output)
    }
}
