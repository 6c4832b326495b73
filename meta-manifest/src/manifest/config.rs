use serde::Deserialize;

/// Layout of the engine source tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Engine source root, relative to the manifest directory
    pub root: String,

    /// Prefix prepended to input paths when including the original header
    pub include_prefix: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            root: "engine/src/engine".to_string(),
            include_prefix: "engine".to_string(),
        }
    }
}

/// Annotation keywords recognized by the scanner.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkerConfig {
    /// Class-level marker, e.g. `CAVE_META(TransformComponent)`
    pub class: String,

    /// Per-field marker, e.g. `CAVE_PROP(editor = Scale)`
    pub property: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            class: "CAVE_META".to_string(),
            property: "CAVE_PROP".to_string(),
        }
    }
}

/// Generated file layout and the C++ contract it targets.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Output directory, relative to the engine root
    pub dir: String,

    /// Suffix replacing the header extension
    pub suffix: String,

    /// Namespace wrapping the metadata table specialization
    pub namespace: String,

    /// Header providing `MetaDataTable` and `REGISTER_FIELD`
    pub runtime_include: String,

    /// Member prefix stripped from registered field names
    pub member_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: "reflection/generated".to_string(),
            suffix: ".meta.cpp".to_string(),
            namespace: "cave".to_string(),
            runtime_include: "engine/reflection/meta.h".to_string(),
            member_prefix: "m_".to_string(),
        }
    }
}
