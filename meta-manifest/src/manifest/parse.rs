//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{MANIFEST_FILE_NAME, Manifest, validate::ValidationContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILE_NAME)
    }
}

impl Manifest {
    /// Parse a cavemeta.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a cavemeta.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    ValidationContext::new(source_ctx).validate(&manifest)?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MissingInputPolicy;

    #[test]
    fn test_parse_minimal_uses_defaults() {
        let manifest = Manifest::from_str(
            r#"
            [inputs]
            files = ["tile_map/tile_map_asset.h", "scene/transform_component.h"]
            "#,
        )
        .unwrap();

        assert_eq!(manifest.engine.root, "engine/src/engine");
        assert_eq!(manifest.engine.include_prefix, "engine");
        assert_eq!(manifest.markers.class, "CAVE_META");
        assert_eq!(manifest.markers.property, "CAVE_PROP");
        assert_eq!(manifest.output.dir, "reflection/generated");
        assert_eq!(manifest.output.suffix, ".meta.cpp");
        assert_eq!(manifest.output.namespace, "cave");
        assert_eq!(manifest.output.member_prefix, "m_");
        assert_eq!(manifest.inputs.on_missing, MissingInputPolicy::Skip);
        assert_eq!(manifest.inputs.files.len(), 2);
    }

    #[test]
    fn test_parse_full() {
        let manifest = Manifest::from_str(
            r#"
            [engine]
            root = "src"
            include_prefix = ""

            [markers]
            class = "REFLECT"
            property = "PROPERTY"

            [output]
            dir = "gen"
            suffix = ".gen.cpp"
            namespace = "game"
            runtime_include = "meta/table.h"
            member_prefix = "_"

            [inputs]
            on_missing = "abort"
            files = ["player.h"]
            "#,
        )
        .unwrap();

        assert_eq!(manifest.engine.root, "src");
        assert_eq!(manifest.markers.class, "REFLECT");
        assert_eq!(manifest.output.namespace, "game");
        assert_eq!(manifest.inputs.on_missing, MissingInputPolicy::Abort);
        assert_eq!(
            manifest.output_file_name("player.h").as_deref(),
            Some("player.gen.cpp")
        );
    }

    #[test]
    fn test_missing_inputs_section_is_parse_error() {
        let err = Manifest::from_str("[engine]\nroot = \"src\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let err = Manifest::from_str(
            r#"
            [output]
            folder = "gen"

            [inputs]
            files = []
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_policy_is_parse_error() {
        let err = Manifest::from_str(
            r#"
            [inputs]
            on_missing = "ignore"
            files = []
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = Manifest::from_file(temp.path().join("cavemeta.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
