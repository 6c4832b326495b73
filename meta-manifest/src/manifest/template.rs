/// Manifest written by `cavemeta init`.
pub const DEFAULT_MANIFEST: &str = r#"# cavemeta reflection generator configuration

[engine]
# Engine source root, relative to this file
root = "engine/src/engine"
# Prefix used when including scanned headers from generated code
include_prefix = "engine"

[markers]
class = "CAVE_META"
property = "CAVE_PROP"

[output]
# Relative to the engine root
dir = "reflection/generated"
suffix = ".meta.cpp"
namespace = "cave"
runtime_include = "engine/reflection/meta.h"
member_prefix = "m_"

[inputs]
# "skip" reports missing headers and continues, "abort" stops the run
on_missing = "skip"
files = [
    "tile_map/tile_map_asset.h",
    "scene/transform_component.h",
]
"#;
