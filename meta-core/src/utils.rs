//! Shared string utilities for scanning and code generation.

use std::path::Path;

/// Convert a string to snake_case (e.g., "TransformComponent" -> "transform_component")
///
/// Runs of capitals stay together, so "UIRoot" becomes "ui_root".
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                result.push('_');
            }
        }
        result.extend(c.to_lowercase());
    }
    result.replace('-', "_")
}

/// Strip a conventional member prefix from a field name (e.g., "m_speed" -> "speed").
///
/// The name is returned unchanged when it does not carry the prefix or when
/// nothing would remain after stripping it.
pub fn strip_member_prefix<'a>(name: &'a str, prefix: &str) -> &'a str {
    match name.strip_prefix(prefix) {
        Some(rest) if !prefix.is_empty() && !rest.is_empty() => rest,
        _ => name,
    }
}

/// Name of the file generated for a header, e.g. `("scene/camera.h", ".meta.cpp")` -> `"camera.meta.cpp"`.
///
/// Returns `None` when the header path has no usable base name.
pub fn generated_file_name(header: &str, suffix: &str) -> Option<String> {
    let base = header.rsplit(['/', '\\']).next()?;
    let stem = Path::new(base).file_stem()?.to_str()?;
    Some(format!("{}{}", stem, suffix))
}

/// Include path of a header as seen from generated code, always with `/` separators.
pub fn include_path(prefix: &str, header: &str) -> String {
    let header = header.replace('\\', "/");
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        header
    } else {
        format!("{}/{}", prefix, header)
    }
}

/// Check whether `s` is a C-style identifier (`[A-Za-z_][A-Za-z0-9_]*`).
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("Foo"), "foo");
        assert_eq!(to_snake_case("TransformComponent"), "transform_component");
        assert_eq!(to_snake_case("TileMapAsset"), "tile_map_asset");
        assert_eq!(to_snake_case("UIRoot"), "ui_root");
        assert_eq!(to_snake_case("Vector3Field"), "vector3_field");
        assert_eq!(to_snake_case("hello-world"), "hello_world");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_strip_member_prefix() {
        assert_eq!(strip_member_prefix("m_speed", "m_"), "speed");
        assert_eq!(strip_member_prefix("speed", "m_"), "speed");
        assert_eq!(strip_member_prefix("m_", "m_"), "m_");
        assert_eq!(strip_member_prefix("mm_speed", "m_"), "mm_speed");
        assert_eq!(strip_member_prefix("m_speed", ""), "m_speed");
    }

    #[test]
    fn test_generated_file_name() {
        assert_eq!(
            generated_file_name("scene/transform_component.h", ".meta.cpp").as_deref(),
            Some("transform_component.meta.cpp")
        );
        assert_eq!(
            generated_file_name("camera.hpp", ".gen.cpp").as_deref(),
            Some("camera.gen.cpp")
        );
        assert_eq!(
            generated_file_name("scene\\camera.h", ".meta.cpp").as_deref(),
            Some("camera.meta.cpp")
        );
        assert_eq!(generated_file_name("", ".meta.cpp"), None);
        assert_eq!(generated_file_name("scene/", ".meta.cpp"), None);
    }

    #[test]
    fn test_include_path() {
        assert_eq!(include_path("engine", "scene/light.h"), "engine/scene/light.h");
        assert_eq!(include_path("engine/", "scene\\light.h"), "engine/scene/light.h");
        assert_eq!(include_path("", "scene/light.h"), "scene/light.h");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("Foo"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("m_health2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2d"));
        assert!(!is_identifier("Foo::Bar"));
        assert!(!is_identifier("m_data[4]"));
    }
}
