//! Snapshot tests for generated meta files.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::path::PathBuf;

use cavemeta_codegen::{EmitSettings, MetaFile};
use cavemeta_core::GeneratedFile;
use cavemeta_scan::{MarkerSet, Scanner};

/// Scan a header and render its meta file.
fn render(settings: &EmitSettings, input: &str, header: &str) -> String {
    let scan = Scanner::new(&MarkerSet::default())
        .scan(header, input)
        .expect("header should scan");
    MetaFile::new(settings, input, &scan)
        .expect("header should declare a class")
        .render()
}

#[test]
fn test_foo_scenario() {
    let content = render(
        &EmitSettings::default(),
        "foo.h",
        r#"
class Foo {
    CAVE_META(Foo)

    CAVE_PROP(editable)
    float m_speed;

    CAVE_PROP(hidden)
    int m_count = 0;
};
"#,
    );

    insta::assert_snapshot!("foo_scenario", content);
}

#[test]
fn test_transform_component() {
    let content = render(
        &EmitSettings::default(),
        "scene/transform_component.h",
        r#"#pragma once
#include "scene_component_base.h"

namespace cave {

class TransformComponent : public ComponentFlagBase {
    CAVE_META(TransformComponent)

    CAVE_PROP(editor = Scale)
    Vector3f m_scale;

    CAVE_PROP(editor = Translation)
    Vector3f m_translation;

    CAVE_PROP(editor = Rotation)
    Vector4f m_rotation;

private:
    // Non-serialized attributes
    Matrix4x4f m_world_matrix;

public:
    TransformComponent();
};

}  // namespace cave
"#,
    );

    insta::assert_snapshot!("transform_component", content);
}

#[test]
fn test_empty_metadata_and_initializers() {
    let content = render(
        &EmitSettings::default(),
        "scene/collider_component.h",
        r#"
class ColliderComponent {
    CAVE_META(ColliderComponent)

    CAVE_PROP()
    Shape m_shape;

    CAVE_PROP()
    uint32_t m_flags = None;

    CAVE_PROP()
    uint64_t m_category = 0;

    CAVE_PROP()
    uint64_t m_mask = 0;
};
"#,
    );

    insta::assert_snapshot!("collider_component", content);
}

#[test]
fn test_custom_settings() {
    let settings = EmitSettings {
        namespace: "game".to_string(),
        runtime_include: "reflect/meta.h".to_string(),
        include_prefix: String::new(),
        member_prefix: String::new(),
        output_dir: PathBuf::from("gen"),
        suffix: ".gen.cpp".to_string(),
        class_marker: "CAVE_META".to_string(),
    };
    let content = render(
        &settings,
        "ui/ui_root.h",
        r#"
struct UIRoot {
    CAVE_META(UIRoot)
    CAVE_PROP(editable)
    bool m_visible = true;
    CAVE_PROP(hidden)
    m_count;
};
"#,
    );

    insta::assert_snapshot!("custom_settings", content);
}
