//! End-to-end runs of the `cavemeta` binary.

use std::{
    fs,
    path::Path,
    process::{Command, Output},
};

use tempfile::TempDir;

const LIGHT: &str = "class LightComponent {\n    CAVE_META(LightComponent)\n    CAVE_PROP(type = flags)\n    uint32_t m_flags = 0;\n};\n";

fn cavemeta(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cavemeta"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run cavemeta")
}

fn project(files: &[(&str, &str)], inputs: &[&str]) -> TempDir {
    let temp = TempDir::new().unwrap();
    let list = inputs
        .iter()
        .map(|f| format!("\"{}\"", f))
        .collect::<Vec<_>>()
        .join(", ");
    fs::write(
        temp.path().join("cavemeta.toml"),
        format!("[engine]\nroot = \"src\"\n\n[inputs]\nfiles = [{}]\n", list),
    )
    .unwrap();
    for (rel, content) in files {
        let path = temp.path().join("src").join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    temp
}

#[test]
fn test_generate_writes_meta_file() {
    let temp = project(&[("scene/light.h", LIGHT)], &["scene/light.h"]);

    let output = cavemeta(temp.path(), &["generate"]);

    assert!(output.status.success());
    let generated =
        fs::read_to_string(temp.path().join("src/reflection/generated/light.meta.cpp")).unwrap();
    assert!(generated.contains("REGISTER_FIELD(LightComponent, \"flags\", m_flags),"));
}

#[test]
fn test_generate_fails_on_malformed_header() {
    let temp = project(
        &[("bad.h", "CAVE_PROP(x)\nint m_x;\n"), ("light.h", LIGHT)],
        &["bad.h", "light.h"],
    );

    let output = cavemeta(temp.path(), &["generate"]);

    assert!(!output.status.success());
    assert!(temp.path().join("src/reflection/generated/light.meta.cpp").exists());
    assert!(!temp.path().join("src/reflection/generated/bad.meta.cpp").exists());
}

#[test]
fn test_generate_strict_aborts_on_missing_input() {
    let temp = project(&[("light.h", LIGHT)], &["gone.h", "light.h"]);

    let lenient = cavemeta(temp.path(), &["generate", "--dry-run"]);
    assert!(lenient.status.success());

    let strict = cavemeta(temp.path(), &["generate", "--strict"]);
    assert!(!strict.status.success());
    assert!(!temp.path().join("src/reflection/generated/light.meta.cpp").exists());
}

#[test]
fn test_invalid_manifest_exits_non_zero() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("cavemeta.toml"),
        "[markers]\nclass = \"CAVE-META\"\n\n[inputs]\nfiles = []\n",
    )
    .unwrap();

    let output = cavemeta(temp.path(), &["check"]);

    assert!(!output.status.success());
}

#[test]
fn test_inspect_json() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("light.h"), LIGHT).unwrap();

    let output = cavemeta(temp.path(), &["inspect", "light.h", "--json"]);

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["class"]["name"], "LightComponent");
    assert_eq!(json["fields"][0]["field_name"], "m_flags");
    assert_eq!(json["fields"][0]["metadata"], "type = flags");
}

#[test]
fn test_init_does_not_overwrite_without_force() {
    let temp = TempDir::new().unwrap();
    let manifest = temp.path().join("cavemeta.toml");

    assert!(cavemeta(temp.path(), &["init"]).status.success());
    assert!(fs::read_to_string(&manifest).unwrap().contains("[inputs]"));

    fs::write(&manifest, "# mine\n").unwrap();
    assert!(cavemeta(temp.path(), &["init"]).status.success());
    assert_eq!(fs::read_to_string(&manifest).unwrap(), "# mine\n");

    assert!(cavemeta(temp.path(), &["init", "--force"]).status.success());
    assert!(fs::read_to_string(&manifest).unwrap().contains("[inputs]"));
}

#[test]
fn test_clean_removes_orphans() {
    let temp = project(&[("light.h", LIGHT)], &["light.h"]);
    assert!(cavemeta(temp.path(), &["generate"]).status.success());
    let out = temp.path().join("src/reflection/generated");
    fs::write(out.join("old.meta.cpp"), "// stale").unwrap();

    assert!(cavemeta(temp.path(), &["clean", "--dry-run"]).status.success());
    assert!(out.join("old.meta.cpp").exists());

    assert!(cavemeta(temp.path(), &["clean"]).status.success());
    assert!(!out.join("old.meta.cpp").exists());
    assert!(out.join("light.meta.cpp").exists());
}
