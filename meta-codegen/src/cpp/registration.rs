//! Renderable pieces of a meta file.

use cavemeta_core::{strip_member_prefix, to_snake_case};
use cavemeta_scan::FieldRecord;

use crate::builder::{CodeFragment, Renderable};

/// One `REGISTER_FIELD(...)` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationEntry {
    /// Name the runtime exposes for the field.
    pub display_name: String,
    /// Member the entry points at.
    pub field_name: String,
}

impl RegistrationEntry {
    pub fn new(field: &FieldRecord, member_prefix: &str) -> Self {
        Self {
            display_name: strip_member_prefix(&field.field_name, member_prefix).to_string(),
            field_name: field.field_name.clone(),
        }
    }
}

/// The `MetaDataTable<Class>::GetFields` specialization plus the static that
/// forces registration at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationTable {
    pub class_name: String,
    pub entries: Vec<RegistrationEntry>,
}

impl RegistrationTable {
    pub fn new(class_name: impl Into<String>, fields: &[FieldRecord], member_prefix: &str) -> Self {
        Self {
            class_name: class_name.into(),
            entries: fields
                .iter()
                .map(|f| RegistrationEntry::new(f, member_prefix))
                .collect(),
        }
    }
}

impl Renderable for RegistrationTable {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let class = &self.class_name;
        let entries = self
            .entries
            .iter()
            .map(|e| {
                CodeFragment::line(format!(
                    "REGISTER_FIELD({}, \"{}\", {}),",
                    class, e.display_name, e.field_name
                ))
            })
            .collect();

        vec![
            CodeFragment::line("template<>"),
            CodeFragment::block(
                format!("const MetaTableFields& MetaDataTable<{}>::GetFields() {{", class),
                vec![
                    CodeFragment::block(
                        "static MetaTableFields s_fields = {",
                        entries,
                        Some("};".to_string()),
                    ),
                    CodeFragment::line("return s_fields;"),
                ],
                Some("}".to_string()),
            ),
            CodeFragment::blank(),
            CodeFragment::line(format!(
                "[[maybe_unused]] static const MetaTableFields& s_{}_meta = MetaDataTable<{}>::GetFields();",
                to_snake_case(class),
                class
            )),
        ]
    }
}

/// A namespace wrapper; its body is not indented.
#[derive(Debug, Clone, PartialEq)]
pub struct Namespace {
    pub name: String,
    pub body: Vec<CodeFragment>,
}

impl Namespace {
    pub fn new(name: impl Into<String>, body: &impl Renderable) -> Self {
        Self {
            name: name.into(),
            body: body.to_fragments(),
        }
    }
}

impl Renderable for Namespace {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![
            CodeFragment::line(format!("namespace {} {{", self.name)),
            CodeFragment::blank(),
            CodeFragment::sequence(self.body.clone()),
            CodeFragment::blank(),
            CodeFragment::line(format!("}}  // namespace {}", self.name)),
        ]
    }
}
