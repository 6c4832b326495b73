use serde::Serialize;

use crate::Diagnostic;

/// The class-level marker found in a header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassAnnotation {
    pub name: String,
    /// 1-based line of the marker.
    pub line: usize,
}

/// One annotated field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRecord {
    /// Tokens before the field name joined by single spaces; may be empty.
    pub declared_type: String,
    pub field_name: String,
    /// Raw property marker argument, forwarded verbatim.
    pub metadata: String,
    /// 1-based line of the property marker.
    pub line: usize,
}

/// Everything extracted from one header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    pub class: Option<ClassAnnotation>,
    /// Fields in marker discovery order.
    pub fields: Vec<FieldRecord>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ScanResult {
    /// Name of the owning class, if a class marker was found.
    pub fn class_name(&self) -> Option<&str> {
        self.class.as_ref().map(|c| c.name.as_str())
    }

    /// Whether the header annotated any fields.
    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }

    /// Warning diagnostics only.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ScanResult {
        ScanResult {
            class: Some(ClassAnnotation {
                name: "Foo".into(),
                line: 1,
            }),
            fields: vec![FieldRecord {
                declared_type: "float".into(),
                field_name: "m_speed".into(),
                metadata: "editable".into(),
                line: 2,
            }],
            diagnostics: vec![Diagnostic::warning(4, "dangling")],
        }
    }

    #[test]
    fn test_accessors() {
        let result = sample();
        assert_eq!(result.class_name(), Some("Foo"));
        assert!(result.has_fields());
        assert_eq!(result.warnings().count(), 1);
        assert_eq!(ScanResult::default().class_name(), None);
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["class"]["name"], "Foo");
        assert_eq!(json["fields"][0]["field_name"], "m_speed");
        assert_eq!(json["fields"][0]["declared_type"], "float");
        assert_eq!(json["fields"][0]["metadata"], "editable");
        assert_eq!(json["diagnostics"][0]["severity"], "warning");
    }
}
