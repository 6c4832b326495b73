//! Inspect command report data structures.

use std::path::PathBuf;

use cavemeta_scan::{ScanResult, Severity};

use super::{
    check::describe_field,
    output::{Output, Report},
};

/// Scan result of a single header.
#[derive(Debug)]
pub struct InspectReport {
    pub header: PathBuf,
    pub result: ScanResult,
}

impl Report for InspectReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Header", &self.header.display().to_string());
        let class = match &self.result.class {
            Some(class) => format!("{} (line {})", class.name, class.line),
            None => "none".to_string(),
        };
        out.key_value("Class", &class);
        out.newline();

        out.section(&format!("Fields ({})", self.result.fields.len()));
        for (i, field) in self.result.fields.iter().enumerate() {
            out.numbered_item(i + 1, &describe_field(field));
        }

        for diag in &self.result.diagnostics {
            match diag.severity {
                Severity::Warning => out.warning(&format!("line {}: {}", diag.line, diag.message)),
                Severity::Info => out.list_item(&format!("info: line {}: {}", diag.line, diag.message)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use cavemeta_scan::{MarkerSet, Scanner};

    use super::*;
    use crate::reports::output::testing::RecordingOutput;

    #[test]
    fn test_render() {
        let src = "CAVE_META(Foo)\nCAVE_PROP(editable)\nfloat m_speed;\nCAVE_PROP(x)\n";
        let report = InspectReport {
            header: PathBuf::from("foo.h"),
            result: Scanner::new(&MarkerSet::default()).scan(src, "foo.h").unwrap(),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.stdout,
            vec![
                "Header: foo.h",
                "Class: Foo (line 1)",
                "",
                "Fields (1):",
                "  1. float m_speed (editable), line 2",
            ]
        );
        assert_eq!(out.stderr.len(), 1);
        assert!(out.stderr[0].starts_with("warning: line 4: "));
    }
}
