//! Validation of a parsed manifest against its source text.

use std::{collections::HashMap, path::Path};

use miette::SourceSpan;

use super::Manifest;
use crate::{Result, error::SourceContext};

/// Validation context that carries source information for error spans.
#[derive(Debug, Clone)]
pub(crate) struct ValidationContext {
    source: SourceContext,
}

impl ValidationContext {
    pub fn new(source: SourceContext) -> Self {
        Self { source }
    }

    /// Validate every section of the manifest.
    pub fn validate(&self, manifest: &Manifest) -> Result<()> {
        self.validate_identifier(&manifest.markers.class, "class marker")?;
        self.validate_identifier(&manifest.markers.property, "property marker")?;
        if manifest.markers.class == manifest.markers.property {
            return Err(self.source.validation_error(
                "class and property markers must differ",
                find_value_span(self.source.src(), &manifest.markers.property, 1),
            ));
        }

        self.validate_identifier(&manifest.output.namespace, "namespace")?;
        if is_cpp_keyword(&manifest.output.namespace) {
            return Err(self.source.invalid_identifier_error(
                &manifest.output.namespace,
                "namespace",
                "name is a C++ keyword",
                find_value_span(self.source.src(), &manifest.output.namespace, 0),
            ));
        }

        if manifest.output.suffix.is_empty() {
            return Err(self
                .source
                .validation_error("output suffix cannot be empty", None));
        }

        self.validate_inputs(manifest)
    }

    fn validate_identifier(&self, name: &str, kind: &str) -> Result<()> {
        if let Some(reason) = identifier_error(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                kind,
                reason,
                find_value_span(self.source.src(), name, 0),
            ));
        }
        Ok(())
    }

    fn validate_inputs(&self, manifest: &Manifest) -> Result<()> {
        let src = self.source.src();
        let mut seen: HashMap<String, &str> = HashMap::new();
        let mut occurrences: HashMap<&str, usize> = HashMap::new();

        for input in &manifest.inputs.files {
            let nth = occurrences.entry(input.as_str()).or_insert(0);
            let span = find_value_span(src, input, *nth);
            *nth += 1;

            if input.trim().is_empty() {
                return Err(self.source.validation_error("input path cannot be empty", span));
            }
            if Path::new(input).is_absolute() {
                return Err(self.source.validation_error(
                    format!("input '{}' must be relative to the engine root", input),
                    span,
                ));
            }

            let Some(output) = manifest.output_file_name(input) else {
                return Err(self.source.validation_error(
                    format!("input '{}' has no file name", input),
                    span,
                ));
            };

            if let Some(first) = seen.get(&output) {
                return Err(self.source.duplicate_output_error(
                    output,
                    *first,
                    input.as_str(),
                    find_value_span(src, first, 0),
                    span,
                ));
            }
            seen.insert(output, input.as_str());
        }
        Ok(())
    }
}

/// C++ keywords that cannot name a namespace
pub(crate) const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "asm", "auto", "bool", "break", "case", "catch", "char",
    "class", "const", "constexpr", "consteval", "constinit", "const_cast", "continue",
    "decltype", "default", "delete", "do", "double", "dynamic_cast", "else", "enum", "explicit",
    "export", "extern", "false", "float", "for", "friend", "goto", "if", "inline", "int",
    "long", "mutable", "namespace", "new", "noexcept", "not", "nullptr", "operator", "or",
    "private", "protected", "public", "register", "reinterpret_cast", "requires", "return",
    "short", "signed", "sizeof", "static", "static_assert", "static_cast", "struct", "switch",
    "template", "this", "thread_local", "throw", "true", "try", "typedef", "typeid", "typename",
    "union", "unsigned", "using", "virtual", "void", "volatile", "while", "xor",
];

/// Check if a name is a C++ keyword
pub(crate) fn is_cpp_keyword(name: &str) -> bool {
    CPP_KEYWORDS.contains(&name)
}

/// Validate that a name is a C identifier.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn identifier_error(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}

/// Find the span of the `nth` quoted occurrence of `value` in the TOML source.
///
/// Only quoted strings are considered, so the span points inside the quotes.
pub(crate) fn find_value_span(src: &str, value: &str, nth: usize) -> Option<SourceSpan> {
    if value.is_empty() {
        return None;
    }

    let mut hits: Vec<usize> = ['"', '\'']
        .iter()
        .flat_map(|quote| {
            let pattern = format!("{quote}{value}{quote}");
            src.match_indices(&pattern)
                .map(|(pos, _)| pos + 1)
                .collect::<Vec<_>>()
        })
        .collect();
    hits.sort_unstable();

    hits.get(nth)
        .map(|&start| SourceSpan::from((start, value.len())))
}
