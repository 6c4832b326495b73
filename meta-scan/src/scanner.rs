//! Line-oriented annotation scanner.

use miette::{NamedSource, SourceSpan};

use crate::{
    ClassAnnotation, Diagnostic, FieldRecord, Marker, MarkerSet, Result, ScanError, ScanResult,
    parse_declaration,
};

/// Scans header text for class and property markers.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'m> {
    markers: &'m MarkerSet,
}

/// Position of the scan relative to the markers seen so far.
#[derive(Debug)]
enum State {
    /// No class marker yet; a property marker here is malformed.
    AwaitingClass,
    /// Class known, looking for markers.
    HaveClass,
    /// A property marker was read; the next non-blank line is its declaration.
    AwaitingDeclaration { metadata: String, marker_line: usize },
}

/// One source line with its position in the file.
#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    /// 1-based line number.
    number: usize,
    /// Byte offset of the first character.
    offset: usize,
    /// Line content without the line terminator.
    text: &'a str,
}

impl Line<'_> {
    fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Span of the trimmed line content.
    fn span(&self) -> SourceSpan {
        let leading = self.text.len() - self.text.trim_start().len();
        SourceSpan::from((self.offset + leading, self.text.trim().len()))
    }
}

fn lines(src: &str) -> impl Iterator<Item = Line<'_>> {
    let mut offset = 0;
    src.split_inclusive('\n')
        .enumerate()
        .map(move |(index, raw)| {
            let line = Line {
                number: index + 1,
                offset,
                text: raw.trim_end_matches(['\n', '\r']),
            };
            offset += raw.len();
            line
        })
}

fn duplicate_class(
    src: &str,
    filename: &str,
    first: &ClassAnnotation,
    first_span: SourceSpan,
    line: Line<'_>,
    second: &str,
) -> Box<ScanError> {
    Box::new(ScanError::DuplicateClass {
        src: NamedSource::new(filename, src.to_string()),
        first_span,
        second_span: line.span(),
        first: first.name.clone(),
        second: second.to_string(),
        line: line.number,
    })
}

impl<'m> Scanner<'m> {
    pub fn new(markers: &'m MarkerSet) -> Self {
        Self { markers }
    }

    /// Scan the full text of one header.
    ///
    /// `filename` is only used to label error reports.
    pub fn scan(&self, src: &str, filename: &str) -> Result<ScanResult> {
        let mut result = ScanResult::default();
        let mut class_span: Option<SourceSpan> = None;
        let mut state = State::AwaitingClass;

        for line in lines(src) {
            state = match state {
                State::AwaitingDeclaration {
                    metadata,
                    marker_line,
                } => {
                    if line.is_blank() {
                        State::AwaitingDeclaration {
                            metadata,
                            marker_line,
                        }
                    } else {
                        if let Some(Marker::Class(name)) = self.markers.match_line(line.text)
                            && let (Some(first), Some(first_span)) = (&result.class, class_span)
                        {
                            return Err(duplicate_class(src, filename, first, first_span, line, name));
                        }
                        self.take_declaration(&mut result, line, metadata, marker_line);
                        State::HaveClass
                    }
                }
                state => match self.markers.match_line(line.text) {
                    None => state,
                    Some(Marker::InvalidClass(arg)) => {
                        result.diagnostics.push(Diagnostic::warning(
                            line.number,
                            format!(
                                "{}({}) ignored: the argument must be a single identifier",
                                self.markers.class(),
                                arg
                            ),
                        ));
                        state
                    }
                    Some(Marker::Class(name)) => {
                        if let (Some(first), Some(first_span)) = (&result.class, class_span) {
                            return Err(duplicate_class(src, filename, first, first_span, line, name));
                        }
                        result.class = Some(ClassAnnotation {
                            name: name.to_string(),
                            line: line.number,
                        });
                        class_span = Some(line.span());
                        State::HaveClass
                    }
                    Some(Marker::Property(metadata)) => {
                        if matches!(state, State::AwaitingClass) {
                            return Err(Box::new(ScanError::PropertyBeforeClass {
                                src: NamedSource::new(filename, src.to_string()),
                                span: line.span(),
                                class_marker: self.markers.class().to_string(),
                                line: line.number,
                            }));
                        }
                        State::AwaitingDeclaration {
                            metadata: metadata.to_string(),
                            marker_line: line.number,
                        }
                    }
                },
            };
        }

        match state {
            State::AwaitingDeclaration { marker_line, .. } => {
                result.diagnostics.push(Diagnostic::warning(
                    marker_line,
                    format!(
                        "{} has no declaration before end of file; marker dropped",
                        self.markers.property()
                    ),
                ));
            }
            State::HaveClass if !result.has_fields() => {
                if let Some(class) = &result.class {
                    result.diagnostics.push(Diagnostic::info(
                        class.line,
                        format!("class '{}' has no property markers", class.name),
                    ));
                }
            }
            _ => {}
        }

        Ok(result)
    }

    /// Consume `line` as the declaration of the property marker on `marker_line`.
    fn take_declaration(
        &self,
        result: &mut ScanResult,
        line: Line<'_>,
        metadata: String,
        marker_line: usize,
    ) {
        if self.markers.match_line(line.text).is_some() {
            result.diagnostics.push(Diagnostic::warning(
                line.number,
                format!(
                    "{} on line {} is followed by another marker instead of a field; both are dropped",
                    self.markers.property(),
                    marker_line
                ),
            ));
            return;
        }

        match parse_declaration(line.text) {
            Ok(decl) => result.fields.push(FieldRecord {
                declared_type: decl.declared_type,
                field_name: decl.field_name,
                metadata,
                line: marker_line,
            }),
            Err(e) => result.diagnostics.push(Diagnostic::warning(
                line.number,
                format!(
                    "{} on line {} dropped: {}",
                    self.markers.property(),
                    marker_line,
                    e
                ),
            )),
        }
    }
}
