//! Field declaration extraction.

use cavemeta_core::is_identifier;
use serde::Serialize;

/// Type and name extracted from a single-line field declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    /// Tokens before the field name joined by single spaces; may be empty.
    pub declared_type: String,
    /// The field identifier.
    pub field_name: String,
}

/// Why a declaration line could not produce a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclarationError {
    /// Nothing remained once the terminator and initializer were removed.
    Empty,
    /// The token in name position is not an identifier.
    InvalidName(String),
}

impl std::fmt::Display for DeclarationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeclarationError::Empty => write!(f, "declaration has no field name"),
            DeclarationError::InvalidName(name) => {
                write!(f, "'{}' is not a field identifier", name)
            }
        }
    }
}

impl std::error::Error for DeclarationError {}

/// Extract the declared type and field name from a declaration line.
///
/// A trailing `//` comment and one trailing `;` are removed, then the line
/// is split on whitespace. Default initializers (`= 0`, `=0`, `{0}`) cut the
/// token list, the last remaining token is the field name and the tokens
/// before it form the type. Pointer and reference sigils written against the
/// name (`char *m_name`) move to the type.
///
/// ```
/// use cavemeta_scan::parse_declaration;
///
/// let decl = parse_declaration("int m_count = 3;").unwrap();
/// assert_eq!(decl.declared_type, "int");
/// assert_eq!(decl.field_name, "m_count");
/// ```
pub fn parse_declaration(line: &str) -> Result<Declaration, DeclarationError> {
    let mut line = line.trim();
    if let Some(pos) = line.find("//") {
        line = line[..pos].trim_end();
    }
    let line = line.strip_suffix(';').unwrap_or(line).trim_end();

    let mut tokens: Vec<&str> = Vec::new();
    for token in line.split_whitespace() {
        match token.find(['=', '{']) {
            Some(0) => break,
            Some(pos) => {
                tokens.push(&token[..pos]);
                break;
            }
            None => tokens.push(token),
        }
    }

    let Some(last) = tokens.pop() else {
        return Err(DeclarationError::Empty);
    };

    let name = last.trim_start_matches(['*', '&']);
    let sigils = &last[..last.len() - name.len()];
    if !sigils.is_empty() {
        tokens.push(sigils);
    }

    if !is_identifier(name) {
        return Err(DeclarationError::InvalidName(name.to_string()));
    }

    Ok(Declaration {
        declared_type: tokens.join(" "),
        field_name: name.to_string(),
    })
}
