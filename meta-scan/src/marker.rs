//! Line-anchored marker recognition.

use cavemeta_core::is_identifier;

/// Marker keywords recognized by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSet {
    class: String,
    property: String,
}

/// A marker recognized at the start of a trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker<'a> {
    /// Class marker with its identifier argument.
    Class(&'a str),
    /// Class marker whose argument is not a single identifier.
    InvalidClass(&'a str),
    /// Property marker with its raw, trimmed argument text.
    Property(&'a str),
}

impl MarkerSet {
    pub fn new(class: impl Into<String>, property: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            property: property.into(),
        }
    }

    /// Class marker keyword.
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Property marker keyword.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Recognize a marker at the start of `line`.
    ///
    /// The line is trimmed first. The class marker is tried before the
    /// property marker. Anything after the closing parenthesis is ignored.
    pub fn match_line<'a>(&self, line: &'a str) -> Option<Marker<'a>> {
        let line = line.trim();

        if let Some(arg) = marker_argument(line, &self.class) {
            let name = arg.trim();
            return Some(if is_identifier(name) {
                Marker::Class(name)
            } else {
                Marker::InvalidClass(arg)
            });
        }

        marker_argument(line, &self.property).map(|arg| Marker::Property(arg.trim()))
    }
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self::new("CAVE_META", "CAVE_PROP")
    }
}

/// Text between `keyword(` and the first `)` on the line.
///
/// Whitespace is allowed between the keyword and the opening parenthesis.
/// Returns `None` when the line does not start with the keyword, when the
/// keyword is only a prefix of a longer identifier, or when the argument is
/// not closed on the same line.
fn marker_argument<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(keyword)?.trim_start();
    let rest = rest.strip_prefix('(')?;
    let end = rest.find(')')?;
    Some(&rest[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers() -> MarkerSet {
        MarkerSet::default()
    }

    #[test]
    fn test_class_marker() {
        assert_eq!(
            markers().match_line("CAVE_META(TransformComponent)"),
            Some(Marker::Class("TransformComponent"))
        );
        assert_eq!(
            markers().match_line("    CAVE_META( Foo )   "),
            Some(Marker::Class("Foo"))
        );
        assert_eq!(
            markers().match_line("CAVE_META (Foo)"),
            Some(Marker::Class("Foo"))
        );
    }

    #[test]
    fn test_class_marker_with_qualified_name_is_invalid() {
        assert_eq!(
            markers().match_line("CAVE_META(LightComponent::Attenuation)"),
            Some(Marker::InvalidClass("LightComponent::Attenuation"))
        );
        assert_eq!(
            markers().match_line("CAVE_META()"),
            Some(Marker::InvalidClass(""))
        );
    }

    #[test]
    fn test_property_marker() {
        assert_eq!(
            markers().match_line("CAVE_PROP(editor = Scale)"),
            Some(Marker::Property("editor = Scale"))
        );
        assert_eq!(
            markers().match_line("\tCAVE_PROP()"),
            Some(Marker::Property(""))
        );
    }

    #[test]
    fn test_property_marker_stops_at_first_paren() {
        assert_eq!(
            markers().match_line("CAVE_PROP(type = guid, tooltip = \"id (uuid)\")"),
            Some(Marker::Property("type = guid, tooltip = \"id (uuid"))
        );
    }

    #[test]
    fn test_property_marker_keeps_strings_and_commas() {
        assert_eq!(
            markers().match_line(
                "CAVE_PROP(type = boolean, hint = visibility, tooltip = \"toggle layer visibility\")"
            ),
            Some(Marker::Property(
                "type = boolean, hint = visibility, tooltip = \"toggle layer visibility\""
            ))
        );
    }

    #[test]
    fn test_unclosed_marker_is_not_a_marker() {
        assert_eq!(markers().match_line("CAVE_PROP(type = i32"), None);
        assert_eq!(markers().match_line("CAVE_META(Foo"), None);
    }

    #[test]
    fn test_keyword_prefix_is_not_a_marker() {
        assert_eq!(markers().match_line("CAVE_METADATA(Foo)"), None);
        assert_eq!(markers().match_line("CAVE_PROPERTY(x)"), None);
        assert_eq!(markers().match_line("CAVE_META"), None);
    }

    #[test]
    fn test_marker_must_start_the_line() {
        assert_eq!(markers().match_line("// CAVE_PROP(hidden)"), None);
        assert_eq!(markers().match_line("int x; CAVE_PROP(hidden)"), None);
        assert_eq!(markers().match_line("#define CAVE_META(CLASS_NAME)"), None);
    }

    #[test]
    fn test_custom_keywords() {
        let set = MarkerSet::new("REFLECT", "PROPERTY");
        assert_eq!(set.match_line("REFLECT(Player)"), Some(Marker::Class("Player")));
        assert_eq!(set.match_line("PROPERTY(save)"), Some(Marker::Property("save")));
        assert_eq!(set.match_line("CAVE_PROP(save)"), None);
    }

    #[test]
    fn test_plain_lines() {
        assert_eq!(markers().match_line(""), None);
        assert_eq!(markers().match_line("Vector3f m_scale;"), None);
    }
}
