//! Word tables for QML syntax classification.
//!
//! Three fixed, case-sensitive lists plus the separator set:
//! JavaScript reserved words, QML structural keywords, and the
//! `property <type>` declaration phrases. Keyword lookups are
//! length-bucketed so non-keyword identifiers are rejected after a single
//! length comparison in most cases.

/// The `property <type>` declaration phrases, in match order.
///
/// `property variant` is listed before `property var` so the longer phrase
/// wins when both prefixes apply.
pub const PROPERTY_PHRASES: [&str; 19] = [
    "property action",
    "property bool",
    "property color",
    "property date",
    "property double",
    "property enumeration",
    "property font",
    "property int",
    "property list",
    "property point",
    "property real",
    "property rect",
    "property size",
    "property string",
    "property time",
    "property url",
    "property variant",
    "property var",
    "property vector3d",
];

/// Check whether a byte delimits words.
///
/// Whitespace plus the punctuation of the grammar:
/// `; : , . { } [ ] ( ) =`.
#[inline]
pub fn is_separator(byte: u8) -> bool {
    matches!(
        byte,
        b' ' | b'\t'
            | b';'
            | b':'
            | b','
            | b'.'
            | b'{'
            | b'}'
            | b'['
            | b']'
            | b'('
            | b')'
            | b'='
    )
}

/// Check whether `text` is a JavaScript reserved word.
pub fn is_js_keyword(text: &str) -> bool {
    match text.len() {
        2 => matches!(text, "do" | "if" | "in"),
        3 => matches!(text, "for" | "new" | "try" | "var"),
        4 => matches!(text, "case" | "else" | "this" | "void" | "with"),
        5 => matches!(text, "break" | "catch" | "throw" | "while"),
        6 => matches!(text, "delete" | "return" | "switch" | "typeof"),
        7 => matches!(text, "default" | "finally"),
        8 => matches!(text, "continue" | "debugger" | "function"),
        10 => text == "instanceof",
        _ => false,
    }
}

/// Check whether `text` is a QML structural keyword.
pub fn is_keyword(text: &str) -> bool {
    match text.len() {
        2 => text == "on",
        5 => text == "alias",
        6 => matches!(text, "import" | "signal"),
        8 => matches!(text, "property" | "readonly"),
        _ => false,
    }
}

/// Check whether `text` is exactly one of the `property <type>` phrases.
pub fn is_property_phrase(text: &str) -> bool {
    text.len() >= 12 && PROPERTY_PHRASES.contains(&text)
}

/// Match a `property <type>` phrase at the start of `rest`.
///
/// Returns the phrase length when `rest` begins with a phrase followed by a
/// word boundary (end of text, space, CR, or LF), so `property intensity`
/// is not mistaken for `property int`. First list match wins.
pub fn property_phrase_len(rest: &str) -> Option<u32> {
    if !rest.starts_with("property ") {
        return None;
    }
    for phrase in &PROPERTY_PHRASES {
        if let Some(following) = rest.strip_prefix(phrase) {
            match following.bytes().next() {
                None | Some(b' ' | b'\r' | b'\n') => {
                    return Some(saturating_u32(phrase.len()));
                }
                _ => {}
            }
        }
    }
    None
}

/// Narrow a phrase length to `u32`; phrases are all under 32 bytes.
#[inline]
fn saturating_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_cover_grammar_punctuation() {
        for byte in b" \t;:,.{}[]()=" {
            assert!(is_separator(*byte), "{} should separate", *byte as char);
        }
        assert!(!is_separator(b'a'));
        assert!(!is_separator(b'"'));
        assert!(!is_separator(b'/'));
        assert!(!is_separator(b'\n'));
    }

    #[test]
    fn js_keywords_match_exactly() {
        for word in [
            "break",
            "case",
            "catch",
            "continue",
            "debugger",
            "default",
            "delete",
            "do",
            "else",
            "finally",
            "for",
            "function",
            "if",
            "in",
            "instanceof",
            "new",
            "return",
            "switch",
            "this",
            "throw",
            "try",
            "typeof",
            "var",
            "void",
            "while",
            "with",
        ] {
            assert!(is_js_keyword(word), "{word} should be a JS keyword");
        }
        assert!(!is_js_keyword("If"));
        assert!(!is_js_keyword("property"));
        assert!(!is_js_keyword(""));
    }

    #[test]
    fn structural_keywords_match_exactly() {
        for word in ["property", "alias", "signal", "readonly", "import", "on"] {
            assert!(is_keyword(word), "{word} should be a keyword");
        }
        assert!(!is_keyword("onclick"));
        assert!(!is_keyword("signals"));
    }

    #[test]
    fn phrase_len_requires_boundary() {
        assert_eq!(property_phrase_len("property int"), Some(12));
        assert_eq!(property_phrase_len("property int "), Some(12));
        assert_eq!(property_phrase_len("property int\nx"), Some(12));
        assert_eq!(property_phrase_len("property intensity"), None);
        assert_eq!(property_phrase_len("propertyint"), None);
        assert_eq!(property_phrase_len("alias int"), None);
    }

    #[test]
    fn phrase_len_prefers_longer_variant() {
        assert_eq!(property_phrase_len("property variant x"), Some(16));
        assert_eq!(property_phrase_len("property var x"), Some(12));
    }

    #[test]
    fn exact_phrase_check() {
        assert!(is_property_phrase("property vector3d"));
        assert!(!is_property_phrase("property"));
        assert!(!is_property_phrase("property  int"));
    }
}
