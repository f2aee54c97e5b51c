//! Named character classes
//!
//! Maps POSIX-style class names (the text between `[:` and `:]`) to the
//! pattern that generates their characters. Range entries go through the
//! range expander; literal entries are taken character by character.
//!
//! The two bare tokens `A-Z` and `a-z` are also keys so that they expand
//! like `upper` and `lower` instead of as three-character literals.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// How a named class produces its characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassSource {
    /// One or more `start-end` pairs, expanded by [`crate::range::expand_range`]
    Range(&'static str),
    /// A fixed string, each character standing for itself
    Literal(&'static str),
}

static NAMED_CLASSES: Lazy<HashMap<&'static str, ClassSource>> = Lazy::new(|| {
    HashMap::from([
        ("alnum", ClassSource::Range("a-zA-Z0-9")),
        ("alpha", ClassSource::Range("a-zA-Z")),
        ("blank", ClassSource::Literal(" \t")),
        ("cntrl", ClassSource::Range("\x00-\x1F\x7F-\x7F")),
        ("digit", ClassSource::Range("0-9")),
        ("lower", ClassSource::Range("a-z")),
        ("print", ClassSource::Range(" -~")),
        ("punct", ClassSource::Literal(r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##)),
        ("space", ClassSource::Range("\t-\r - ")),
        ("special", ClassSource::Literal(r#"!@#$%^&*()-=_+[]{}|;:'",.<>?/"#)),
        ("upper", ClassSource::Range("A-Z")),
        ("A-Z", ClassSource::Range("A-Z")),
        ("a-z", ClassSource::Range("a-z")),
    ])
});

/// Look up a class by name. Returns `None` for unknown names.
pub fn lookup(name: &str) -> Option<ClassSource> {
    NAMED_CLASSES.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_classes() {
        assert_eq!(lookup("digit"), Some(ClassSource::Range("0-9")));
        assert_eq!(lookup("blank"), Some(ClassSource::Literal(" \t")));
        assert_eq!(lookup("A-Z"), lookup("upper"));
        assert_eq!(lookup("a-z"), lookup("lower"));
    }

    #[test]
    fn test_lookup_unknown_class() {
        assert_eq!(lookup("bogus"), None);
        // Case matters
        assert_eq!(lookup("DIGIT"), None);
        // rune ranges are outside the Latin range and not supported
        assert_eq!(lookup("rune"), None);
    }

    #[test]
    fn test_punct_and_special_are_literals() {
        assert!(matches!(lookup("punct"), Some(ClassSource::Literal(_))));
        assert!(matches!(lookup("special"), Some(ClassSource::Literal(_))));
    }
}
