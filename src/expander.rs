//! Spec expansion
//!
//! Turns a command-line character spec into the ordered characters it stands
//! for. Three shapes are recognised:
//!
//! - the bare tokens `A-Z` and `a-z`
//! - a bracket class such as `[:digit:]`
//! - anything else, taken literally one character per element
//!
//! Expansion never fails. An unknown class name falls back to the name's own
//! characters, so `[:bogus:]` expands to `b`, `o`, `g`, `u`, `s`.

use crate::class_table::{self, ClassSource};
use crate::range::{expand_range, RangeBoundaries};
use std::fmt;

/// The concrete characters a spec resolves to, in order
///
/// Order matters for translation, where positions pair up between the
/// `from` and `to` sets. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedSet {
    chars: Vec<char>,
}

impl ExpandedSet {
    /// Build a set from range output, one character per byte value
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            chars: bytes.iter().map(|&b| char::from(b)).collect(),
        }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Character at `index`, wrapping around the end of the set
    pub fn cyclic(&self, index: usize) -> Option<char> {
        if self.chars.is_empty() {
            None
        } else {
            Some(self.chars[index % self.chars.len()])
        }
    }
}

impl From<&str> for ExpandedSet {
    fn from(literal: &str) -> Self {
        literal.chars().collect()
    }
}

impl FromIterator<char> for ExpandedSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ExpandedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Expands specs under a fixed range boundary policy
#[derive(Debug, Clone, Copy, Default)]
pub struct Expander {
    boundaries: RangeBoundaries,
}

impl Expander {
    pub fn new(boundaries: RangeBoundaries) -> Self {
        Self { boundaries }
    }

    pub fn boundaries(&self) -> RangeBoundaries {
        self.boundaries
    }

    /// Expand a spec into its characters
    pub fn expand(&self, spec: &str) -> ExpandedSet {
        let expanded = if spec == "A-Z" || spec == "a-z" {
            self.expand_class(spec)
        } else if let Some(class) = spec.strip_prefix("[:").and_then(|s| s.strip_suffix(":]")) {
            self.expand_class(class)
        } else {
            ExpandedSet::from(spec)
        };

        tracing::trace!(spec, size = expanded.len(), "expanded spec");
        expanded
    }

    /// Expand a class by name, without the surrounding `[:` `:]`
    pub fn expand_class(&self, name: &str) -> ExpandedSet {
        match class_table::lookup(name) {
            Some(ClassSource::Range(pattern)) => {
                ExpandedSet::from_bytes(&expand_range(pattern, self.boundaries))
            }
            Some(ClassSource::Literal(chars)) => ExpandedSet::from(chars),
            None => {
                tracing::debug!(class = name, "unknown character class, using it literally");
                ExpandedSet::from(name)
            }
        }
    }
}

/// Expand a spec with the default range boundary policy
pub fn expand(spec: &str) -> ExpandedSet {
    Expander::default().expand(spec)
}
