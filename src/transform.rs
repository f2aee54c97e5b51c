//! Line transformations
//!
//! Each operation is a pure function of one line and the expanded sets.
//! Nothing is carried from one line to the next.

use crate::expander::ExpandedSet;
use std::collections::HashSet;

/// What to do with each line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Translate,
    Delete,
    Squeeze,
}

/// Replace characters of `from` with the character at the same position in
/// `to`, reusing `to` cyclically when it is shorter.
///
/// Replacements run one position at a time over the whole line, so a
/// character written by an earlier position can be rewritten by a later one:
/// translating `ab` to `bc` turns `a` into `c`.
pub fn translate(line: &str, from: &ExpandedSet, to: &ExpandedSet) -> String {
    let mut result = line.to_string();
    let mut buf = [0u8; 4];

    for (i, &source) in from.chars().iter().enumerate() {
        let Some(target) = to.cyclic(i) else {
            break;
        };
        if source == target || !result.contains(source) {
            continue;
        }
        result = result.replace(source, target.encode_utf8(&mut buf));
    }

    result
}

/// Remove every character of `set` from `line`
pub fn delete(line: &str, set: &ExpandedSet) -> String {
    let members: HashSet<char> = set.chars().iter().copied().collect();
    line.chars().filter(|c| !members.contains(c)).collect()
}

/// Collapse runs of a repeated character into one, for characters in `set`.
///
/// Characters outside the set always pass through.
pub fn squeeze(line: &str, set: &ExpandedSet) -> String {
    let members: HashSet<char> = set.chars().iter().copied().collect();
    let mut result = String::with_capacity(line.len());
    let mut prev: Option<char> = None;

    for c in line.chars() {
        if !members.contains(&c) || prev != Some(c) {
            result.push(c);
        }
        prev = Some(c);
    }

    result
}

/// A mode together with the sets it operates on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transformer {
    Translate { from: ExpandedSet, to: ExpandedSet },
    Delete(ExpandedSet),
    Squeeze(ExpandedSet),
}

impl Transformer {
    pub fn mode(&self) -> Mode {
        match self {
            Transformer::Translate { .. } => Mode::Translate,
            Transformer::Delete(_) => Mode::Delete,
            Transformer::Squeeze(_) => Mode::Squeeze,
        }
    }

    pub fn apply(&self, line: &str) -> String {
        match self {
            Transformer::Translate { from, to } => translate(line, from, to),
            Transformer::Delete(set) => delete(line, set),
            Transformer::Squeeze(set) => squeeze(line, set),
        }
    }

    /// Whether output lines get a trailing newline.
    ///
    /// Only translation re-terminates lines; delete and squeeze output is
    /// written back to back.
    pub fn terminates_lines(&self) -> bool {
        self.mode() == Mode::Translate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(s: &str) -> ExpandedSet {
        ExpandedSet::from(s)
    }

    #[test]
    fn test_translate_basic() {
        assert_eq!(translate("hello", &set("el"), &set("ip")), "hippo");
    }

    #[test]
    fn test_translate_is_sequential() {
        // a->b first, then every b (including the new one) -> c
        assert_eq!(translate("ab", &set("ab"), &set("bc")), "cc");
        // A simultaneous mapping would give "ba"; sequential gives "aa"
        assert_eq!(translate("ab", &set("ab"), &set("ba")), "aa");
    }

    #[test]
    fn test_translate_cycles_short_target() {
        assert_eq!(translate("abcd", &set("abcd"), &set("xy")), "xyxy");
        assert_eq!(translate("abc", &set("abc"), &set("z")), "zzz");
    }

    #[test]
    fn test_translate_edge_cases() {
        assert_eq!(translate("", &set("abc"), &set("xyz")), "");
        assert_eq!(translate("hello", &set(""), &set("xyz")), "hello");
        assert_eq!(translate("hello", &set("abc"), &set("")), "hello");
        assert_eq!(translate("héllo", &set("é"), &set("e")), "hello");
    }

    #[test]
    fn test_delete() {
        assert_eq!(delete("hello world", &set("lo")), "he wrd");
        assert_eq!(delete("hello", &set("")), "hello");
        assert_eq!(delete("aaa", &set("a")), "");
        assert_eq!(delete("", &set("a")), "");
    }

    #[test]
    fn test_squeeze() {
        assert_eq!(squeeze("aaabbbccc", &set("abc")), "abc");
        assert_eq!(squeeze("aaabbbccc", &set("a")), "abbbccc");
        assert_eq!(squeeze("a  b   c", &set(" ")), "a b c");
        assert_eq!(squeeze("abab", &set("ab")), "abab");
    }

    #[test]
    fn test_squeeze_tracks_non_members() {
        // The previous character is tracked even when it is not squeezed
        assert_eq!(squeeze("xaax", &set("a")), "xax");
        assert_eq!(squeeze("\0\0a", &set("\0")), "\0a");
    }

    #[test]
    fn test_transformer_dispatch() {
        let translate = Transformer::Translate {
            from: set("el"),
            to: set("ip"),
        };
        assert_eq!(translate.mode(), Mode::Translate);
        assert_eq!(translate.apply("hello"), "hippo");
        assert!(translate.terminates_lines());

        let delete = Transformer::Delete(set("lo"));
        assert_eq!(delete.apply("hello world"), "he wrd");
        assert!(!delete.terminates_lines());

        let squeeze = Transformer::Squeeze(set("a"));
        assert_eq!(squeeze.mode(), Mode::Squeeze);
        assert_eq!(squeeze.apply("aaab"), "ab");
        assert!(!squeeze.terminates_lines());
    }
}
