//! Shortcode attribute maps as handed over by a host-side shortcode parser.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Spellings treated as affirmative when an attribute is read as a flag.
const TRUTHY_VALUES: [&str; 4] = ["true", "1", "yes", "on"];

/// Loosely-typed attribute map. Keys are trimmed and ASCII-lowercased the
/// way shortcode parsers normalise them; later duplicates win.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortcodeAttrs {
    entries: BTreeMap<String, String>,
}

impl ShortcodeAttrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut attrs = Self::new();
        for (key, value) in pairs {
            attrs.insert(key.as_ref(), value);
        }
        attrs
    }

    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.entries.insert(normalise_key(key), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Value for `key`, or `default` when the attribute is absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Value for `key` when present and non-empty.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    /// Read `key` as a flag. Absent attributes take `default`; present
    /// ones are matched against the affirmative spellings.
    pub fn flag(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(value) => is_truthy(value),
            None => default,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for ShortcodeAttrs
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

fn normalise_key(key: &str) -> String {
    key.trim().to_ascii_lowercase()
}

/// Truthiness rule shared by flag-valued attributes.
pub fn is_truthy(value: &str) -> bool {
    TRUTHY_VALUES
        .iter()
        .any(|candidate| value.eq_ignore_ascii_case(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_normalised() {
        let attrs = ShortcodeAttrs::from_pairs([(" Type ", "button"), ("URL", "/fragment")]);
        assert_eq!(attrs.get("type"), Some("button"));
        assert_eq!(attrs.get("url"), Some("/fragment"));
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn later_duplicates_win() {
        let attrs = ShortcodeAttrs::from_pairs([("size", "lg"), ("SIZE", "xl")]);
        assert_eq!(attrs.get("size"), Some("xl"));
    }

    #[test]
    fn non_empty_skips_blank_values() {
        let attrs = ShortcodeAttrs::from_pairs([("url", ""), ("id", "login-dialog")]);
        assert_eq!(attrs.non_empty("url"), None);
        assert_eq!(attrs.non_empty("id"), Some("login-dialog"));
        assert_eq!(attrs.non_empty("missing"), None);
    }

    #[test]
    fn flags_follow_truthy_spellings() {
        let attrs = ShortcodeAttrs::from_pairs([
            ("form", "TRUE"),
            ("swap", "false"),
            ("sticky", "1"),
            ("inline", "nope"),
        ]);
        assert!(attrs.flag("form", false));
        assert!(!attrs.flag("swap", true));
        assert!(attrs.flag("sticky", false));
        assert!(!attrs.flag("inline", true));
        assert!(attrs.flag("absent", true));
        assert!(!attrs.flag("absent", false));
    }
}
