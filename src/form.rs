// src/form.rs

//! Ordered form field collection and url-encoding.
//!
//! `FormData` is deliberately an ordered list of pairs, not a map:
//! - entry order is preserved for encoding
//! - keys may repeat (multi-value fields)
//!
//! Both properties are observable on the wire, so a map would lose
//! information the remote endpoint is allowed to care about.

use url::form_urlencoded;

/// Ordered key/value string fields captured from a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Repeated names are kept as separate entries.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encode as an `application/x-www-form-urlencoded` payload.
    ///
    /// Pairs are joined with `&`, keys to values with `=`, reserved
    /// characters percent-encoded and spaces written as `+` (the WHATWG
    /// form-urlencoded serialization). Entry order is preserved and
    /// repeated keys are emitted as separate segments.
    pub fn encode(&self) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.fields {
            ser.append_pair(name, value);
        }
        ser.finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_pairs_in_order_with_percent_encoding() {
        let form: FormData = [("name", "Alice"), ("email", "alice@example.com")]
            .into_iter()
            .collect();

        assert_eq!(form.encode(), "name=Alice&email=alice%40example.com");
    }

    #[test]
    fn repeated_keys_stay_separate_and_ordered() {
        let mut form = FormData::new();
        form.push("tag", "a");
        form.push("tag", "b");

        assert_eq!(form.encode(), "tag=a&tag=b");
    }

    #[test]
    fn spaces_become_plus() {
        let mut form = FormData::new();
        form.push("message", "hello world");

        assert_eq!(form.encode(), "message=hello+world");
    }

    #[test]
    fn empty_form_encodes_to_empty_body() {
        assert_eq!(FormData::new().encode(), "");
        assert!(FormData::new().is_empty());
    }

    #[test]
    fn iteration_order_matches_insertion() {
        let mut form = FormData::new();
        form.push("b", "2");
        form.push("a", "1");

        let seen: Vec<_> = form.iter().collect();
        assert_eq!(seen, vec![("b", "2"), ("a", "1")]);
    }
}
