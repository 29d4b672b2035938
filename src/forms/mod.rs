// src/forms/mod.rs
pub mod contact;
pub mod inquiry;
pub mod listing;
pub mod submit;

pub use contact::ContactForm;
pub use inquiry::InquiryForm;
pub use listing::ListingForm;
pub use submit::SubmissionStub;

use std::collections::{BTreeMap, HashMap};

/// Decoded `application/x-www-form-urlencoded` pairs, in body order.
/// Repeated keys (checkbox groups) are kept.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl FormFields {
    pub fn parse(body: &[u8]) -> Self {
        Self {
            pairs: url::form_urlencoded::parse(body).into_owned().collect(),
        }
    }

    pub fn from_query(query: Option<&str>) -> Self {
        query.map(|q| Self::parse(q.as_bytes())).unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Trimmed value, empty when missing.
    pub fn text(&self, key: &str) -> String {
        self.get(key).map(|v| v.trim().to_string()).unwrap_or_default()
    }

    /// Trimmed value, `None` when missing or blank.
    pub fn optional(&self, key: &str) -> Option<String> {
        Some(self.text(key)).filter(|v| !v.is_empty())
    }

    pub fn all(&self, key: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .collect()
    }

    /// Last value wins for repeated keys.
    pub fn to_map(&self) -> HashMap<String, String> {
        self.pairs.iter().cloned().collect()
    }
}

/// Validation messages keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    /// Keeps the first message per field.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    fn require(&mut self, field: &'static str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.add(field, message);
        }
    }

    fn min_len(&mut self, field: &'static str, value: &str, min: usize, message: &str) {
        if value.trim().chars().count() < min {
            self.add(field, message);
        }
    }

    fn email(&mut self, field: &'static str, value: &str) {
        if !is_valid_email(value) {
            self.add(field, "Please enter a valid email address");
        }
    }
}

/// One '@', non-empty local part, dotted domain, no whitespace.
pub fn is_valid_email(raw: &str) -> bool {
    let e = raw.trim();
    if e.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = e.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|l| !l.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_urlencoded_with_repeats() {
        let f = FormFields::parse(b"name=Jane+Doe&amenities=Gym&amenities=Roof%20Deck&empty=");
        assert_eq!(f.get("name"), Some("Jane Doe"));
        assert_eq!(f.all("amenities"), vec!["Gym", "Roof Deck"]);
        assert_eq!(f.optional("empty"), None);
        assert_eq!(f.text("missing"), "");
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("jane.smith@nycrentals.com"));
        assert!(is_valid_email("  a@b.co "));
        assert!(!is_valid_email("jane"));
        assert!(!is_valid_email("@nycrentals.com"));
        assert!(!is_valid_email("jane@localhost"));
        assert!(!is_valid_email("jane@@x.com"));
        assert!(!is_valid_email("ja ne@x.com"));
        assert!(!is_valid_email("jane@x..com"));
    }

    #[test]
    fn first_message_per_field_wins() {
        let mut errors = FieldErrors::default();
        errors.add("email", "first");
        errors.add("email", "second");
        assert_eq!(errors.get("email"), Some("first"));
        assert_eq!(errors.len(), 1);
    }
}
