use crate::constants::content_type;
use crate::util::normalize_lower;
use indexmap::IndexSet;

pub const DEFAULT_PROTECTED_CONTENT_TYPES: [&str; 6] = [
    content_type::FORM_URLENCODED,
    content_type::MULTIPART_FORM_DATA,
    content_type::TEXT_PLAIN,
    content_type::APPLICATION_JSON,
    content_type::APPLICATION_XML,
    content_type::TEXT_XML,
];

/// Content types whose requests are subject to CSRF validation.
///
/// Entries are trimmed, lowercased and deduplicated while keeping their
/// insertion order. An empty set protects every content type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtectedContentTypes(IndexSet<String>);

impl ProtectedContentTypes {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            values
                .into_iter()
                .map(|value| normalize_lower(value.into().trim()).into_owned())
                .collect(),
        )
    }

    /// Protect every request regardless of its content type.
    pub fn all() -> Self {
        Self(IndexSet::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Whether a request with this `Content-Type` header needs validation.
    ///
    /// Parameters such as `charset` are ignored. A missing or blank header
    /// always requires validation.
    pub fn requires_protection(&self, content_type: Option<&str>) -> bool {
        let media_type = media_type(content_type.unwrap_or_default());
        if media_type.is_empty() || self.0.is_empty() {
            return true;
        }

        let media_type = normalize_lower(media_type);
        self.0
            .iter()
            .any(|protected| media_type.contains(protected.as_str()))
    }

    pub(crate) fn has_blank_entry(&self) -> bool {
        self.0.iter().any(String::is_empty)
    }
}

impl Default for ProtectedContentTypes {
    fn default() -> Self {
        Self::list(DEFAULT_PROTECTED_CONTENT_TYPES)
    }
}

fn media_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
}

#[cfg(test)]
#[path = "content_type_test.rs"]
mod content_type_test;
