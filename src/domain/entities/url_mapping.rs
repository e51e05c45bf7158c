//! Slug to original URL mapping.

/// A persisted mapping from a short slug to the URL it redirects to.
///
/// `slug` is the primary key. `original_url` is stored exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub slug: String,
    pub original_url: String,
}

impl UrlMapping {
    pub fn new(slug: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            original_url: original_url.into(),
        }
    }
}
