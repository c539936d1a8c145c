//! Error types for content loading

use thiserror::Error;

use crate::locale::Locale;

/// Result type alias for content operations
pub type Result<T> = std::result::Result<T, ContentError>;

/// Failure to produce page content
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("No content for {slug} in locale {}", .locale.as_str())]
    Missing { locale: Locale, slug: String },

    #[error("Failed to parse {slug} ({}): {source}", .locale.as_str())]
    Parse {
        locale: Locale,
        slug: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Content file for {expected} declares slug {found}")]
    SlugMismatch { expected: String, found: String },
}
