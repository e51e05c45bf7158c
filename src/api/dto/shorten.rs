//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::url_validator::validate_http_url;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL (absolute HTTP/HTTPS, stored verbatim).
    #[validate(
        length(min = 1, message = "URL must not be empty"),
        custom(function = "validate_http_url")
    )]
    pub url: String,
}

/// Response carrying the fully-qualified short URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub shortened_url: String,
}
