//! Validation of URLs submitted for shortening.

use url::Url;
use validator::ValidationError;

/// Accepts only absolute `http` and `https` URLs with a host.
///
/// The URL is validated, never rewritten: what the client sent is what gets
/// stored, compared and sent back in `Location`. Input that the parser would
/// silently alter (control characters, surrounding whitespace) is rejected.
///
/// # Errors
///
/// Returns a [`ValidationError`] with code `invalid_url` for unparsable input
/// and `unsupported_scheme` for anything other than HTTP(S), which rejects
/// `javascript:`, `data:`, `file:` and friends.
pub fn validate_http_url(input: &str) -> Result<(), ValidationError> {
    if input.chars().any(char::is_control) || input.trim() != input {
        return Err(ValidationError::new("invalid_url").with_message(
            "URL must not contain control characters or surrounding whitespace".into(),
        ));
    }

    let url = Url::parse(input).map_err(|_| {
        ValidationError::new("invalid_url").with_message("Invalid URL format".into())
    })?;

    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(()),
        "http" | "https" => Err(ValidationError::new("invalid_url")
            .with_message("URL must include a host".into())),
        _ => Err(ValidationError::new("unsupported_scheme")
            .with_message("Only HTTP and HTTPS URLs are allowed".into())),
    }
}
