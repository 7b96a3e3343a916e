//! URL Validator


use crate::error::{PreviewError, Result};
use url::Url;

const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

/// Parse `candidate` as an absolute http(s) URL.
///
/// Relative references fail to parse, opaque forms such as
/// `javascript:alert(1)` fail the scheme check, and anything left without a
/// host is rejected as invalid. The host must be written right after
/// `scheme://`: forms like `http:///evil.example/x` or `http:evil.example`
/// are rejected even though lenient parsing would pull a host out of them.
pub fn validate_url(candidate: &str) -> Result<Url> {
    let parsed = Url::parse(candidate)?;

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(PreviewError::UnsupportedScheme(parsed.scheme().to_string()));
    }

    if !has_written_authority(candidate, parsed.scheme()) {
        return Err(PreviewError::InvalidUrl(format!("missing host in {candidate}")));
    }

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(parsed),
        _ => Err(PreviewError::InvalidUrl(format!("missing host in {candidate}"))),
    }
}

/// `scheme:` must be followed by `//` and a host character in the raw text.
fn has_written_authority(candidate: &str, scheme: &str) -> bool {
    candidate
        .trim_matches(|c: char| c <= ' ')
        .get(scheme.len() + 1..)
        .and_then(|rest| rest.strip_prefix("//"))
        .and_then(|authority| authority.chars().next())
        .is_some_and(|c| c != '/' && c != '\\')
}
