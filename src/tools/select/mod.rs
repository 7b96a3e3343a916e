//! URL Selector


use once_cell::sync::Lazy;
use regex::Regex;

static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[a-zA-Z0-9./?=_-]+").expect("valid url regex"));

/// Select every link-looking substring in `text`, in order of appearance.
pub fn select_urls(text: &str) -> Vec<&str> {
    URL_REGEX.find_iter(text).map(|m| m.as_str()).collect()
}

/// Select the last link in `text`.
///
/// Shared links usually close a message, so the last match wins over the first.
/// Returns `None` when the text holds no link at all.
pub fn select_last_url(text: &str) -> Option<&str> {
    URL_REGEX.find_iter(text).last().map(|m| m.as_str())
}
