mod client;
mod utils;

pub mod types;

pub use client::*;
pub use types::*;

pub(crate) use utils::parse_stream;

use crate::error::{PreviewError, Result};
use reqwest::StatusCode;
use scraper::Html;
use tracing::debug;
use url::Url;

/// Fetch `url` once and parse the body as an HTML document.
///
/// Only `200 OK` is accepted; any other status fails with its status line.
/// The response body is streamed into the parser and released on every
/// return path, including after a partial read.
///
/// # Examples
/// ```no_run
/// use linkcard::tools::fetch::{build_client, fetch_document, ClientConfig};
///
/// let client = build_client(&ClientConfig::default())?;
/// let url = url::Url::parse("https://example.com")?;
/// let doc = fetch_document(&client, &url)?;
/// println!("{}", doc.root_element().html().len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn fetch_document<C: HttpClient + ?Sized>(client: &C, url: &Url) -> Result<Html> {
    let HttpResponse { status, mut body } = client.get_stream(url)?;
    debug!(%url, %status, "fetched");

    if status != StatusCode::OK {
        return Err(PreviewError::BadStatus(status.to_string()));
    }

    parse_stream(&mut body)
}
