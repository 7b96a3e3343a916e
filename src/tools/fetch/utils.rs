use crate::error::{PreviewError, Result};
use html5ever::tendril::TendrilSink;
use scraper::Html;
use std::io::Read;

/// Parse an HTML document straight off `reader` in a single pass.
///
/// Bytes are decoded as UTF-8 (lossy) and fed to the tree builder as they
/// arrive, so the page is never held as an intermediate string.
pub(crate) fn parse_stream<R: Read>(reader: &mut R) -> Result<Html> {
    html5ever::parse_document(Html::new_document(), Default::default())
        .from_utf8()
        .read_from(reader)
        .map_err(|e| PreviewError::Parse(e.to_string()))
}
