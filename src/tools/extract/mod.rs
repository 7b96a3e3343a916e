//! Metadata Extractor

mod utils;

use utils::*;

use crate::tools::types::Card;
use scraper::Html;

/// Fill a [`Card`] for `link` from a parsed document.
///
/// Every `<meta property="og:*">` is applied in document order, so a later
/// tag overwrites an earlier one. An empty `og:url` never clears the link.
/// Once the walk is done, an empty title falls back to `<title>` and an empty
/// description falls back to `<meta name="description">` when that tag
/// carries a `content` attribute at all.
pub fn extract_card(doc: &Html, link: &str, id: impl Into<String>) -> Card {
    let mut card = Card::new(id, link);
    apply_open_graph(doc, &mut card);

    if card.title.is_empty() {
        card.title = title_text(doc);
    }

    if card.description.is_empty() {
        if let Some(desc) = meta_description(doc) {
            card.description = desc.to_string();
        }
    }

    card
}

/// Same as [`extract_card`] for markup already held in memory.
pub fn extract_card_from_str(html: &str, link: &str, id: impl Into<String>) -> Card {
    extract_card(&Html::parse_document(html), link, id)
}
