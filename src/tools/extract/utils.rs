use scraper::Html;

use crate::selectors::{META_DESCRIPTION_SELECTOR, META_SELECTOR, TITLE_SELECTOR};
use crate::tools::types::Card;

/// Walk every `<meta>` and assign the OpenGraph fields, last write wins.
pub(super) fn apply_open_graph(doc: &Html, card: &mut Card) {
    for el in doc.select(&META_SELECTOR) {
        let property = el.value().attr("property").unwrap_or_default();
        let content = el.value().attr("content").unwrap_or_default();

        match property {
            "og:title" => card.title = content.to_string(),
            "og:description" => card.description = content.to_string(),
            "og:type" => card.card_type = content.to_string(),
            "og:image" => card.image = content.to_string(),
            "og:url" if !content.is_empty() => card.url = content.to_string(),
            "og:site_name" => card.provider_name = content.to_string(),
            _ => {}
        }
    }
}

/// Text of the `<title>` element(s), untrimmed.
pub(super) fn title_text(doc: &Html) -> String {
    doc.select(&TITLE_SELECTOR)
        .flat_map(|el| el.text())
        .collect()
}

/// `content` of the first `<meta name="description">`, present even if empty.
pub(super) fn meta_description(doc: &Html) -> Option<&str> {
    doc.select(&META_DESCRIPTION_SELECTOR)
        .next()
        .and_then(|el| el.value().attr("content"))
}
