//! Common types shared across tools

use serde::{Deserialize, Serialize};

/// Link preview card.
///
/// Text fields default to empty; only `id` and `url` are always set.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "type")]
    pub card_type: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub provider_name: String,
}

impl Card {
    /// Fresh card for `url` with every optional field empty.
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            ..Self::default()
        }
    }
}
