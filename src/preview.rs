//! Preview Pipeline
//!
//! text → candidate URL → validated URL → response body → [`Card`].

use chrono::{DateTime, Utc};
use tracing::{debug, warn};
use uuid::{NoContext, Timestamp, Uuid};

use crate::error::Result;
use crate::tools::extract::extract_card;
use crate::tools::fetch::{fetch_document, HttpClient};
use crate::tools::select::select_last_url;
use crate::tools::types::Card;
use crate::tools::validate::validate_url;

/// Source of unique, time-ordered card identifiers.
pub trait IdGenerator {
    fn id_from_time(&self, now: DateTime<Utc>) -> String;
}

/// UUIDv7 ids: millisecond timestamp prefix plus random tail.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV7Ids;

impl IdGenerator for UuidV7Ids {
    fn id_from_time(&self, now: DateTime<Utc>) -> String {
        let secs = u64::try_from(now.timestamp()).unwrap_or(0);
        let ts = Timestamp::from_unix(NoContext, secs, now.timestamp_subsec_nanos());
        Uuid::new_v7(ts).to_string()
    }
}

/// Build a preview card for the last link in `text`.
///
/// Returns `Ok(None)` when the text holds no link. Any validation, network,
/// status or parse failure is returned as an error; nothing is retried.
/// `now` only seeds the card id.
///
/// # Examples
/// ```no_run
/// use linkcard::tools::fetch::{build_client, ClientConfig};
///
/// let client = build_client(&ClientConfig::default())?;
/// match linkcard::fetch_preview(&client, "look https://example.com", chrono::Utc::now()) {
///     Ok(Some(card)) => println!("{}", card.title),
///     Ok(None) => println!("no link"),
///     Err(e) => eprintln!("preview unavailable: {e}"),
/// }
/// # Ok::<(), linkcard::PreviewError>(())
/// ```
pub fn fetch_preview<C: HttpClient + ?Sized>(
    client: &C,
    text: &str,
    now: DateTime<Utc>,
) -> Result<Option<Card>> {
    fetch_preview_with(client, &UuidV7Ids, text, now)
}

/// [`fetch_preview`] with an explicit id generator.
pub fn fetch_preview_with<C, I>(
    client: &C,
    ids: &I,
    text: &str,
    now: DateTime<Utc>,
) -> Result<Option<Card>>
where
    C: HttpClient + ?Sized,
    I: IdGenerator + ?Sized,
{
    let Some(link) = select_last_url(text) else {
        debug!("no link in text");
        return Ok(None);
    };

    let url = validate_url(link).map_err(|e| {
        warn!(link, error = %e, "link rejected");
        e
    })?;

    let doc = fetch_document(client, &url).map_err(|e| {
        warn!(%url, error = %e, "preview unavailable");
        e
    })?;

    let card = extract_card(&doc, link, ids.id_from_time(now));
    debug!(id = %card.id, url = %card.url, "card built");
    Ok(Some(card))
}

/// Client and id generator bundled for repeated previews.
pub struct Previewer<C, I = UuidV7Ids> {
    client: C,
    ids: I,
}

impl<C: HttpClient> Previewer<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            ids: UuidV7Ids,
        }
    }
}

impl<C: HttpClient, I: IdGenerator> Previewer<C, I> {
    pub fn with_ids<J: IdGenerator>(self, ids: J) -> Previewer<C, J> {
        Previewer {
            client: self.client,
            ids,
        }
    }

    pub fn preview(&self, text: &str, now: DateTime<Utc>) -> Result<Option<Card>> {
        fetch_preview_with(&self.client, &self.ids, text, now)
    }

    #[cfg(test)]
    pub(crate) fn client(&self) -> &C {
        &self.client
    }
}
