//! Concurrent detail resolution for a page of listing entries.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::api::PokeClient;
use crate::cache::PageCache;
use crate::models::{PokemonDetail, PokemonRef};

/// Resolve the detail payloads behind a page of listing entries.
///
/// Details already in the cache are reused without touching the network;
/// the rest are fetched concurrently in one batch and the whole batch is
/// settled before returning. A failed detail fetch is logged and its
/// entry omitted, so one bad item never takes down the page.
///
/// Entries in the returned map are keyed by detail URL. The caller owns
/// the cache and performs the write-back; the resolver only reads it.
pub async fn resolve_all(
    client: &PokeClient,
    cache: &PageCache,
    items: &[PokemonRef],
) -> HashMap<String, PokemonDetail> {
    let mut resolved = HashMap::with_capacity(items.len());
    let mut to_fetch: Vec<&PokemonRef> = Vec::new();

    for item in items {
        match cache.detail(&item.url) {
            Some(detail) => {
                resolved.insert(item.url.clone(), detail.clone());
            }
            None => to_fetch.push(item),
        }
    }

    if to_fetch.is_empty() {
        return resolved;
    }

    debug!(
        cached = resolved.len(),
        fetching = to_fetch.len(),
        "Resolving page details"
    );

    // One future per uncached item; the page size bounds the fan-out
    let futures: Vec<_> = to_fetch
        .iter()
        .map(|item| async move {
            let result = client.fetch_detail(&item.url).await;
            (item.url.clone(), result)
        })
        .collect();

    for (url, result) in futures::future::join_all(futures).await {
        match result {
            Ok(detail) => {
                resolved.insert(url, detail);
            }
            Err(e) => {
                warn!(url = %url, error = %e, "Detail fetch failed, omitting item");
            }
        }
    }

    resolved
}
