use serde::{Deserialize, Serialize};

/// One page of the paginated Pokémon listing.
///
/// `next` and `previous` are fully-qualified URLs issued by the server
/// (or null at either end of the collection) and are stored verbatim;
/// the client never constructs or rewrites pagination URLs itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonPage {
    /// Total number of items in the collection, across all pages.
    pub count: Option<u64>,
    pub next: Option<String>,
    pub previous: Option<String>,
    #[serde(rename = "results")]
    pub items: Vec<PokemonRef>,
}

/// A listing entry: the name plus the URL of the detail resource.
///
/// The URL doubles as the item's identity and cache key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonRef {
    pub name: String,
    pub url: String,
}
