//! Process-lifetime in-memory cache for fetched API payloads.
//!
//! One mapping from fully-qualified URL to whatever that URL served,
//! a listing page or a Pokémon detail. Entries are only ever inserted
//! or replaced; nothing is evicted for the life of the process, so a
//! URL fetched once renders instantly on every later visit.

use std::collections::HashMap;

use crate::models::{PokemonDetail, PokemonPage};

/// A cached payload, keyed by the URL that served it.
#[derive(Debug, Clone)]
pub enum CachedResource {
    Page(PokemonPage),
    Detail(PokemonDetail),
}

/// URL-keyed cache of listing pages and detail payloads.
///
/// Owned by the `Pokedex` that created it; there is no global instance.
/// There is deliberately no removal or clear API.
#[derive(Debug, Default)]
pub struct PageCache {
    entries: HashMap<String, CachedResource>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a listing page under its URL, replacing any previous entry.
    pub fn insert_page(&mut self, url: &str, page: PokemonPage) {
        self.entries.insert(url.to_string(), CachedResource::Page(page));
    }

    /// Store a detail payload under its URL, replacing any previous entry.
    pub fn insert_detail(&mut self, url: &str, detail: PokemonDetail) {
        self.entries
            .insert(url.to_string(), CachedResource::Detail(detail));
    }

    /// Look up a cached listing page.
    pub fn page(&self, url: &str) -> Option<&PokemonPage> {
        match self.entries.get(url) {
            Some(CachedResource::Page(page)) => Some(page),
            _ => None,
        }
    }

    /// Look up a cached detail payload.
    pub fn detail(&self, url: &str) -> Option<&PokemonDetail> {
        match self.entries.get(url) {
            Some(CachedResource::Detail(detail)) => Some(detail),
            _ => None,
        }
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains_key(url)
    }

    /// Number of cached entries, pages plus details.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PokemonRef;

    fn sample_page(next: Option<&str>) -> PokemonPage {
        PokemonPage {
            count: Some(1302),
            next: next.map(str::to_string),
            previous: None,
            items: vec![PokemonRef {
                name: "bulbasaur".to_string(),
                url: "https://pokeapi.co/api/v2/pokemon/1/".to_string(),
            }],
        }
    }

    fn sample_detail(name: &str) -> PokemonDetail {
        serde_json::from_str(&format!(r#"{{"id": 1, "name": "{name}"}}"#)).unwrap()
    }

    #[test]
    fn test_page_round_trip() {
        let mut cache = PageCache::new();
        assert!(cache.is_empty());

        cache.insert_page("https://pokeapi.co/api/v2/pokemon?limit=50", sample_page(None));

        let page = cache
            .page("https://pokeapi.co/api/v2/pokemon?limit=50")
            .unwrap();
        assert_eq!(page.items[0].name, "bulbasaur");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_lookup_discriminates_entry_kind() {
        let mut cache = PageCache::new();
        cache.insert_detail("https://pokeapi.co/api/v2/pokemon/1/", sample_detail("bulbasaur"));

        // A detail entry is not visible through the page accessor
        assert!(cache.page("https://pokeapi.co/api/v2/pokemon/1/").is_none());
        assert!(cache.detail("https://pokeapi.co/api/v2/pokemon/1/").is_some());
        assert!(cache.contains("https://pokeapi.co/api/v2/pokemon/1/"));
    }

    #[test]
    fn test_insert_replaces_existing_entry() {
        let url = "https://pokeapi.co/api/v2/pokemon?limit=50";
        let mut cache = PageCache::new();

        cache.insert_page(url, sample_page(None));
        cache.insert_page(url, sample_page(Some("https://pokeapi.co/api/v2/pokemon?offset=50&limit=50")));

        assert_eq!(cache.len(), 1);
        let page = cache.page(url).unwrap();
        assert!(page.next.is_some());
    }

    #[test]
    fn test_miss_returns_none() {
        let cache = PageCache::new();
        assert!(cache.page("https://pokeapi.co/api/v2/pokemon?limit=50").is_none());
        assert!(!cache.contains("https://pokeapi.co/api/v2/pokemon?limit=50"));
    }
}
