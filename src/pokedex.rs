//! Browser state management for the Pokédex data layer.
//!
//! This module contains the `Pokedex` coordinator that owns the HTTP
//! client and the page cache, runs the fetch pipeline for each load,
//! and publishes `CurrentView` snapshots for a presentation layer to
//! render. Failures never escape as errors; they land in the view as
//! `Errored` state plus a message, with the previous content retained.

use std::collections::HashMap;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::api::{FetchError, PokeClient, DEFAULT_LIST_URL};
use crate::cache::PageCache;
use crate::models::{PokemonDetail, PokemonPage, PokemonRef};
use crate::resolver::resolve_all;
use crate::search::filter_by_name;

// ============================================================================
// State Types
// ============================================================================

/// How a load was initiated; decides which loading flag is raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// First load of the seed page.
    Initial,
    /// Cursor navigation to an adjacent page.
    Navigate,
    /// User-initiated re-fetch of the current page.
    Refresh,
}

/// Lifecycle state of the most recent load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchState {
    /// Nothing has been loaded yet.
    #[default]
    Idle,
    /// Fetching a page with no cached copy; there is nothing to show.
    InitialLoading,
    /// Re-fetching while the current content stays visible.
    Refreshing,
    /// The displayed content reflects the last completed load.
    Ready,
    /// The last load failed; prior content is retained alongside the error.
    Errored,
}

impl FetchState {
    /// True while a fetch has started and not yet settled.
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::InitialLoading | FetchState::Refreshing)
    }
}

// ============================================================================
// View Snapshot
// ============================================================================

/// Snapshot of everything a renderer needs, rebuilt on every change.
#[derive(Debug, Clone, Default)]
pub struct CurrentView {
    /// Listing entries with the active search filter applied.
    pub items: Vec<PokemonRef>,
    /// Resolved details for the displayed items, keyed by detail URL.
    /// An item whose detail fetch failed has no entry here.
    pub details: HashMap<String, PokemonDetail>,
    /// Cursor to the next page, verbatim from the last successful page.
    pub next: Option<String>,
    /// Cursor to the previous page, verbatim from the last successful page.
    pub previous: Option<String>,
    pub state: FetchState,
    /// Human-readable message from the last failed load, if any.
    pub error: Option<String>,
}

// ============================================================================
// Coordinator
// ============================================================================

/// Data-layer coordinator for one browsing session.
///
/// Owns the API client and the cache, tracks the current page and its
/// cursors, and derives `CurrentView` snapshots. All methods mutate
/// state on the caller's task; the only concurrency is the detail
/// fan-out inside a load, which is fully settled before the final
/// snapshot of that load is published.
pub struct Pokedex {
    // Core services
    client: PokeClient,
    cache: PageCache,

    // Listing state
    seed_url: String,
    current_url: String,
    page_items: Vec<PokemonRef>,
    next: Option<String>,
    previous: Option<String>,

    // Presentation state
    query: String,
    state: FetchState,
    error: Option<String>,
    view: CurrentView,

    // View subscribers
    subscribers: Vec<mpsc::UnboundedSender<CurrentView>>,
}

impl Pokedex {
    /// Create a browser seeded at the default first listing page.
    pub fn new(client: PokeClient) -> Self {
        Self::with_seed(client, DEFAULT_LIST_URL)
    }

    /// Create a browser seeded at a specific listing URL.
    pub fn with_seed(client: PokeClient, seed_url: &str) -> Self {
        Self {
            client,
            cache: PageCache::new(),
            seed_url: seed_url.to_string(),
            current_url: seed_url.to_string(),
            page_items: Vec::new(),
            next: None,
            previous: None,
            query: String::new(),
            state: FetchState::Idle,
            error: None,
            view: CurrentView::default(),
            subscribers: Vec::new(),
        }
    }

    /// The latest published snapshot.
    pub fn view(&self) -> &CurrentView {
        &self.view
    }

    /// The URL of the page currently displayed or being loaded.
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// The active search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Read-only access to the cache.
    pub fn cache(&self) -> &PageCache {
        &self.cache
    }

    /// Subscribe to view snapshots. Every publish is delivered in order;
    /// a dropped receiver is pruned on the next publish.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<CurrentView> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// Load the seed page. Call once after construction.
    pub async fn load_initial(&mut self) {
        let url = self.seed_url.clone();
        self.load(&url, LoadMode::Initial).await;
    }

    /// Re-fetch the current page.
    pub async fn refresh(&mut self) {
        let url = self.current_url.clone();
        self.load(&url, LoadMode::Refresh).await;
    }

    /// Navigate to the next page. Does nothing when there is no cursor.
    pub async fn load_next(&mut self) {
        match self.next.clone() {
            Some(url) => self.load(&url, LoadMode::Navigate).await,
            None => debug!("No next cursor, ignoring"),
        }
    }

    /// Navigate to the previous page. Does nothing when there is no cursor.
    pub async fn load_previous(&mut self) {
        match self.previous.clone() {
            Some(url) => self.load(&url, LoadMode::Navigate).await,
            None => debug!("No previous cursor, ignoring"),
        }
    }

    /// Update the search query and republish the filtered view.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.publish();
    }

    /// Run one load against `url`.
    ///
    /// When the page is already cached, a snapshot built from the cache
    /// is published immediately and any stale error is cleared; the
    /// network fetch is still always issued. After the listing arrives,
    /// details are resolved to settlement, everything is written back
    /// to the cache, and cursors are captured verbatim from the page.
    /// Every path through here ends in `Ready` or `Errored` and
    /// publishes a final snapshot.
    pub async fn load(&mut self, url: &str, mode: LoadMode) {
        debug!(url = %url, ?mode, "Starting load");
        self.current_url = url.to_string();

        let cached_page = self.cache.page(url).cloned();

        // A refresh shows its own flag; only an uncached non-refresh
        // load raises the blank-screen loading state.
        if mode == LoadMode::Refresh {
            self.state = FetchState::Refreshing;
        } else if cached_page.is_none() {
            self.state = FetchState::InitialLoading;
        }

        if let Some(page) = cached_page {
            debug!(url = %url, items = page.items.len(), "Cache hit, publishing optimistically");
            self.apply_page(&page);
            self.error = None;
            // A cached page with no fetch flag in flight reads as Ready
            if !self.state.is_loading() {
                self.state = FetchState::Ready;
            }
        }
        self.publish();

        match self.fetch_and_resolve(url).await {
            Ok((page, details)) => {
                info!(
                    url = %url,
                    items = page.items.len(),
                    details = details.len(),
                    "Page loaded"
                );
                for (detail_url, detail) in details {
                    self.cache.insert_detail(&detail_url, detail);
                }
                self.apply_page(&page);
                self.cache.insert_page(url, page);
                self.state = FetchState::Ready;
                self.error = None;
            }
            Err(e) => {
                warn!(url = %url, error = %e, "Load failed");
                // Previously displayed content and cursors stay put
                self.state = FetchState::Errored;
                self.error = Some(e.to_string());
            }
        }

        self.publish();
    }

    /// Fetch the listing and settle the detail fan-out for its items.
    async fn fetch_and_resolve(
        &self,
        url: &str,
    ) -> Result<(PokemonPage, HashMap<String, PokemonDetail>), FetchError> {
        let page = self.client.fetch_page(url).await?;
        let details = resolve_all(&self.client, &self.cache, &page.items).await;
        Ok((page, details))
    }

    /// Take a page's items and cursors as the current listing state.
    fn apply_page(&mut self, page: &PokemonPage) {
        self.page_items = page.items.clone();
        self.next = page.next.clone();
        self.previous = page.previous.clone();
    }

    /// Rebuild the derived snapshot and deliver it to all subscribers.
    fn publish(&mut self) {
        let items = filter_by_name(&self.page_items, &self.query);
        let details = items
            .iter()
            .filter_map(|item| {
                self.cache
                    .detail(&item.url)
                    .map(|detail| (item.url.clone(), detail.clone()))
            })
            .collect();

        let view = CurrentView {
            items,
            details,
            next: self.next.clone(),
            previous: self.previous.clone(),
            state: self.state,
            error: self.error.clone(),
        };

        self.subscribers.retain(|tx| tx.send(view.clone()).is_ok());
        self.view = view;
    }
}

// ============================================================================
// Tests
// ============================================================================
