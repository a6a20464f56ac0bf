//! # dexcache
//!
//! Client-side data layer for browsing a paginated, cursor-linked
//! Pokémon collection served by PokeAPI.
//!
//! The crate fetches listing pages, resolves every listed Pokémon's
//! detail payload concurrently, and merges everything into a
//! process-lifetime in-memory cache so a previously visited page
//! renders instantly while a re-fetch keeps it fresh. Pagination
//! follows the `next`/`previous` cursor URLs served by the API, search
//! filters the current page by name, and every failure surfaces as
//! state on the published view rather than as an error return.
//!
//! ## Quick start
//!
//! ```no_run
//! use dexcache::{PokeClient, Pokedex};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), dexcache::FetchError> {
//! let mut dex = Pokedex::new(PokeClient::new()?);
//! dex.load_initial().await;
//!
//! let view = dex.view();
//! for item in &view.items {
//!     println!("{}", item.name);
//! }
//! if let Some(error) = &view.error {
//!     eprintln!("load failed: {error}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cache;
pub mod models;
pub mod pokedex;
pub mod resolver;
pub mod search;

pub use api::{FetchError, PokeClient, DEFAULT_LIST_URL};
pub use cache::{CachedResource, PageCache};
pub use models::{PokemonDetail, PokemonPage, PokemonRef};
pub use pokedex::{CurrentView, FetchState, LoadMode, Pokedex};
pub use resolver::resolve_all;
pub use search::filter_by_name;
