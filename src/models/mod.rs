//! Data models for PokeAPI resources.
//!
//! This module contains the data structures decoded from the upstream
//! API:
//!
//! - `PokemonPage`, `PokemonRef`: one page of the paginated listing and
//!   its entries
//! - `PokemonDetail` and its parts (`Sprites`, `PokemonType`, `TypeRef`):
//!   the per-Pokémon detail payload, typed down to the display fields

pub mod page;
pub mod pokemon;

pub use page::{PokemonPage, PokemonRef};
pub use pokemon::{PokemonDetail, PokemonType, Sprites, TypeRef};
