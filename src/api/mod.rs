//! REST API client module for PokeAPI.
//!
//! This module provides the `PokeClient` for fetching the paginated
//! Pokémon listing and per-Pokémon detail payloads, plus the
//! `FetchError` taxonomy shared by every fetch in the crate.
//!
//! The API is public and unauthenticated; the client only ever issues
//! GET requests against fully-qualified URLs taken from configuration
//! or from cursor links in earlier responses.

pub mod client;
pub mod error;

pub use client::{PokeClient, DEFAULT_LIST_URL};
pub use error::FetchError;
