//! API client for the public PokeAPI REST endpoints.
//!
//! This module provides the `PokeClient` struct for fetching listing
//! pages and per-Pokémon detail payloads. The client is GET-only and
//! unauthenticated; every request targets a fully-qualified URL handed
//! to it (the seed listing URL or a cursor/detail URL from a response).

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::models::{PokemonDetail, PokemonPage};

use super::FetchError;

/// First page of the Pokémon listing; the seed URL for a fresh browser.
pub const DEFAULT_LIST_URL: &str = "https://pokeapi.co/api/v2/pokemon?limit=50";

/// HTTP request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// API client for PokeAPI.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Debug, Clone)]
pub struct PokeClient {
    client: Client,
}

impl PokeClient {
    /// Create a new client with the default request timeout.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    /// Create a new client with a custom request timeout (primarily for tests).
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("dexcache/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Fetch one page of the Pokémon listing.
    pub async fn fetch_page(&self, url: &str) -> Result<PokemonPage, FetchError> {
        self.get(url).await
    }

    /// Fetch the detail payload behind a listing entry.
    pub async fn fetch_detail(&self, url: &str) -> Result<PokemonDetail, FetchError> {
        self.get(url).await
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(
        url: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, FetchError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(FetchError::from_status(url, status, &body))
        }
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!(url = %url, "Sending GET request");

        let response = self.client.get(url).send().await?;
        let response = Self::check_response(url, response).await?;

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| FetchError::decode(url, e))
    }
}
