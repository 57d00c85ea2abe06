use crate::models::{
    Dog, Location, LocationSearchRequest, LocationSearchResponse, MatchResponse, SearchQuery,
    SearchResponse,
};
use crate::services::api::ApiClient;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur when talking to the dog catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{operation}: {status}")]
    Status { operation: &'static str, status: u16 },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("No favorite dogs selected for matching")]
    NoFavorites,
}

/// Dog catalog API client
///
/// Handles:
/// - Breed listing and dog search
/// - Fetching dog records by id
/// - Match generation from a favorites list
/// - Location lookups
#[derive(Debug, Clone)]
pub struct CatalogClient {
    api: ApiClient,
}

impl CatalogClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// GET /dogs/breeds
    pub async fn breeds(&self) -> Result<Vec<String>, CatalogError> {
        let url = self.api.url("/dogs/breeds");
        tracing::debug!("Fetching breeds from: {}", url);

        self.send_json(self.api.http().get(&url), "Failed to fetch breeds")
            .await
    }

    /// GET /dogs/search
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, CatalogError> {
        let url = format!("{}?{}", self.api.url("/dogs/search"), query.to_query_string());
        tracing::debug!("Searching dogs: {}", url);

        let response: SearchResponse = self
            .send_json(self.api.http().get(&url), "Search failed")
            .await?;

        tracing::debug!(
            "Search returned {} ids (total: {})",
            response.result_ids.len(),
            response.total
        );

        Ok(response)
    }

    /// Follow a `next`/`prev` cursor from an earlier search response
    ///
    /// The cursor is a path plus query string relative to the service root.
    pub async fn search_continuation(&self, cursor: &str) -> Result<SearchResponse, CatalogError> {
        let url = self.api.url(cursor);
        tracing::debug!("Following search cursor: {}", url);

        self.send_json(self.api.http().get(&url), "Search failed")
            .await
    }

    /// POST /dogs
    ///
    /// Records come back in whatever order the service picks. An empty id
    /// list never reaches the network.
    pub async fn dog_details(&self, ids: &[String]) -> Result<Vec<Dog>, CatalogError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.api.url("/dogs");
        tracing::debug!("Fetching {} dog records", ids.len());

        self.send_json(
            self.api.http().post(&url).json(ids),
            "Failed to fetch dog details",
        )
        .await
    }

    /// POST /dogs/match
    pub async fn generate_match(
        &self,
        favorite_ids: &[String],
    ) -> Result<MatchResponse, CatalogError> {
        if favorite_ids.is_empty() {
            return Err(CatalogError::NoFavorites);
        }

        let url = self.api.url("/dogs/match");
        tracing::debug!("Generating match from {} favorites", favorite_ids.len());

        self.send_json(
            self.api.http().post(&url).json(favorite_ids),
            "Match generation failed",
        )
        .await
    }

    /// POST /locations
    pub async fn locations_by_zip(
        &self,
        zip_codes: &[String],
    ) -> Result<Vec<Location>, CatalogError> {
        if zip_codes.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.api.url("/locations");

        self.send_json(
            self.api.http().post(&url).json(zip_codes),
            "Failed to fetch locations",
        )
        .await
    }

    /// POST /locations/search
    pub async fn search_locations(
        &self,
        request: &LocationSearchRequest,
    ) -> Result<LocationSearchResponse, CatalogError> {
        let url = self.api.url("/locations/search");

        self.send_json(
            self.api.http().post(&url).json(request),
            "Location search failed",
        )
        .await
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        operation: &'static str,
    ) -> Result<T, CatalogError> {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("{}: {}", operation, status);
            return Err(CatalogError::Status {
                operation,
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| CatalogError::InvalidResponse(format!("{}: {}", operation, e)))
    }
}
