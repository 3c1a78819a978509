// tmdb/src/lib.rs
//! External-enrichment layer: a thin client for the TMDB v3 API.
//! All calls carry the API key as a query parameter; failures surface as
//! `ApiError::External` with no retry, matching the rest of the API's
//! error policy.

pub mod mapping;
pub mod types;

use std::env;

use log::warn;
use models::ApiResult;

pub use mapping::{credit_year, gender_label, map_person, ActorProfile};
use types::{MovieSearchResponse, PersonDetails, PersonSearchResponse};

/// TMDB settings from the environment. The key has no useful fallback;
/// enrichment routes fail with a clear message when it is missing.
#[derive(Clone, Debug)]
pub struct TmdbConfig {
    pub api_key: String,
    pub base_url: String,
}

impl TmdbConfig {
    pub fn from_env() -> Self {
        TmdbConfig {
            api_key: env::var("TMDB_API_KEY").unwrap_or_default(),
            base_url: env::var("TMDB_BASE_URL")
                .unwrap_or_else(|_| "https://api.themoviedb.org/3".to_string()),
        }
    }
}

/// Process-wide TMDB client, cloned into request handlers. Reuses one
/// `reqwest::Client` connection pool.
#[derive(Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    config: TmdbConfig,
}

impl TmdbClient {
    pub fn new(config: TmdbConfig) -> Self {
        if config.api_key.is_empty() {
            warn!("TMDB_API_KEY is not set; enrichment routes will fail");
        }
        TmdbClient {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Person search; returns the first result's TMDB id, or `None` when
    /// TMDB knows nothing by that name.
    async fn search_person(&self, name: &str) -> ApiResult<Option<i64>> {
        let url = format!("{}/search/person", self.config.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("api_key", self.config.api_key.as_str()), ("query", name)])
            .send()
            .await?
            .error_for_status()?;
        let body: PersonSearchResponse = response.json().await?;
        Ok(body.results.first().map(|person| person.id))
    }

    async fn person_details(&self, id: i64) -> ApiResult<PersonDetails> {
        let url = format!("{}/person/{}", self.config.base_url, id);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("api_key", self.config.api_key.as_str()),
                ("append_to_response", "movie_credits"),
            ])
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Search, take the first person, fetch details with embedded
    /// credits, map to local shapes. `None` when the search is empty.
    pub async fn fetch_actor(&self, name: &str) -> ApiResult<Option<ActorProfile>> {
        let Some(id) = self.search_person(name).await? else {
            return Ok(None);
        };
        let details = self.person_details(id).await?;
        Ok(Some(map_person(&details)))
    }

    /// Movie search by title; the first result's poster path, if any.
    pub async fn movie_poster(&self, title: &str) -> ApiResult<Option<String>> {
        let url = format!("{}/search/movie", self.config.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("api_key", self.config.api_key.as_str()), ("query", title)])
            .send()
            .await?
            .error_for_status()?;
        let body: MovieSearchResponse = response.json().await?;
        Ok(body.results.first().and_then(|m| m.poster_path.clone()))
    }
}

impl std::fmt::Debug for TmdbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the API key.
        f.debug_struct("TmdbClient")
            .field("base_url", &self.config.base_url)
            .finish()
    }
}
