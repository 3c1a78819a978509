// tmdb/src/types.rs
//! Wire shapes for the subset of the TMDB v3 API this service calls.
//! Everything beyond the fields below is ignored on deserialization.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PersonSearchResponse {
    #[serde(default)]
    pub results: Vec<PersonSummary>,
}

#[derive(Debug, Deserialize)]
pub struct PersonSummary {
    pub id: i64,
}

/// `/person/{id}?append_to_response=movie_credits`.
#[derive(Debug, Deserialize)]
pub struct PersonDetails {
    pub name: String,
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub deathday: Option<String>,
    /// TMDB gender code: 2 = male, 1 = female, 0/3 = unspecified.
    #[serde(default)]
    pub gender: i64,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub movie_credits: Option<MovieCredits>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MovieCredits {
    #[serde(default)]
    pub cast: Vec<CastCredit>,
}

#[derive(Debug, Deserialize)]
pub struct CastCredit {
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MovieSearchResponse {
    #[serde(default)]
    pub results: Vec<MovieSummary>,
}

#[derive(Debug, Deserialize)]
pub struct MovieSummary {
    #[serde(default)]
    pub poster_path: Option<String>,
}
