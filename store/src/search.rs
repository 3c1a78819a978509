// store/src/search.rs
//! Relevance-ranked search and autocomplete over a single text field.
//!
//! The ranking rule: exact match ranks 0, prefix match 1, any other
//! substring match 2, all case-insensitive; equal ranks order shortest
//! first (the shortest prefix match is the nearest thing to an exact
//! one) and then lexicographically. The store supplies case-insensitive
//! substring matches and the ordering happens here, where it is testable
//! without a running database.

use models::{Actor, ApiError, ApiResult, Movie};
use neo4rs::query;

use crate::actors::actor_from_node;
use crate::movies::movie_from_node;
use crate::GraphStore;

/// Autocomplete returns at most this many names.
pub const AUTOCOMPLETE_LIMIT: usize = 10;
/// Search returns at most this many full entities.
pub const SEARCH_LIMIT: usize = 20;

/// Which node label a search targets. Anything else in the URL is a
/// bad-request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchKind {
    Actor,
    Movie,
}

impl SearchKind {
    pub fn parse(s: &str) -> ApiResult<Self> {
        match s {
            "actor" => Ok(SearchKind::Actor),
            "movie" => Ok(SearchKind::Movie),
            other => Err(ApiError::BadRequest(format!(
                "Invalid search type '{}', expected 'actor' or 'movie'",
                other
            ))),
        }
    }
}

/// Rank a candidate against a query. `None` means the candidate does not
/// match at all. Lower rank is more relevant.
pub fn relevance_rank(candidate: &str, q: &str) -> Option<u8> {
    let candidate = candidate.to_lowercase();
    let q = q.to_lowercase();
    if candidate == q {
        Some(0)
    } else if candidate.starts_with(&q) {
        Some(1)
    } else if candidate.contains(&q) {
        Some(2)
    } else {
        None
    }
}

/// Order by rank, then key length, then the key itself; truncate.
fn rank_and_truncate<T>(items: Vec<T>, q: &str, key: fn(&T) -> &str, limit: usize) -> Vec<T> {
    let mut ranked: Vec<(u8, T)> = items
        .into_iter()
        .filter_map(|item| relevance_rank(key(&item), q).map(|rank| (rank, item)))
        .collect();
    ranked.sort_by(|(ra, a), (rb, b)| {
        ra.cmp(rb)
            .then_with(|| key(a).len().cmp(&key(b).len()))
            .then_with(|| key(a).cmp(key(b)))
    });
    ranked.into_iter().take(limit).map(|(_, item)| item).collect()
}

impl GraphStore {
    async fn matching_actors(&self, q: &str) -> ApiResult<Vec<Actor>> {
        let cy = query(
            "MATCH (a:Actor)
             WHERE toLower(a.name) CONTAINS toLower($q)
             RETURN a",
        )
        .param("q", q);
        let mut rows = self.graph().execute(cy).await?;
        let mut actors = Vec::new();
        while let Some(row) = rows.next().await? {
            let node: neo4rs::Node = row.get("a")?;
            actors.push(actor_from_node(&node)?);
        }
        Ok(actors)
    }

    async fn matching_movies(&self, q: &str) -> ApiResult<Vec<Movie>> {
        let cy = query(
            "MATCH (m:Movie)
             WHERE toLower(m.title) CONTAINS toLower($q)
             RETURN m",
        )
        .param("q", q);
        let mut rows = self.graph().execute(cy).await?;
        let mut movies = Vec::new();
        while let Some(row) = rows.next().await? {
            let node: neo4rs::Node = row.get("m")?;
            movies.push(movie_from_node(&node)?);
        }
        Ok(movies)
    }

    /// Ranked full-entity search, capped at [`SEARCH_LIMIT`].
    pub async fn search_actors(&self, q: &str) -> ApiResult<Vec<Actor>> {
        let matches = self.matching_actors(q).await?;
        Ok(rank_and_truncate(matches, q, |a| &a.name, SEARCH_LIMIT))
    }

    pub async fn search_movies(&self, q: &str) -> ApiResult<Vec<Movie>> {
        let matches = self.matching_movies(q).await?;
        Ok(rank_and_truncate(matches, q, |m| &m.title, SEARCH_LIMIT))
    }

    /// Ranked name/title suggestions, capped at [`AUTOCOMPLETE_LIMIT`].
    pub async fn autocomplete(&self, kind: SearchKind, q: &str) -> ApiResult<Vec<String>> {
        let names = match kind {
            SearchKind::Actor => self
                .matching_actors(q)
                .await?
                .into_iter()
                .map(|a| a.name)
                .collect::<Vec<_>>(),
            SearchKind::Movie => self
                .matching_movies(q)
                .await?
                .into_iter()
                .map(|m| m.title)
                .collect::<Vec<_>>(),
        };
        Ok(rank_and_truncate(names, q, |s| s, AUTOCOMPLETE_LIMIT))
    }
}

#[cfg(test)]
mod tests {
    use super::{rank_and_truncate, relevance_rank, SearchKind, AUTOCOMPLETE_LIMIT};
    use models::ApiError;

    #[test]
    fn should_rank_closest_match_first() {
        let titles = vec![
            "Racing Cars".to_string(),
            "Cars".to_string(),
            "Car Wash".to_string(),
        ];
        let ranked = rank_and_truncate(titles, "car", |s| s, 20);
        assert_eq!(ranked, vec!["Cars", "Car Wash", "Racing Cars"]);
    }

    #[test]
    fn should_put_exact_match_ahead_of_everything() {
        let titles = vec![
            "Racing Cars".to_string(),
            "Cars".to_string(),
            "Carson City".to_string(),
        ];
        let ranked = rank_and_truncate(titles, "cars", |s| s, 20);
        assert_eq!(ranked, vec!["Cars", "Carson City", "Racing Cars"]);
    }

    #[test]
    fn should_rank_case_insensitively() {
        assert_eq!(relevance_rank("CARS", "cars"), Some(0));
        assert_eq!(relevance_rank("car wash", "CAR"), Some(1));
        assert_eq!(relevance_rank("Racing Cars", "cAr"), Some(2));
        assert_eq!(relevance_rank("Up", "car"), None);
    }

    #[test]
    fn should_break_rank_ties_lexicographically() {
        let names = vec![
            "Carrie Fisher".to_string(),
            "Carl Weathers".to_string(),
            "Oscar Isaac".to_string(),
        ];
        let ranked = rank_and_truncate(names, "car", |s| s, 20);
        assert_eq!(
            ranked,
            vec!["Carl Weathers", "Carrie Fisher", "Oscar Isaac"]
        );
    }

    #[test]
    fn should_truncate_to_limit() {
        let names: Vec<String> = (0..30).map(|i| format!("Actor {:02}", i)).collect();
        let ranked = rank_and_truncate(names, "actor", |s| s, AUTOCOMPLETE_LIMIT);
        assert_eq!(ranked.len(), AUTOCOMPLETE_LIMIT);
        assert_eq!(ranked[0], "Actor 00");
    }

    #[test]
    fn should_reject_unknown_search_kind() {
        assert!(matches!(SearchKind::parse("actor"), Ok(SearchKind::Actor)));
        assert!(matches!(SearchKind::parse("movie"), Ok(SearchKind::Movie)));
        assert!(matches!(
            SearchKind::parse("director"),
            Err(ApiError::BadRequest(_))
        ));
    }
}
