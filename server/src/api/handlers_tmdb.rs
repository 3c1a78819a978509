// server/src/api/handlers_tmdb.rs
use models::{ApiError, PosterResponse};
use store::GraphStore;
use tmdb::TmdbClient;

use super::reply::{decode_segment, error_reply, ok, ApiReply};
use crate::enrich::import_actor;
use crate::seed::seed_all;

/// One-shot enrichment of a single named actor.
pub async fn add_actor_from_tmdb(name: String, store: GraphStore, tmdb: TmdbClient) -> ApiReply {
    let name = decode_segment(&name);
    match import_actor(&store, &tmdb, &name).await {
        Ok(profile) => ok(&serde_json::json!({
            "message": format!("Actor {} added successfully with filmography", name),
            "data": {
                "name": profile.actor.name,
                "date_of_birth": profile.actor.date_of_birth,
                "gender": profile.actor.gender,
                "movies_count": profile.filmography.len(),
            }
        })),
        Err(e) => error_reply(&e),
    }
}

/// Poster lookup goes straight to TMDB; nothing is stored.
pub async fn movie_poster(title: String, tmdb: TmdbClient) -> ApiReply {
    let title = decode_segment(&title);
    match tmdb.movie_poster(&title).await {
        Ok(Some(poster_path)) => ok(&PosterResponse { poster_path }),
        Ok(None) => error_reply(&ApiError::NotFound(format!("Poster for {}", title))),
        Err(e) => error_reply(&e),
    }
}

/// Bulk seed. Long-running and strictly sequential; always replies with
/// the summary, even when every name failed.
pub async fn seed_actors(store: GraphStore, tmdb: TmdbClient) -> ApiReply {
    match seed_all(&store, &tmdb).await {
        Ok(summary) => ok(&summary),
        Err(e) => error_reply(&e),
    }
}
