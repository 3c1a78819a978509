// server/src/enrich.rs
//! The TMDB-to-graph synchronization path: fetch a person with credits,
//! upsert the actor node, upsert each movie, merge each ACTED_IN edge.

use log::info;
use models::{ApiError, ApiResult};
use store::GraphStore;
use tmdb::{ActorProfile, TmdbClient};

/// Fetch one actor from TMDB and write them into the graph. Not-found
/// when TMDB's person search returns nothing for the name.
pub async fn import_actor(
    store: &GraphStore,
    tmdb: &TmdbClient,
    name: &str,
) -> ApiResult<ActorProfile> {
    let profile = tmdb
        .fetch_actor(name)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Actor {} in TMDB", name)))?;

    store.upsert_actor(&profile.actor).await?;
    for movie in &profile.filmography {
        store.upsert_movie(movie).await?;
        store
            .merge_acted_in(&profile.actor.name, &movie.title)
            .await?;
    }
    info!(
        "Actor imported from TMDB: {} ({} movies)",
        profile.actor.name,
        profile.filmography.len()
    );
    Ok(profile)
}
