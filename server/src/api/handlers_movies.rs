// server/src/api/handlers_movies.rs
use models::{ActorInMovie, MessageResponse, Movie};
use store::GraphStore;
use warp::http::StatusCode;

use super::handlers_actors::ListParams;
use super::reply::{decode_segment, error_reply, json_reply, ok, ApiReply};

pub async fn create_movie(movie: Movie, store: GraphStore) -> ApiReply {
    match store.create_movie(&movie).await {
        Ok(()) => Ok(json_reply(&movie, StatusCode::CREATED)),
        Err(e) => error_reply(&e),
    }
}

pub async fn get_movie(title: String, store: GraphStore) -> ApiReply {
    let title = decode_segment(&title);
    match store.get_movie(&title).await {
        Ok(movie) => ok(&movie),
        Err(e) => error_reply(&e),
    }
}

pub async fn list_movies(params: ListParams, store: GraphStore) -> ApiReply {
    match store.list_movies(params.limit).await {
        Ok(movies) => ok(&movies),
        Err(e) => error_reply(&e),
    }
}

pub async fn update_movie(title: String, movie: Movie, store: GraphStore) -> ApiReply {
    let title = decode_segment(&title);
    match store.update_movie(&title, &movie).await {
        Ok(updated) => ok(&updated),
        Err(e) => error_reply(&e),
    }
}

pub async fn delete_movie(title: String, store: GraphStore) -> ApiReply {
    let title = decode_segment(&title);
    match store.delete_movie(&title).await {
        Ok(()) => ok(&MessageResponse::new(format!(
            "Movie {} deleted successfully",
            title
        ))),
        Err(e) => error_reply(&e),
    }
}

/// Merge an ACTED_IN edge between two existing nodes; not-found when
/// either endpoint is missing, idempotent when both exist.
pub async fn add_actor_to_movie(relation: ActorInMovie, store: GraphStore) -> ApiReply {
    match store
        .merge_acted_in(&relation.actor_name, &relation.movie_title)
        .await
    {
        Ok(()) => ok(&MessageResponse::new(format!(
            "Relationship added: {} ACTED_IN {}",
            relation.actor_name, relation.movie_title
        ))),
        Err(e) => error_reply(&e),
    }
}

pub async fn movie_cast(title: String, store: GraphStore) -> ApiReply {
    let title = decode_segment(&title);
    match store.movie_cast(&title).await {
        Ok(cast) => ok(&cast),
        Err(e) => error_reply(&e),
    }
}
