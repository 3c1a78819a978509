// server/src/api/handlers_actors.rs
use models::{Actor, MessageResponse};
use serde::Deserialize;
use store::GraphStore;
use warp::http::StatusCode;

use super::reply::{decode_segment, error_reply, json_reply, ok, ApiReply};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
}

pub async fn create_actor(actor: Actor, store: GraphStore) -> ApiReply {
    match store.create_actor(&actor).await {
        Ok(()) => Ok(json_reply(&actor, StatusCode::CREATED)),
        Err(e) => error_reply(&e),
    }
}

pub async fn get_actor(name: String, store: GraphStore) -> ApiReply {
    let name = decode_segment(&name);
    match store.get_actor(&name).await {
        Ok(actor) => ok(&actor),
        Err(e) => error_reply(&e),
    }
}

pub async fn list_actors(params: ListParams, store: GraphStore) -> ApiReply {
    match store.list_actors(params.limit).await {
        Ok(actors) => ok(&actors),
        Err(e) => error_reply(&e),
    }
}

pub async fn update_actor(name: String, actor: Actor, store: GraphStore) -> ApiReply {
    let name = decode_segment(&name);
    match store.update_actor(&name, &actor).await {
        Ok(updated) => ok(&updated),
        Err(e) => error_reply(&e),
    }
}

pub async fn delete_actor(name: String, store: GraphStore) -> ApiReply {
    let name = decode_segment(&name);
    match store.delete_actor(&name).await {
        Ok(()) => ok(&MessageResponse::new(format!(
            "Actor {} deleted successfully",
            name
        ))),
        Err(e) => error_reply(&e),
    }
}

pub async fn actor_filmography(name: String, store: GraphStore) -> ApiReply {
    let name = decode_segment(&name);
    match store.actor_filmography(&name).await {
        Ok(filmography) => ok(&filmography),
        Err(e) => error_reply(&e),
    }
}
