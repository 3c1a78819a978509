// server/src/api/handlers_search.rs
use models::{ApiError, ApiResult};
use serde::Deserialize;
use store::{GraphStore, SearchKind};

use super::reply::{error_reply, ok, ApiReply};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

fn validated(params: &SearchParams) -> ApiResult<&str> {
    if params.query.is_empty() {
        return Err(ApiError::BadRequest(
            "query parameter must not be empty".to_string(),
        ));
    }
    Ok(&params.query)
}

/// Ranked name/title suggestions, at most ten.
pub async fn autocomplete(search_type: String, params: SearchParams, store: GraphStore) -> ApiReply {
    let result = async {
        let kind = SearchKind::parse(&search_type)?;
        let q = validated(&params)?;
        store.autocomplete(kind, q).await
    }
    .await;
    match result {
        Ok(names) => ok(&names),
        Err(e) => error_reply(&e),
    }
}

/// Ranked full-entity search, at most twenty results.
pub async fn search(search_type: String, params: SearchParams, store: GraphStore) -> ApiReply {
    let kind = match SearchKind::parse(&search_type) {
        Ok(kind) => kind,
        Err(e) => return error_reply(&e),
    };
    let q = match validated(&params) {
        Ok(q) => q,
        Err(e) => return error_reply(&e),
    };
    match kind {
        SearchKind::Actor => match store.search_actors(q).await {
            Ok(actors) => ok(&actors),
            Err(e) => error_reply(&e),
        },
        SearchKind::Movie => match store.search_movies(q).await {
            Ok(movies) => ok(&movies),
            Err(e) => error_reply(&e),
        },
    }
}
