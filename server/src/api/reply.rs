// server/src/api/reply.rs
//! Shared plumbing for warp handlers: the unified reply type, the
//! error-to-status mapping, and the filters that inject the process-wide
//! clients into handlers.

use std::convert::Infallible;

use log::error;
use models::ApiError;
use serde::Serialize;
use store::GraphStore;
use tmdb::TmdbClient;
use warp::http::StatusCode;
use warp::reply::{Json, WithStatus};
use warp::Filter;

/// Unified return type for every JSON handler.
pub type ApiReply = Result<WithStatus<Json>, warp::Rejection>;

pub fn json_reply<T: Serialize>(value: &T, status: StatusCode) -> WithStatus<Json> {
    warp::reply::with_status(warp::reply::json(value), status)
}

pub fn ok<T: Serialize>(value: &T) -> ApiReply {
    Ok(json_reply(value, StatusCode::OK))
}

/// Not-found and bad-request map to their own statuses; everything else
/// is a 500 carrying the error's display string, and gets logged.
pub fn status_for(err: &ApiError) -> StatusCode {
    match err {
        ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn error_reply(err: &ApiError) -> ApiReply {
    let status = status_for(err);
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        error!("Internal error: {}", err);
    }
    Ok(json_reply(
        &serde_json::json!({ "detail": err.to_string() }),
        status,
    ))
}

/// Inject a clone of the graph store into a handler.
pub fn with_store(
    store: GraphStore,
) -> impl Filter<Extract = (GraphStore,), Error = Infallible> + Clone {
    warp::any().map(move || store.clone())
}

pub fn with_tmdb(
    tmdb: TmdbClient,
) -> impl Filter<Extract = (TmdbClient,), Error = Infallible> + Clone {
    warp::any().map(move || tmdb.clone())
}

/// warp hands path segments through still percent-encoded; names and
/// titles routinely contain spaces. An undecodable segment is used as-is.
pub fn decode_segment(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::{decode_segment, status_for};
    use models::ApiError;
    use warp::http::StatusCode;

    #[test]
    fn should_map_error_kinds_to_statuses() {
        assert_eq!(
            status_for(&ApiError::NotFound("Actor X".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&ApiError::BadRequest("bad".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&ApiError::Store("boom".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(&ApiError::External("tmdb down".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn should_decode_percent_encoded_segments() {
        assert_eq!(decode_segment("Tom%20Hanks"), "Tom Hanks");
        assert_eq!(decode_segment("Cars"), "Cars");
    }
}
