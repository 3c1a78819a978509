// server/src/api/routes.rs
//! Route table. Every JSON handler is injected with clones of the
//! process-wide store/TMDB clients and returns the unified reply type,
//! so the whole surface composes into one `or` chain.

use std::convert::Infallible;

use store::GraphStore;
use tmdb::TmdbClient;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

use super::handlers_actors;
use super::handlers_movies;
use super::handlers_search;
use super::handlers_system;
use super::handlers_tmdb;
use super::reply::{with_store, with_tmdb};

pub fn routes(
    store: GraphStore,
    tmdb: TmdbClient,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let root = warp::path::end()
        .and(warp::get())
        .and(warp::fs::file("static/index.html"));

    let health = warp::path!("health")
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(handlers_system::health);

    let autocomplete = warp::path!("autocomplete" / String)
        .and(warp::get())
        .and(warp::query::<handlers_search::SearchParams>())
        .and(with_store(store.clone()))
        .and_then(handlers_search::autocomplete);

    let search = warp::path!("search" / String)
        .and(warp::get())
        .and(warp::query::<handlers_search::SearchParams>())
        .and(with_store(store.clone()))
        .and_then(handlers_search::search);

    let create_actor = warp::path!("actors")
        .and(warp::post())
        .and(warp::body::json())
        .and(with_store(store.clone()))
        .and_then(handlers_actors::create_actor);

    let list_actors = warp::path!("actors")
        .and(warp::get())
        .and(warp::query::<handlers_actors::ListParams>())
        .and(with_store(store.clone()))
        .and_then(handlers_actors::list_actors);

    let actor_filmography = warp::path!("actors" / String / "filmography")
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(handlers_actors::actor_filmography);

    let get_actor = warp::path!("actors" / String)
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(handlers_actors::get_actor);

    let update_actor = warp::path!("actors" / String)
        .and(warp::put())
        .and(warp::body::json())
        .and(with_store(store.clone()))
        .and_then(handlers_actors::update_actor);

    let delete_actor = warp::path!("actors" / String)
        .and(warp::delete())
        .and(with_store(store.clone()))
        .and_then(handlers_actors::delete_actor);

    let create_movie = warp::path!("movies")
        .and(warp::post())
        .and(warp::body::json())
        .and(with_store(store.clone()))
        .and_then(handlers_movies::create_movie);

    let list_movies = warp::path!("movies")
        .and(warp::get())
        .and(warp::query::<handlers_actors::ListParams>())
        .and(with_store(store.clone()))
        .and_then(handlers_movies::list_movies);

    let movie_cast = warp::path!("movies" / String / "cast")
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(handlers_movies::movie_cast);

    let get_movie = warp::path!("movies" / String)
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(handlers_movies::get_movie);

    let update_movie = warp::path!("movies" / String)
        .and(warp::put())
        .and(warp::body::json())
        .and(with_store(store.clone()))
        .and_then(handlers_movies::update_movie);

    let delete_movie = warp::path!("movies" / String)
        .and(warp::delete())
        .and(with_store(store.clone()))
        .and_then(handlers_movies::delete_movie);

    let actor_in_movie = warp::path!("actor_in_movie")
        .and(warp::post())
        .and(warp::body::json())
        .and(with_store(store.clone()))
        .and_then(handlers_movies::add_actor_to_movie);

    let add_from_tmdb = warp::path!("add_actor_from_tmdb" / String)
        .and(warp::post())
        .and(with_store(store.clone()))
        .and(with_tmdb(tmdb.clone()))
        .and_then(handlers_tmdb::add_actor_from_tmdb);

    let movie_poster = warp::path!("movie" / "poster" / String)
        .and(warp::get())
        .and(with_tmdb(tmdb.clone()))
        .and_then(handlers_tmdb::movie_poster);

    let seed_actors = warp::path!("seed_actors")
        .and(warp::post())
        .and(with_store(store))
        .and(with_tmdb(tmdb))
        .and_then(handlers_tmdb::seed_actors);

    // The original enables CORS for its browser frontend.
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST", "PUT", "DELETE"]);

    root.or(health)
        .or(autocomplete)
        .or(search)
        .or(actor_filmography)
        .or(create_actor)
        .or(list_actors)
        .or(get_actor)
        .or(update_actor)
        .or(delete_actor)
        .or(movie_cast)
        .or(create_movie)
        .or(list_movies)
        .or(get_movie)
        .or(update_movie)
        .or(delete_movie)
        .or(actor_in_movie)
        .or(add_from_tmdb)
        .or(movie_poster)
        .or(seed_actors)
        .recover(handle_rejection)
        .with(cors)
}

/// Turn warp's own rejections into the same JSON error shape the
/// handlers use.
async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, detail) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "route not found".to_string())
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, e.to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "method not allowed".to_string(),
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unhandled rejection".to_string(),
        )
    };
    Ok(warp::reply::with_status(
        warp::reply::json(&serde_json::json!({ "detail": detail })),
        status,
    ))
}
