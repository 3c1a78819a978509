// models/src/movies.rs
use serde::{Deserialize, Serialize};

use crate::actors::Actor;

/// A Movie node. The title is the natural key, the year a plain string
/// (the first four characters of a TMDB release date).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub year: String,
}

/// A movie together with every actor credited in it, ordered by name.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MovieCast {
    pub movie: Movie,
    pub actors: Vec<Actor>,
}

#[cfg(test)]
mod tests {
    use super::Movie;

    #[test]
    fn should_require_title_and_year() {
        assert!(serde_json::from_str::<Movie>(r#"{"title": "Cars"}"#).is_err());
        let movie: Movie =
            serde_json::from_str(r#"{"title": "Cars", "year": "2006"}"#).unwrap();
        assert_eq!(movie.title, "Cars");
        assert_eq!(movie.year, "2006");
    }
}
