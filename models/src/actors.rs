// models/src/actors.rs
use serde::{Deserialize, Serialize};

use crate::movies::Movie;

/// An Actor node. The name is the natural key; the store does not enforce
/// uniqueness, so concurrent creates with the same name can produce
/// duplicates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub name: String,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    /// Absent while the actor is alive.
    #[serde(default)]
    pub date_of_death: Option<String>,
    /// TMDB image reference, e.g. "/kU3B75TyRiCgE270EyZnHjfivoq.jpg".
    #[serde(default)]
    pub profile_path: Option<String>,
}

impl Actor {
    pub fn named(name: impl Into<String>) -> Self {
        Actor {
            name: name.into(),
            date_of_birth: None,
            gender: None,
            date_of_death: None,
            profile_path: None,
        }
    }
}

/// Request body for creating an ACTED_IN edge between existing nodes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActorInMovie {
    pub actor_name: String,
    pub movie_title: String,
}

/// An actor together with every movie they acted in, ordered by year
/// descending then title.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActorFilmography {
    pub actor: Actor,
    pub movies: Vec<Movie>,
}

#[cfg(test)]
mod tests {
    use super::Actor;

    #[test]
    fn should_default_omitted_optional_fields() {
        let actor: Actor = serde_json::from_str(r#"{"name": "Tom Hanks"}"#).unwrap();
        assert_eq!(actor.name, "Tom Hanks");
        assert_eq!(actor.date_of_birth, None);
        assert_eq!(actor.gender, None);
        assert_eq!(actor.date_of_death, None);
        assert_eq!(actor.profile_path, None);
    }

    #[test]
    fn should_round_trip_full_actor() {
        let actor = Actor {
            name: "Tom Hanks".to_string(),
            date_of_birth: Some("1956-07-09".to_string()),
            gender: Some("Male".to_string()),
            date_of_death: None,
            profile_path: Some("/xndWFsBlClOJFRdhSt4NBwiPq2o.jpg".to_string()),
        };
        let json = serde_json::to_string(&actor).unwrap();
        let back: Actor = serde_json::from_str(&json).unwrap();
        assert_eq!(actor, back);
    }
}
