// tmdb/src/mapping.rs
//! Pure mapping from TMDB wire shapes to the local node shapes.

use models::{Actor, Movie};

use crate::types::{CastCredit, PersonDetails};

/// TMDB encodes gender as an integer: 2 is male, 1 is female, anything
/// else (0 "not set", 3 "non-binary") stays unspecified.
pub fn gender_label(code: i64) -> Option<String> {
    match code {
        2 => Some("Male".to_string()),
        1 => Some("Female".to_string()),
        _ => None,
    }
}

/// The year is the first four characters of a TMDB release date
/// ("1994-07-06" -> "1994"). Credits without a release date carry no
/// year and are excluded from the filmography.
pub fn credit_year(release_date: &str) -> Option<String> {
    release_date.get(..4).map(str::to_string)
}

fn credit_to_movie(credit: &CastCredit) -> Option<Movie> {
    let date = credit.release_date.as_deref().unwrap_or("");
    let year = credit_year(date)?;
    Some(Movie {
        title: credit.title.clone(),
        year,
    })
}

/// An actor plus filmography as mapped from a person-details response.
#[derive(Debug, Clone)]
pub struct ActorProfile {
    pub actor: Actor,
    pub filmography: Vec<Movie>,
}

pub fn map_person(details: &PersonDetails) -> ActorProfile {
    let filmography = details
        .movie_credits
        .as_ref()
        .map(|credits| credits.cast.iter().filter_map(credit_to_movie).collect())
        .unwrap_or_default();
    ActorProfile {
        actor: Actor {
            name: details.name.clone(),
            date_of_birth: details.birthday.clone(),
            gender: gender_label(details.gender),
            date_of_death: details.deathday.clone(),
            profile_path: details.profile_path.clone(),
        },
        filmography,
    }
}

#[cfg(test)]
mod tests {
    use super::{credit_year, gender_label, map_person};
    use crate::types::PersonDetails;

    #[test]
    fn should_map_gender_codes() {
        assert_eq!(gender_label(2).as_deref(), Some("Male"));
        assert_eq!(gender_label(1).as_deref(), Some("Female"));
        assert_eq!(gender_label(0), None);
        assert_eq!(gender_label(3), None);
    }

    #[test]
    fn should_take_year_from_release_date() {
        assert_eq!(credit_year("1994-07-06").as_deref(), Some("1994"));
        assert_eq!(credit_year(""), None);
        assert_eq!(credit_year("199"), None);
    }

    #[test]
    fn should_map_person_details_and_drop_undated_credits() {
        let details: PersonDetails = serde_json::from_value(serde_json::json!({
            "name": "Tom Hanks",
            "birthday": "1956-07-09",
            "deathday": null,
            "gender": 2,
            "profile_path": "/xndWFsBlClOJFRdhSt4NBwiPq2o.jpg",
            "movie_credits": {
                "cast": [
                    {"title": "Forrest Gump", "release_date": "1994-07-06"},
                    {"title": "Untitled Project", "release_date": ""},
                    {"title": "In Production", "release_date": null},
                    {"title": "Cast Away", "release_date": "2000-12-22"}
                ]
            }
        }))
        .unwrap();

        let profile = map_person(&details);
        assert_eq!(profile.actor.name, "Tom Hanks");
        assert_eq!(profile.actor.gender.as_deref(), Some("Male"));
        assert_eq!(profile.actor.date_of_birth.as_deref(), Some("1956-07-09"));
        assert_eq!(profile.actor.date_of_death, None);
        assert_eq!(profile.filmography.len(), 2);
        assert_eq!(profile.filmography[0].title, "Forrest Gump");
        assert_eq!(profile.filmography[0].year, "1994");
        assert_eq!(profile.filmography[1].year, "2000");
    }

    #[test]
    fn should_tolerate_missing_credit_block() {
        let details: PersonDetails = serde_json::from_value(serde_json::json!({
            "name": "Unknown Person",
            "gender": 1
        }))
        .unwrap();
        let profile = map_person(&details);
        assert_eq!(profile.actor.gender.as_deref(), Some("Female"));
        assert!(profile.filmography.is_empty());
    }
}
