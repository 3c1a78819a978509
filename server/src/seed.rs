// server/src/seed.rs
//! Bulk seeding: walk a fixed list of well-known names, import each one
//! from TMDB unless it is already in the graph. Strictly sequential with
//! a fixed delay between TMDB calls (the API allows 40 requests per
//! 10 seconds); per-name failures are logged and the run keeps going.

use std::time::Duration;

use log::{error, info};
use models::{ApiResult, SeedSummary};
use store::GraphStore;
use tmdb::TmdbClient;
use tokio::time::sleep;

use crate::enrich::import_actor;

const THROTTLE: Duration = Duration::from_millis(250);

/// 100 famous actors used to bootstrap an empty database.
pub const SEED_ACTORS: [&str; 100] = [
    "Tom Hanks",
    "Meryl Streep",
    "Leonardo DiCaprio",
    "Denzel Washington",
    "Morgan Freeman",
    "Robert De Niro",
    "Al Pacino",
    "Brad Pitt",
    "Johnny Depp",
    "Tom Cruise",
    "Will Smith",
    "Scarlett Johansson",
    "Jennifer Lawrence",
    "Angelina Jolie",
    "Julia Roberts",
    "Nicole Kidman",
    "Cate Blanchett",
    "Kate Winslet",
    "Anne Hathaway",
    "Natalie Portman",
    "Emma Stone",
    "Charlize Theron",
    "Sandra Bullock",
    "Matt Damon",
    "Ben Affleck",
    "George Clooney",
    "Christian Bale",
    "Hugh Jackman",
    "Ryan Gosling",
    "Ryan Reynolds",
    "Chris Hemsworth",
    "Chris Evans",
    "Chris Pratt",
    "Robert Downey Jr.",
    "Mark Ruffalo",
    "Jeremy Renner",
    "Samuel L. Jackson",
    "Harrison Ford",
    "Mark Hamill",
    "Carrie Fisher",
    "Sigourney Weaver",
    "Jodie Foster",
    "Anthony Hopkins",
    "Michael Caine",
    "Ian McKellen",
    "Patrick Stewart",
    "Gary Oldman",
    "Daniel Day-Lewis",
    "Joaquin Phoenix",
    "Heath Ledger",
    "Jake Gyllenhaal",
    "Tobey Maguire",
    "Andrew Garfield",
    "Tom Holland",
    "Zendaya",
    "Daniel Craig",
    "Saoirse Ronan",
    "Florence Pugh",
    "Margot Robbie",
    "Emily Blunt",
    "John Krasinski",
    "Steve Carell",
    "Jim Carrey",
    "Adam Sandler",
    "Ben Stiller",
    "Owen Wilson",
    "Eddie Murphy",
    "Kevin Hart",
    "Dwayne Johnson",
    "Jason Statham",
    "Vin Diesel",
    "Keanu Reeves",
    "Laurence Fishburne",
    "Hugo Weaving",
    "Russell Crowe",
    "Mel Gibson",
    "Liam Neeson",
    "Ewan McGregor",
    "Colin Firth",
    "Hugh Grant",
    "Emma Watson",
    "Daniel Radcliffe",
    "Rupert Grint",
    "Helena Bonham Carter",
    "Ralph Fiennes",
    "Alan Rickman",
    "Maggie Smith",
    "Judi Dench",
    "Helen Mirren",
    "Emma Thompson",
    "Colin Farrell",
    "Brendan Gleeson",
    "Cillian Murphy",
    "Michael Fassbender",
    "Viola Davis",
    "Octavia Spencer",
    "Halle Berry",
    "Jamie Foxx",
    "Forest Whitaker",
    "Gal Gadot",
];

/// Run the whole seed list. Always returns a summary; only a failure to
/// even reach the store for the existence check aborts a given name, and
/// that too is just counted and logged.
pub async fn seed_all(store: &GraphStore, tmdb: &TmdbClient) -> ApiResult<SeedSummary> {
    let mut summary = SeedSummary {
        requested: SEED_ACTORS.len(),
        ..SeedSummary::default()
    };

    for name in SEED_ACTORS {
        match store.find_actor(name).await {
            Ok(Some(_)) => {
                summary.skipped += 1;
                continue;
            }
            Ok(None) => {}
            Err(e) => {
                error!("Seed existence check failed for {}: {}", name, e);
                summary.failed += 1;
                summary.failures.push(name.to_string());
                continue;
            }
        }

        match import_actor(store, tmdb, name).await {
            Ok(_) => summary.seeded += 1,
            Err(e) => {
                error!("Seeding {} failed: {}", name, e);
                summary.failed += 1;
                summary.failures.push(name.to_string());
            }
        }
        sleep(THROTTLE).await;
    }

    info!(
        "Seed finished: {} seeded, {} skipped, {} failed",
        summary.seeded, summary.skipped, summary.failed
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::SEED_ACTORS;
    use std::collections::HashSet;

    #[test]
    fn should_seed_one_hundred_unique_names() {
        assert_eq!(SEED_ACTORS.len(), 100);
        let unique: HashSet<&str> = SEED_ACTORS.iter().copied().collect();
        assert_eq!(unique.len(), SEED_ACTORS.len());
        assert!(SEED_ACTORS.iter().all(|name| !name.trim().is_empty()));
    }
}
