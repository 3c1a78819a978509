// store/src/actors.rs
use log::info;
use models::{Actor, ActorFilmography, ApiError, ApiResult, Movie};
use neo4rs::query;

use crate::movies::movie_from_node;
use crate::GraphStore;

/// Parse a returned `Actor` node into the shared model. Optional
/// properties simply come back as `None` when absent on the node.
pub(crate) fn actor_from_node(n: &neo4rs::Node) -> ApiResult<Actor> {
    let name: String = n
        .get("name")
        .map_err(|e| ApiError::Store(format!("Actor node missing name: {}", e)))?;
    Ok(Actor {
        name,
        date_of_birth: n.get("date_of_birth").ok(),
        gender: n.get("gender").ok(),
        date_of_death: n.get("date_of_death").ok(),
        profile_path: n.get("profile_path").ok(),
    })
}

impl GraphStore {
    /// Plain CREATE — no merge, so duplicate names are possible, exactly
    /// as in the original API.
    pub async fn create_actor(&self, actor: &Actor) -> ApiResult<()> {
        let q = query(
            "CREATE (a:Actor {
                name: $name,
                date_of_birth: $date_of_birth,
                gender: $gender,
                date_of_death: $date_of_death,
                profile_path: $profile_path
            })",
        )
        .param("name", actor.name.as_str())
        .param("date_of_birth", actor.date_of_birth.clone())
        .param("gender", actor.gender.clone())
        .param("date_of_death", actor.date_of_death.clone())
        .param("profile_path", actor.profile_path.clone());
        self.graph().run(q).await?;
        info!("Actor created: {}", actor.name);
        Ok(())
    }

    /// MERGE on the natural key, then SET the remaining properties.
    /// Used by the enrichment pathway so re-importing a person never
    /// duplicates the node.
    pub async fn upsert_actor(&self, actor: &Actor) -> ApiResult<()> {
        let q = query(
            "MERGE (a:Actor {name: $name})
             SET a.date_of_birth = $date_of_birth,
                 a.gender = $gender,
                 a.date_of_death = $date_of_death,
                 a.profile_path = $profile_path",
        )
        .param("name", actor.name.as_str())
        .param("date_of_birth", actor.date_of_birth.clone())
        .param("gender", actor.gender.clone())
        .param("date_of_death", actor.date_of_death.clone())
        .param("profile_path", actor.profile_path.clone());
        self.graph().run(q).await?;
        info!("Actor upserted: {}", actor.name);
        Ok(())
    }

    /// First match by name, or not-found.
    pub async fn get_actor(&self, name: &str) -> ApiResult<Actor> {
        self.find_actor(name)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Actor {}", name)))
    }

    /// Like `get_actor` but absence is not an error. The seed loop uses
    /// this to skip names that are already present.
    pub async fn find_actor(&self, name: &str) -> ApiResult<Option<Actor>> {
        let q = query("MATCH (a:Actor {name: $name}) RETURN a LIMIT 1")
            .param("name", name);
        let mut rows = self.graph().execute(q).await?;
        match rows.next().await? {
            Some(row) => {
                let node: neo4rs::Node = row.get("a")?;
                Ok(Some(actor_from_node(&node)?))
            }
            None => Ok(None),
        }
    }

    /// All actors ordered by name, optionally capped.
    pub async fn list_actors(&self, limit: Option<i64>) -> ApiResult<Vec<Actor>> {
        let q = match limit {
            Some(n) => query("MATCH (a:Actor) RETURN a ORDER BY a.name LIMIT $limit")
                .param("limit", n),
            None => query("MATCH (a:Actor) RETURN a ORDER BY a.name"),
        };
        let mut rows = self.graph().execute(q).await?;
        let mut actors = Vec::new();
        while let Some(row) = rows.next().await? {
            let node: neo4rs::Node = row.get("a")?;
            actors.push(actor_from_node(&node)?);
        }
        Ok(actors)
    }

    /// Replace the property set of the first node matching the name.
    /// Absent optional fields in the submitted body clear the stored
    /// property. Not-found when no node matches.
    pub async fn update_actor(&self, name: &str, actor: &Actor) -> ApiResult<Actor> {
        let q = query(
            "MATCH (a:Actor {name: $name})
             WITH a LIMIT 1
             SET a.name = $new_name,
                 a.date_of_birth = $date_of_birth,
                 a.gender = $gender,
                 a.date_of_death = $date_of_death,
                 a.profile_path = $profile_path
             RETURN a",
        )
        .param("name", name)
        .param("new_name", actor.name.as_str())
        .param("date_of_birth", actor.date_of_birth.clone())
        .param("gender", actor.gender.clone())
        .param("date_of_death", actor.date_of_death.clone())
        .param("profile_path", actor.profile_path.clone());
        let mut rows = self.graph().execute(q).await?;
        match rows.next().await? {
            Some(row) => {
                let node: neo4rs::Node = row.get("a")?;
                info!("Actor updated: {}", name);
                actor_from_node(&node)
            }
            None => Err(ApiError::NotFound(format!("Actor {}", name))),
        }
    }

    /// DETACH DELETE by name, cascading to incident ACTED_IN edges.
    pub async fn delete_actor(&self, name: &str) -> ApiResult<()> {
        let q = query(
            "MATCH (a:Actor {name: $name})
             DETACH DELETE a
             RETURN count(a) AS removed",
        )
        .param("name", name);
        let mut rows = self.graph().execute(q).await?;
        let removed: i64 = match rows.next().await? {
            Some(row) => row.get("removed")?,
            None => 0,
        };
        if removed == 0 {
            return Err(ApiError::NotFound(format!("Actor {}", name)));
        }
        info!("Actor deleted: {}", name);
        Ok(())
    }

    /// Actor plus movies in one traversal, ordered by year descending
    /// then title. An actor with no credits yields an empty list.
    pub async fn actor_filmography(&self, name: &str) -> ApiResult<ActorFilmography> {
        let q = query(
            "MATCH (a:Actor {name: $name})
             OPTIONAL MATCH (a)-[:ACTED_IN]->(m:Movie)
             WITH a, m ORDER BY m.year DESC, m.title
             RETURN a, collect(m) AS movies",
        )
        .param("name", name);
        let mut rows = self.graph().execute(q).await?;
        match rows.next().await? {
            Some(row) => {
                let actor_node: neo4rs::Node = row.get("a")?;
                let movie_nodes: Vec<neo4rs::Node> = row.get("movies").unwrap_or_default();
                let movies = movie_nodes
                    .iter()
                    .map(movie_from_node)
                    .collect::<ApiResult<Vec<Movie>>>()?;
                Ok(ActorFilmography {
                    actor: actor_from_node(&actor_node)?,
                    movies,
                })
            }
            None => Err(ApiError::NotFound(format!("Actor {}", name))),
        }
    }
}
