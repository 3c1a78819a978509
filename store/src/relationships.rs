// store/src/relationships.rs
use log::info;
use models::{ApiError, ApiResult};
use neo4rs::query;

use crate::GraphStore;

impl GraphStore {
    /// MERGE an ACTED_IN edge between two existing nodes. Both endpoints
    /// must already exist; repeating the call never duplicates the edge.
    pub async fn merge_acted_in(&self, actor_name: &str, movie_title: &str) -> ApiResult<()> {
        // Both lookups first so the caller gets a precise not-found.
        if self.find_actor(actor_name).await?.is_none() {
            return Err(ApiError::NotFound(format!("Actor {}", actor_name)));
        }
        let q = query(
            "MATCH (a:Actor {name: $name}), (m:Movie {title: $title})
             MERGE (a)-[:ACTED_IN]->(m)
             RETURN count(m) AS matched",
        )
        .param("name", actor_name)
        .param("title", movie_title);
        let mut rows = self.graph().execute(q).await?;
        let matched: i64 = match rows.next().await? {
            Some(row) => row.get("matched")?,
            None => 0,
        };
        if matched == 0 {
            return Err(ApiError::NotFound(format!("Movie {}", movie_title)));
        }
        info!("Relationship added: {} ACTED_IN {}", actor_name, movie_title);
        Ok(())
    }
}
