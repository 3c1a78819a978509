// store/src/movies.rs
use log::info;
use models::{Actor, ApiError, ApiResult, Movie, MovieCast};
use neo4rs::query;

use crate::actors::actor_from_node;
use crate::GraphStore;

pub(crate) fn movie_from_node(n: &neo4rs::Node) -> ApiResult<Movie> {
    let title: String = n
        .get("title")
        .map_err(|e| ApiError::Store(format!("Movie node missing title: {}", e)))?;
    Ok(Movie {
        title,
        year: n.get("year").unwrap_or_default(),
    })
}

impl GraphStore {
    pub async fn create_movie(&self, movie: &Movie) -> ApiResult<()> {
        let q = query("CREATE (m:Movie {title: $title, year: $year})")
            .param("title", movie.title.as_str())
            .param("year", movie.year.as_str());
        self.graph().run(q).await?;
        info!("Movie created: {}", movie.title);
        Ok(())
    }

    /// MERGE on title; enrichment re-imports the same filmography without
    /// duplicating movie nodes.
    pub async fn upsert_movie(&self, movie: &Movie) -> ApiResult<()> {
        let q = query("MERGE (m:Movie {title: $title}) SET m.year = $year")
            .param("title", movie.title.as_str())
            .param("year", movie.year.as_str());
        self.graph().run(q).await?;
        Ok(())
    }

    pub async fn get_movie(&self, title: &str) -> ApiResult<Movie> {
        let q = query("MATCH (m:Movie {title: $title}) RETURN m LIMIT 1")
            .param("title", title);
        let mut rows = self.graph().execute(q).await?;
        match rows.next().await? {
            Some(row) => {
                let node: neo4rs::Node = row.get("m")?;
                movie_from_node(&node)
            }
            None => Err(ApiError::NotFound(format!("Movie {}", title))),
        }
    }

    pub async fn list_movies(&self, limit: Option<i64>) -> ApiResult<Vec<Movie>> {
        let q = match limit {
            Some(n) => query("MATCH (m:Movie) RETURN m ORDER BY m.title LIMIT $limit")
                .param("limit", n),
            None => query("MATCH (m:Movie) RETURN m ORDER BY m.title"),
        };
        let mut rows = self.graph().execute(q).await?;
        let mut movies = Vec::new();
        while let Some(row) = rows.next().await? {
            let node: neo4rs::Node = row.get("m")?;
            movies.push(movie_from_node(&node)?);
        }
        Ok(movies)
    }

    pub async fn update_movie(&self, title: &str, movie: &Movie) -> ApiResult<Movie> {
        let q = query(
            "MATCH (m:Movie {title: $title})
             WITH m LIMIT 1
             SET m.title = $new_title, m.year = $year
             RETURN m",
        )
        .param("title", title)
        .param("new_title", movie.title.as_str())
        .param("year", movie.year.as_str());
        let mut rows = self.graph().execute(q).await?;
        match rows.next().await? {
            Some(row) => {
                let node: neo4rs::Node = row.get("m")?;
                info!("Movie updated: {}", title);
                movie_from_node(&node)
            }
            None => Err(ApiError::NotFound(format!("Movie {}", title))),
        }
    }

    pub async fn delete_movie(&self, title: &str) -> ApiResult<()> {
        let q = query(
            "MATCH (m:Movie {title: $title})
             DETACH DELETE m
             RETURN count(m) AS removed",
        )
        .param("title", title);
        let mut rows = self.graph().execute(q).await?;
        let removed: i64 = match rows.next().await? {
            Some(row) => row.get("removed")?,
            None => 0,
        };
        if removed == 0 {
            return Err(ApiError::NotFound(format!("Movie {}", title)));
        }
        info!("Movie deleted: {}", title);
        Ok(())
    }

    /// Movie plus credited actors in one traversal, ordered by name.
    pub async fn movie_cast(&self, title: &str) -> ApiResult<MovieCast> {
        let q = query(
            "MATCH (m:Movie {title: $title})
             OPTIONAL MATCH (a:Actor)-[:ACTED_IN]->(m)
             WITH m, a ORDER BY a.name
             RETURN m, collect(a) AS cast",
        )
        .param("title", title);
        let mut rows = self.graph().execute(q).await?;
        match rows.next().await? {
            Some(row) => {
                let movie_node: neo4rs::Node = row.get("m")?;
                let actor_nodes: Vec<neo4rs::Node> = row.get("cast").unwrap_or_default();
                let actors = actor_nodes
                    .iter()
                    .map(actor_from_node)
                    .collect::<ApiResult<Vec<Actor>>>()?;
                Ok(MovieCast {
                    movie: movie_from_node(&movie_node)?,
                    actors,
                })
            }
            None => Err(ApiError::NotFound(format!("Movie {}", title))),
        }
    }
}
