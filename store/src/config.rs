// store/src/config.rs
use std::env;

/// Connection settings for the graph store, read from the environment
/// with hardcoded fallbacks matching a default local Neo4j install.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        StoreConfig {
            uri: env::var("NEO4J_URI").unwrap_or_else(|_| "bolt://localhost:7687".to_string()),
            user: env::var("NEO4J_USER").unwrap_or_else(|_| "neo4j".to_string()),
            password: env::var("NEO4J_PASSWORD").unwrap_or_else(|_| "password".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StoreConfig;

    #[test]
    fn should_fall_back_to_local_defaults() {
        // Only meaningful when the variables are unset, which is the
        // normal test environment.
        if std::env::var("NEO4J_URI").is_err() {
            let config = StoreConfig::from_env();
            assert_eq!(config.uri, "bolt://localhost:7687");
            assert_eq!(config.user, "neo4j");
        }
    }
}
