// server/src/config.rs
use std::env;

use store::StoreConfig;
use tmdb::TmdbConfig;

/// Everything the server needs at startup, read from the environment
/// with hardcoded fallbacks. The store and TMDB sections come from their
/// own crates so each layer owns its settings.
#[derive(Clone, Debug)]
pub struct Settings {
    pub http_port: u16,
    pub log_file: String,
    pub store: StoreConfig,
    pub tmdb: TmdbConfig,
}

impl Settings {
    pub fn from_env() -> Self {
        let http_port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(10000);
        Settings {
            http_port,
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "api_log.txt".to_string()),
            store: StoreConfig::from_env(),
            tmdb: TmdbConfig::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Settings;

    #[test]
    fn should_default_port_and_log_file() {
        if std::env::var("PORT").is_err() && std::env::var("LOG_FILE").is_err() {
            let settings = Settings::from_env();
            assert_eq!(settings.http_port, 10000);
            assert_eq!(settings.log_file, "api_log.txt");
        }
    }
}
