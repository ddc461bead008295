//! Configuration management for Estante Server

use serde::Deserialize;
use std::env;

/// Fallback listen port when neither the CLI argument nor `PORT` is set
pub const DEFAULT_PORT: u16 = 3000;

const DEFAULT_REVIEWS_ENDPOINT: &str = "https://api.nytimes.com/svc/books/v3/reviews.json";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub reviews: ReviewsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewsConfig {
    pub endpoint: String,
    pub api_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: DEFAULT_PORT,
            },
            database: DatabaseConfig {
                host: "localhost".to_string(),
                port: 3306,
                database: "goodreads".to_string(),
                user: String::new(),
                password: String::new(),
            },
            reviews: ReviewsConfig {
                endpoint: DEFAULT_REVIEWS_ENDPOINT.to_string(),
                api_key: String::new(),
            },
        }
    }
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// The listen port takes the first CLI argument over the `PORT`
    /// variable over the default. The API key defaults to empty; an
    /// unset key is sent as-is and left for the upstream to reject.
    pub fn from_env() -> Self {
        Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: resolve_port(env::args().nth(1), env::var("PORT").ok()),
            },
            database: DatabaseConfig {
                host: env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
                port: env::var("DB_PORT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(3306),
                database: env::var("DB_NAME").unwrap_or_else(|_| "goodreads".to_string()),
                user: env::var("DB_USER").unwrap_or_default(),
                password: env::var("DB_PASSWORD").unwrap_or_default(),
            },
            reviews: ReviewsConfig {
                endpoint: env::var("REVIEWS_API_URL")
                    .unwrap_or_else(|_| DEFAULT_REVIEWS_ENDPOINT.to_string()),
                api_key: env::var("REVIEWS_API_KEY").unwrap_or_default(),
            },
        }
    }
}

/// Resolve the listen port: CLI argument over `PORT` over the default
fn resolve_port(cli_arg: Option<String>, env_port: Option<String>) -> u16 {
    cli_arg
        .and_then(|v| v.parse().ok())
        .or_else(|| env_port.and_then(|v| v.parse().ok()))
        .unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_argument_wins() {
        let port = resolve_port(Some("8080".to_string()), Some("4000".to_string()));
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_env_port_when_no_argument() {
        let port = resolve_port(None, Some("4000".to_string()));
        assert_eq!(port, 4000);
    }

    #[test]
    fn test_default_port() {
        assert_eq!(resolve_port(None, None), DEFAULT_PORT);
    }

    #[test]
    fn test_unparseable_values_fall_through() {
        let port = resolve_port(Some("not-a-port".to_string()), Some("4000".to_string()));
        assert_eq!(port, 4000);
        assert_eq!(resolve_port(Some("x".to_string()), None), DEFAULT_PORT);
    }
}
