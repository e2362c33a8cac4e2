use std::str::FromStr;
use std::time::Duration;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `APP_PORT`             | `8080`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let cors_origins = parse_origins(&env_or("CORS_ORIGINS", "http://localhost:5173"));

        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: parse_env("APP_PORT", "8080"),
            cors_origins,
            request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS", "30"),
        }
    }
}

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Full connection URL.
    pub url: String,
    /// Pool size (default: `10`).
    pub max_connections: u32,
    /// Connection attempts before startup gives up (default: `10`).
    pub connect_attempts: u32,
    /// Pause between connection attempts (default: 2 seconds).
    pub connect_retry_interval: Duration,
}

impl DatabaseConfig {
    /// Load database settings from environment variables.
    ///
    /// `DATABASE_URL` wins when set. Otherwise the URL is assembled from
    /// `DB_HOST` (`localhost`), `DB_PORT` (`5432`), `DB_USER` (`postgres`),
    /// `DB_PASSWORD` (empty) and `DB_NAME` (`watchlist`).
    ///
    /// | Env Var                 | Default |
    /// |-------------------------|---------|
    /// | `DB_MAX_CONNECTIONS`    | `10`    |
    /// | `DB_CONNECT_ATTEMPTS`   | `10`    |
    /// | `DB_CONNECT_RETRY_SECS` | `2`     |
    pub fn from_env() -> Self {
        let url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            compose_url(
                &env_or("DB_HOST", "localhost"),
                &env_or("DB_PORT", "5432"),
                &env_or("DB_USER", "postgres"),
                &env_or("DB_PASSWORD", ""),
                &env_or("DB_NAME", "watchlist"),
            )
        });

        Self {
            url,
            max_connections: parse_env("DB_MAX_CONNECTIONS", "10"),
            connect_attempts: parse_env("DB_CONNECT_ATTEMPTS", "10"),
            connect_retry_interval: Duration::from_secs(parse_env("DB_CONNECT_RETRY_SECS", "2")),
        }
    }
}

/// Build a PostgreSQL URL from its parts. An empty password is omitted.
pub fn compose_url(host: &str, port: &str, user: &str, password: &str, name: &str) -> String {
    if password.is_empty() {
        format!("postgres://{user}@{host}:{port}/{name}")
    } else {
        format!("postgres://{user}:{password}@{host}:{port}/{name}")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

/// Read and parse an env var. Panics on a malformed value so bad
/// configuration stops the process at startup.
fn parse_env<T>(key: &str, default: &str) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_or(key, default)
        .parse()
        .unwrap_or_else(|e| panic!("{key} is invalid: {e}"))
}
