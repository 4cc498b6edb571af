//! Server configuration

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Where reservations are persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseConfig {
    /// PostgreSQL server, assembled from `DB_*` variables or `DATABASE_URL`
    Postgres {
        host: String,
        port: u16,
        user: String,
        password: String,
        database: String,
    },
    /// Postgres URL given verbatim through `DATABASE_URL`
    PostgresUrl(String),
    /// SQLite file or in-memory database (`sqlite:` URL)
    Sqlite(String),
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    /// Pool size for the store
    pub max_connections: u32,
    /// HTTP listening port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// Emit JSON log lines
    pub json_logs: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_vars<F>(var: F) -> Result<Self, BoxError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| var(name).filter(|v| !v.trim().is_empty());

        let database = match non_empty("DATABASE_URL") {
            Some(url) if url.starts_with("sqlite:") => DatabaseConfig::Sqlite(url),
            Some(url) if url.starts_with("postgres:") || url.starts_with("postgresql:") => {
                DatabaseConfig::PostgresUrl(url)
            }
            Some(url) => return Err(format!("Unsupported DATABASE_URL scheme: {url}").into()),
            None => DatabaseConfig::Postgres {
                host: non_empty("DB_HOST").unwrap_or_else(|| "localhost".into()),
                port: non_empty("DB_PORT")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(5432),
                user: non_empty("DB_USER").ok_or("DB_USER must be set")?,
                password: var("DB_PASSWORD").unwrap_or_default(),
                database: non_empty("DB_NAME").ok_or("DB_NAME must be set")?,
            },
        };

        Ok(Self {
            database,
            max_connections: non_empty("DB_MAX_CONNECTIONS")
                .and_then(|p| p.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(5),
            http_port: non_empty("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            environment: non_empty("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            json_logs: non_empty("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json")),
        })
    }

    /// Configuration for an in-memory SQLite store (tests, local runs)
    pub fn in_memory(environment: impl Into<String>) -> Self {
        Self {
            database: DatabaseConfig::Sqlite("sqlite::memory:".into()),
            max_connections: 1,
            http_port: 0,
            environment: environment.into(),
            json_logs: false,
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}
