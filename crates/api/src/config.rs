use shelter_core::kind::{OperationSet, RecordKind};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Maximum pooled database connections (default: `20`).
    pub database_max_connections: u32,
    /// Operations exposed for each record kind.
    pub operations: RecordOperations,
}

/// Which record operations are routed, per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordOperations {
    pub animals: OperationSet,
    pub cats: OperationSet,
    pub dogs: OperationSet,
}

impl RecordOperations {
    pub fn for_kind(&self, kind: RecordKind) -> OperationSet {
        match kind {
            RecordKind::Animal => self.animals,
            RecordKind::Cat => self.cats,
            RecordKind::Dog => self.dogs,
        }
    }

    /// Every operation enabled on every kind.
    pub fn all() -> Self {
        Self {
            animals: OperationSet::all(),
            cats: OperationSet::all(),
            dogs: OperationSet::all(),
        }
    }
}

impl Default for RecordOperations {
    fn default() -> Self {
        Self {
            animals: RecordKind::Animal.default_operations(),
            cats: RecordKind::Cat.default_operations(),
            dogs: RecordKind::Dog.default_operations(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                    |
    /// |----------------------------|----------------------------|
    /// | `HOST`                     | `0.0.0.0`                  |
    /// | `PORT`                     | `3000`                     |
    /// | `CORS_ORIGINS`             | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                       |
    /// | `DATABASE_MAX_CONNECTIONS` | `20`                       |
    /// | `ANIMALS_OPERATIONS`       | `list,get`                 |
    /// | `CATS_OPERATIONS`          | `list,get,create,replace`  |
    /// | `DOGS_OPERATIONS`          | `all`                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "20".into())
            .parse()
            .expect("DATABASE_MAX_CONNECTIONS must be a valid u32");

        let operations = RecordOperations {
            animals: operations_from_env("ANIMALS_OPERATIONS", RecordKind::Animal),
            cats: operations_from_env("CATS_OPERATIONS", RecordKind::Cat),
            dogs: operations_from_env("DOGS_OPERATIONS", RecordKind::Dog),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_max_connections,
            operations,
        }
    }
}

/// Read an operation list from `var`, falling back to the kind's defaults.
fn operations_from_env(var: &str, kind: RecordKind) -> OperationSet {
    match std::env::var(var) {
        Ok(value) => OperationSet::parse(&value)
            .unwrap_or_else(|e| panic!("{var} is invalid: {e}")),
        Err(_) => kind.default_operations(),
    }
}
