//! Configuration for the Trellis API service.
//!
//! Loaded from (in priority order): `TRELLIS`-prefixed environment
//! variables with `__` separators, a `trellis.toml` config file,
//! defaults.

use serde::Deserialize;

use trellis_graph::GraphConfig;

/// Top-level API configuration, from the `[api]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Address the HTTP listener binds to.
    #[serde(default = "default_listen")]
    pub listen: String,

    /// One-shot database reset at startup.
    #[serde(default)]
    pub bootstrap: BootstrapConfig,
}

/// Settings for the destructive startup reseed.
#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapConfig {
    /// Whether to wipe and reseed the database before serving.
    /// Leave enabled only against disposable databases.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Path to the Cypher seed script.
    #[serde(default = "default_seed_file")]
    pub file: String,
}

fn default_listen() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_true() -> bool {
    true
}

fn default_seed_file() -> String {
    "data/seed.cypher".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            bootstrap: BootstrapConfig::default(),
        }
    }
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            file: default_seed_file(),
        }
    }
}

/// Load the `[api]` section, falling back to defaults.
pub fn load_api_config(file_prefix: &str) -> anyhow::Result<ApiConfig> {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(
            config::Environment::with_prefix("TRELLIS_API")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    match cfg.get::<ApiConfig>("api") {
        Ok(c) => Ok(c),
        Err(_) => Ok(ApiConfig::default()),
    }
}

/// Load the `[neo4j]` section into a `GraphConfig`.
pub fn load_graph_config(file_prefix: &str) -> GraphConfig {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(
            config::Environment::with_prefix("TRELLIS")
                .separator("__")
                .try_parsing(true),
        )
        .build();

    match cfg {
        Ok(c) => GraphConfig {
            uri: c
                .get_string("neo4j.uri")
                .unwrap_or_else(|_| "bolt://localhost:7687".to_string()),
            user: c
                .get_string("neo4j.user")
                .unwrap_or_else(|_| "neo4j".to_string()),
            password: c
                .get_string("neo4j.password")
                .unwrap_or_else(|_| "trellis-dev".to_string()),
            ..Default::default()
        },
        Err(_) => GraphConfig::default(),
    }
}
