use thiserror::Error;

/// Failures from the harness's IO edges: config files, result files,
/// and engine spec parsing. Game play itself is infallible.
#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config in {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to encode or decode results: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("unknown engine spec '{0}' (expected random, material, or minimax[:depth])")]
    UnknownEngine(String),
}
