use std::path::PathBuf;
use thiserror::Error;

pub type BenchResult<T> = Result<T, BenchError>;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Division by zero: measurement '{label}' took 0s, ratio is undefined")]
    ZeroDuration { label: String },

    // Computation failure inside the interpreted runtime.
    #[error("Lua runtime error: {0}")]
    Lua(#[from] mlua::Error),

    #[error("Failed to read config file '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
