#[derive(Debug, thiserror::Error)]
pub enum ScallopError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Numerical error: {0}")]
    Numerical(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScallopError>;
