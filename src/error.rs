use thiserror::Error;

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum GaugeError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("catalog parse error: {0}")]
    CatalogParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("keyword pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, GaugeError>;
