use std::path::PathBuf;

use reqwest::StatusCode;

use crate::DecodeError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to read forecast file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to reach forecast endpoint: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Forecast endpoint responded with status: {0}")]
    Http(StatusCode),
    #[error("Failed to parse forecast document: {0}")]
    Parse(#[from] DecodeError),
    #[error("Forecast document has no time intervals")]
    EmptyForecast,
    #[error("Failed to load settings: {0}")]
    Config(String),
}
