use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EpirusError {
    #[error("configuration missing: {0} is not set")]
    ConfigurationMissing(&'static str),

    #[error("config file {path}: {message}")]
    ConfigFile { path: PathBuf, message: String },

    #[error("unknown network: {0}")]
    UnknownNetwork(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("invalid block parameter: {0}")]
    InvalidBlockParameter(String),

    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EpirusError>;
