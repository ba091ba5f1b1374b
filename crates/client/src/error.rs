use common::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),
    #[error("server rejected the request: {0}")]
    Rejected(String),
    #[error("server replied with status {0}")]
    Status(u16),
    #[error("malformed reply: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unexpected reply: {0}")]
    Model(#[from] ModelError),
}

/// Board dimensions typed into the form that cannot start a game.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{field} must be a positive whole number, got {value:?}")]
pub struct InvalidDimensions {
    pub field: &'static str,
    pub value: String,
}
