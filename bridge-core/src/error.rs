use thiserror::Error;

/// Top-level error. Config, Auth and Subscription are fatal at startup; Completion is
/// isolated to the event that caused it.
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Subscription error: {0}")]
    Subscription(String),

    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid service account credentials: {0}")]
    InvalidCredentials(String),

    #[error("Invalid signing key: {0}")]
    InvalidKey(String),

    #[error("Token request failed: {0}")]
    TokenRequest(String),

    #[error("Token endpoint rejected the request: {0}")]
    TokenRejected(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Empty question")]
    EmptyQuestion,

    #[error("Completion response has no candidates")]
    NoCandidates,

    #[error("Completion request failed: {0}")]
    Request(#[source] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
