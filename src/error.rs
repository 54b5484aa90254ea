use thiserror::Error;

/// Failures where no usable response ever arrived from the cart service.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("cart request failed")]
    Http(#[from] reqwest::Error),

    #[error("cart service unreachable: {0}")]
    Unreachable(String),
}

#[derive(Debug, Error)]
pub enum CartError {
    #[error("cart request failed")]
    Transport(#[from] TransportError),

    #[error("cart service returned an unreadable reply")]
    Malformed(#[from] serde_json::Error),

    #[error("cart service rejected the request: {0}")]
    Rejected(String),

    #[error("cart service reply was missing the cart payload")]
    Incomplete,
}

pub type CartResult<T> = Result<T, CartError>;
