use thiserror::Error;

/// Everything that can go wrong between issuing the menu request and holding
/// a normalized [`Menu`](crate::menu::Menu).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Menu endpoint '{url}' returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Malformed menu response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Menu response contained no restaurants")]
    NoRestaurant,
}
