use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server rejected the request ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid server URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Server URL cannot be used as a base")]
    BadServerUrl,
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
