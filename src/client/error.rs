#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to fetch input data: {status}")]
    Status {
        status: reqwest::StatusCode,
        url: reqwest::Url,
    },

    #[error(transparent)]
    Url(#[from] url::ParseError),

    #[error("other reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("couldn't read input: {0}")]
    Io(#[from] std::io::Error),
}
