use std::path::{Path, PathBuf};

use tokio::io::AsyncReadExt;

use crate::{
    config::{Config, Session},
    puzzle::PuzzleId,
};

mod url;
pub use self::url::PuzzleUrl;

mod error;
pub use error::FetchError;

type Result<T, E = FetchError> = std::result::Result<T, E>;

/// Downloads personal puzzle inputs.
#[derive(Debug, Clone)]
pub struct InputClient {
    client: reqwest::Client,
    base_url: ::url::Url,
    session: Option<Session>,
}

impl InputClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            session: config.session().cloned(),
        })
    }

    pub fn url(&self, id: PuzzleId) -> PuzzleUrl {
        PuzzleUrl::new(self.base_url.clone(), id)
    }

    #[tracing::instrument(skip(self))]
    pub async fn fetch(&self, id: PuzzleId) -> Result<String> {
        let url = self.url(id).reqwest()?;

        let mut request = self.client.get(url.clone());

        match &self.session {
            Some(session) => request = request.header(reqwest::header::COOKIE, session.cookie()),
            None => tracing::warn!(
                "no session configured, set ADVENT_SESSION or `session` in advent.toml"
            ),
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::warn!(%status, %url, "input request was refused");
            return Err(FetchError::Status { status, url });
        }

        let text = response.text().await?;
        tracing::debug!(bytes = text.len(), "fetched input");

        Ok(text)
    }
}

/// Where a puzzle's input text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Remote(PuzzleId),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    pub fn new(id: PuzzleId, path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if path == Path::new("-") => Self::Stdin,
            Some(path) => Self::File(path),
            None => Self::Remote(id),
        }
    }

    pub async fn read(&self, client: &InputClient) -> Result<String> {
        match self {
            Self::Remote(id) => client.fetch(*id).await,
            Self::File(path) => {
                tracing::debug!(?path, "reading input file");
                Ok(tokio::fs::read_to_string(path).await?)
            }
            Self::Stdin => {
                let mut text = String::new();
                tokio::io::stdin().read_to_string(&mut text).await?;
                Ok(text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::{assert_eq, assert_str_eq};
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
        task::JoinHandle,
    };
    use tracing_test::traced_test;

    use super::*;

    /// Answers a single HTTP request with `response`, returning what was requested.
    async fn serve_once(response: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("binding to localhost should not fail");
        let addr = listener
            .local_addr()
            .expect("listener should have an address");

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("client should connect");

            let mut buf = vec![0; 4096];
            let read = socket.read(&mut buf).await.expect("request should be readable");

            socket
                .write_all(response.as_bytes())
                .await
                .expect("response should be writable");
            socket.shutdown().await.ok();

            String::from_utf8_lossy(&buf[..read]).into_owned()
        });

        (format!("http://{addr}"), handle)
    }

    fn client(base_url: &str, session: Option<&str>) -> InputClient {
        let mut toml = format!("base_url = \"{base_url}\"\n");
        if let Some(session) = session {
            toml.push_str(&format!("session = \"{session}\"\n"));
        }

        let config = Config::from_toml(&toml).expect("test config should load");
        InputClient::new(&config).expect("client should build")
    }

    #[tokio::test]
    async fn fetch_sends_session_cookie() {
        let (base, server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 5\r\nConnection: close\r\n\r\n(())\n",
        )
        .await;

        let text = client(&base, Some("53616c7465640a"))
            .fetch(PuzzleId::new(2015, 1))
            .await
            .expect("fetch should succeed");

        assert_str_eq!(text, "(())\n");

        let request = server.await.expect("server task should finish").to_lowercase();
        assert!(request.starts_with("get /2015/day/1/input "), "{request}");
        assert!(request.contains("cookie: session=53616c7465640a"), "{request}");
        assert!(request.contains("user-agent: advent/"), "{request}");
    }

    #[tokio::test]
    #[traced_test]
    async fn error_status_is_reported() {
        let (base, server) = serve_once(
            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;

        let err = client(&base, None)
            .fetch(PuzzleId::new(2025, 6))
            .await
            .expect_err("fetch should fail");

        assert!(matches!(
            err,
            FetchError::Status { status, .. } if status == reqwest::StatusCode::NOT_FOUND
        ));
        assert_str_eq!(err.to_string(), "failed to fetch input data: 404 Not Found");

        let request = server.await.expect("server task should finish").to_lowercase();
        assert!(!request.contains("cookie:"), "{request}");
        assert!(logs_contain("no session configured"));
    }

    #[tokio::test]
    async fn file_source() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "2x3x4\n").expect("input should be written");

        let source = InputSource::new(PuzzleId::new(2015, 2), Some(path.clone()));
        assert_eq!(source, InputSource::File(path));

        let text = source
            .read(&client("http://127.0.0.1:9", None))
            .await
            .expect("file should be read");

        assert_str_eq!(text, "2x3x4\n");
    }

    #[test]
    fn dash_means_stdin() {
        let id = PuzzleId::new(2024, 1);

        assert_eq!(InputSource::new(id, Some(PathBuf::from("-"))), InputSource::Stdin);
        assert_eq!(InputSource::new(id, None), InputSource::Remote(id));
    }
}
