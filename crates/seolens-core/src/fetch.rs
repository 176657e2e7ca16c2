//! HTML fetching
//!
//! Requires the `fetch` feature (needs reqwest)

use std::time::Duration;

use log::debug;
use reqwest::redirect::Policy;
use url::Url;

use crate::error::{Result, SeoError};

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default cap on followed redirects
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Desktop browser identification sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Settings for a single page fetch
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub max_redirects: usize,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl FetchConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }
}

/// Fetch the HTML of one page
///
/// One GET request, no retries. Timeouts, transport errors and non-success
/// statuses all abort with an error; the body is returned as text otherwise.
pub async fn fetch_html(url: &Url, config: &FetchConfig) -> Result<String> {
    let client = reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout)
        .redirect(Policy::limited(config.max_redirects))
        .build()
        .map_err(SeoError::Client)?;

    debug!("fetching {url} (timeout {:?})", config.timeout);

    let fetch_error = |source: reqwest::Error| SeoError::Fetch {
        url: url.to_string(),
        source,
    };

    let response = client
        .get(url.as_str())
        .send()
        .await
        .map_err(fetch_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(SeoError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let html = response.text().await.map_err(fetch_error)?;
    debug!("fetched {} bytes from {url}", html.len());
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serve one canned HTTP response on a local port
    async fn serve_once(response: &'static str) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });

        Url::parse(&format!("http://{addr}/")).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.max_redirects, 5);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 27\r\nConnection: close\r\n\r\n<title>Served page</title>\n",
        )
        .await;

        let html = fetch_html(&url, &FetchConfig::default()).await.unwrap();
        assert!(html.contains("Served page"));
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let url = serve_once(
            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;

        let err = fetch_html(&url, &FetchConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SeoError::HttpStatus { status: 404, .. }));
        assert!(!err.is_validation());
    }

    #[tokio::test]
    async fn test_fetch_sends_browser_user_agent() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (request_tx, request_rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let n = socket.read(&mut buf).await.unwrap_or(0);
            let _ = request_tx.send(String::from_utf8_lossy(&buf[..n]).into_owned());
            let _ = socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\nok")
                .await;
            let _ = socket.shutdown().await;
        });

        let url = Url::parse(&format!("http://{addr}/")).unwrap();
        fetch_html(&url, &FetchConfig::default()).await.unwrap();

        let request = request_rx.await.unwrap();
        let user_agent = request
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("user-agent")
                    .then(|| value.trim().to_string())
            })
            .unwrap();
        assert_eq!(user_agent, DEFAULT_USER_AGENT);
    }

    #[tokio::test]
    async fn test_fetch_gives_up_after_redirect_cap() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            // Every request is answered with another redirect
            for hop in 0.. {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 302 Found\r\nLocation: /hop/{hop}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        let url = Url::parse(&format!("http://{addr}/")).unwrap();
        let config = FetchConfig::default().with_max_redirects(2);
        let err = fetch_html(&url, &config).await.unwrap_err();

        let SeoError::Fetch { source, .. } = &err else {
            panic!("expected a fetch error, got {err:?}");
        };
        assert!(source.is_redirect());
        let mut cause = source.source();
        let mut messages = Vec::new();
        while let Some(inner) = cause {
            messages.push(inner.to_string());
            cause = inner.source();
        }
        assert!(
            messages.iter().any(|m| m.contains("too many redirects")),
            "{messages:?}"
        );
        assert!(!err.is_validation());
    }

    #[tokio::test]
    async fn test_fetch_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            // Accept and hold the connection without answering
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let url = Url::parse(&format!("http://{addr}/")).unwrap();
        let config = FetchConfig::default().with_timeout(Duration::from_millis(200));
        let err = fetch_html(&url, &config).await.unwrap_err();
        assert!(err.is_timeout());
    }
}
