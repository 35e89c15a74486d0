//! HTTP content source: fetch a URL and extract its text

use super::html::html_to_text;
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use std::time::Duration;
use tmclass_application::{AcquisitionError, ContentSource};
use tracing::{debug, info};

/// Maximum response body size (5 MB)
pub const MAX_BODY_SIZE: usize = 5 * 1024 * 1024;

/// [`ContentSource`] backed by reqwest
///
/// One GET per call, no retries. HTML bodies are reduced with
/// [`html_to_text`]; other bodies are decoded as UTF-8 (lossy) and passed through.
pub struct HttpContentSource {
    client: reqwest::Client,
    timeout: Duration,
    user_agent: String,
}

impl HttpContentSource {
    pub fn new(timeout: Duration, user_agent: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout,
            user_agent: user_agent.into(),
        }
    }

    fn map_error(url: &str, error: reqwest::Error) -> AcquisitionError {
        if error.is_timeout() {
            AcquisitionError::Timeout {
                url: url.to_string(),
            }
        } else if error.is_body() || error.is_decode() {
            AcquisitionError::Body {
                url: url.to_string(),
                message: error.to_string(),
            }
        } else {
            AcquisitionError::Unreachable {
                url: url.to_string(),
                message: error.to_string(),
            }
        }
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn fetch_text(&self, url: &str) -> Result<String, AcquisitionError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, self.user_agent.as_str())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| Self::map_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AcquisitionError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // Check content length
        if let Some(length) = response.content_length()
            && length > MAX_BODY_SIZE as u64
        {
            return Err(AcquisitionError::TooLarge {
                url: url.to_string(),
                bytes: length,
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_ascii_lowercase();

        let body = response.bytes().await.map_err(|e| Self::map_error(url, e))?;
        if body.len() > MAX_BODY_SIZE {
            return Err(AcquisitionError::TooLarge {
                url: url.to_string(),
                bytes: body.len() as u64,
            });
        }

        let body_str = String::from_utf8_lossy(&body);
        let is_html = content_type.contains("text/html")
            || content_type.contains("application/xhtml")
            || (content_type.is_empty() && body_str.trim_start().starts_with('<'));

        let text = if is_html {
            html_to_text(&body_str)
        } else {
            body_str.trim().to_string()
        };

        info!(
            "Fetched {} ({} bytes, {} chars of text)",
            url,
            body.len(),
            text.chars().count()
        );
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_http::{serve_once, serve_silently};

    fn source() -> HttpContentSource {
        HttpContentSource::new(Duration::from_secs(5), "tmclass-test/1.0")
    }

    #[tokio::test]
    async fn test_html_page_reduced_to_text() {
        let (base, server) = serve_once(
            "200 OK",
            "text/html; charset=utf-8",
            "<html><head><title>Acme</title></head><body><nav>Menu</nav><p>We sell mugs</p></body></html>",
        )
        .await;

        let text = source().fetch_text(&format!("{}/about", base)).await.unwrap();

        assert_eq!(text, "Acme\n\nWe sell mugs");
        let request = server.await.unwrap();
        assert_eq!(request.request_line(), "GET /about HTTP/1.1");
        assert_eq!(request.header("user-agent"), Some("tmclass-test/1.0"));
    }

    #[tokio::test]
    async fn test_plain_text_passes_through() {
        let (base, _server) = serve_once("200 OK", "text/plain", "  Coffee roasting  \n").await;
        let text = source().fetch_text(&base).await.unwrap();
        assert_eq!(text, "Coffee roasting");
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let (base, _server) = serve_once("404 Not Found", "text/html", "missing").await;

        let err = source().fetch_text(&base).await.unwrap_err();

        assert_eq!(
            err,
            AcquisitionError::HttpStatus {
                url: base.clone(),
                status: 404
            }
        );
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_slow_server_times_out() {
        let base = serve_silently(Duration::from_secs(5)).await;
        let source = HttpContentSource::new(Duration::from_millis(200), "tmclass-test/1.0");

        let err = source.fetch_text(&base).await.unwrap_err();

        assert_eq!(err, AcquisitionError::Timeout { url: base });
    }

    #[tokio::test]
    async fn test_unreachable_host() {
        // Bind then drop to get a port nothing listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let err = source().fetch_text(&url).await.unwrap_err();

        assert!(matches!(err, AcquisitionError::Unreachable { .. }));
        assert_eq!(err.url(), url);
    }
}
