//! # Image Lookup
//!
//! Best-effort thumbnail search for a product name against the Pixabay API.
//! Nothing here touches the store, and no failure ever escapes: a missing API
//! key, a network error, a non-2xx status, an undecodable body, and an empty
//! result set all come back as `None`, logged at debug or warn level.
//!
//! ## Request
//!
//! ```text
//! GET https://pixabay.com/api/?key=KEY&q=NAME&image_type=photo&per_page=3&lang=es&safesearch=true
//! ```
//!
//! The first hit's `webformatURL` is the result.
//!
//! ## Concurrency
//!
//! [`ImageLookup::lookup_all`] runs one task per name on whatever tokio
//! runtime is current and returns results in input order. Lookups are
//! independent; one slow or failing request does not affect the others.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

pub const PIXABAY_ENDPOINT: &str = "https://pixabay.com/api/";
pub const RESULTS_PER_PAGE: u32 = 3;
pub const SEARCH_LANGUAGE: &str = "es";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("missing image API key")]
    MissingKey,

    #[error("image API returned HTTP {0}")]
    Status(u16),

    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    #[error("could not build HTTP client: {0}")]
    Client(reqwest::Error),
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
pub struct Hit {
    #[serde(rename = "webformatURL")]
    pub webformat_url: Option<String>,
}

impl SearchResponse {
    pub fn first_image(&self) -> Option<String> {
        self.hits.first().and_then(|hit| hit.webformat_url.clone())
    }
}

#[derive(Debug, Clone)]
pub struct ImageLookup {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl ImageLookup {
    /// Builds the HTTP client. Fails only if TLS setup fails.
    pub fn new(api_key: Option<String>) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(LookupError::Client)?;
        Ok(Self {
            http,
            endpoint: PIXABAY_ENDPOINT.to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn has_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Query string for a lookup of `name`, key excluded.
    pub fn search_params(name: &str) -> Vec<(&'static str, String)> {
        vec![
            ("q", name.to_string()),
            ("image_type", "photo".to_string()),
            ("per_page", RESULTS_PER_PAGE.to_string()),
            ("lang", SEARCH_LANGUAGE.to_string()),
            ("safesearch", "true".to_string()),
        ]
    }

    /// Image URL for `name`, or `None` on any failure.
    pub async fn lookup(&self, name: &str) -> Option<String> {
        match self.try_lookup(name).await {
            Ok(Some(url)) => Some(url),
            Ok(None) => {
                tracing::debug!(name, "no image found");
                None
            }
            Err(LookupError::MissingKey) => {
                tracing::debug!(name, "image lookup skipped: no API key");
                None
            }
            Err(e) => {
                tracing::warn!(name, error = %e, "image lookup failed");
                None
            }
        }
    }

    pub async fn try_lookup(&self, name: &str) -> Result<Option<String>, LookupError> {
        let key = self.api_key.as_deref().ok_or(LookupError::MissingKey)?;

        let mut params = vec![("key", key.to_string())];
        params.extend(Self::search_params(name));

        tracing::debug!(endpoint = %self.endpoint, name, "fetching image");
        let resp = self.http.get(&self.endpoint).query(&params).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body: SearchResponse = resp.json().await?;
        Ok(body.first_image())
    }

    /// Looks up every name concurrently. The result has one entry per name,
    /// in the same order.
    pub async fn lookup_all(&self, names: Vec<String>) -> Vec<Option<String>> {
        if !self.has_key() {
            tracing::debug!("image lookup skipped: no API key");
            return vec![None; names.len()];
        }

        let handles: Vec<_> = names
            .into_iter()
            .map(|name| {
                let lookup = self.clone();
                tokio::spawn(async move { lookup.lookup(&name).await })
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            match handle.await {
                Ok(url) => results.push(url),
                Err(e) => {
                    tracing::warn!(error = %e, "image lookup task failed");
                    results.push(None);
                }
            }
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serves exactly one canned HTTP response and hands back the request
    /// line it received.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let n = socket.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();
            let request_line = request.lines().next().unwrap_or_default().to_string();
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            let _ = tx.send(request_line);
        });

        (format!("http://{}/api/", addr), rx)
    }

    #[test]
    fn test_first_image_takes_first_hit() {
        let body: SearchResponse = serde_json::from_str(
            r#"{"total":2,"hits":[{"webformatURL":"https://img/1.jpg"},{"webformatURL":"https://img/2.jpg"}]}"#,
        )
        .unwrap();
        assert_eq!(body.first_image().as_deref(), Some("https://img/1.jpg"));
    }

    #[test]
    fn test_first_image_empty_hits() {
        let body: SearchResponse = serde_json::from_str(r#"{"hits":[]}"#).unwrap();
        assert!(body.first_image().is_none());

        let body: SearchResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(body.first_image().is_none());
    }

    #[test]
    fn test_search_params() {
        let params = ImageLookup::search_params("Red chair");
        assert!(params.contains(&("q", "Red chair".to_string())));
        assert!(params.contains(&("image_type", "photo".to_string())));
        assert!(params.contains(&("per_page", "3".to_string())));
        assert!(params.contains(&("lang", "es".to_string())));
        assert!(params.contains(&("safesearch", "true".to_string())));
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        assert!(!ImageLookup::new(Some("  ".into())).unwrap().has_key());
        assert!(!ImageLookup::new(None).unwrap().has_key());
        assert!(ImageLookup::new(Some("abc".into())).unwrap().has_key());
    }

    #[tokio::test]
    async fn test_missing_key_degrades_to_none() {
        let lookup = ImageLookup::new(None).unwrap().with_endpoint("http://127.0.0.1:9/unused");
        assert!(matches!(
            lookup.try_lookup("Widget").await,
            Err(LookupError::MissingKey)
        ));
        assert!(lookup.lookup("Widget").await.is_none());
        assert_eq!(
            lookup.lookup_all(vec!["a".into(), "b".into()]).await,
            vec![None, None]
        );
    }

    #[tokio::test]
    async fn test_successful_lookup_sends_expected_query() {
        let (endpoint, request) =
            serve_once("200 OK", r#"{"hits":[{"webformatURL":"https://img/widget.jpg"}]}"#).await;
        let lookup = ImageLookup::new(Some("secret".into())).unwrap().with_endpoint(endpoint);

        let url = lookup.lookup("Widget").await;

        assert_eq!(url.as_deref(), Some("https://img/widget.jpg"));
        let request_line = request.await.unwrap();
        assert!(request_line.starts_with("GET /api/?"));
        assert!(request_line.contains("key=secret"));
        assert!(request_line.contains("q=Widget"));
        assert!(request_line.contains("per_page=3"));
        assert!(request_line.contains("lang=es"));
    }

    #[tokio::test]
    async fn test_http_error_degrades_to_none() {
        let (endpoint, _request) = serve_once("500 Internal Server Error", r#"{}"#).await;
        let lookup = ImageLookup::new(Some("secret".into())).unwrap().with_endpoint(endpoint.clone());

        assert!(matches!(
            lookup.try_lookup("Widget").await,
            Err(LookupError::Status(500))
        ));
    }

    #[tokio::test]
    async fn test_undecodable_body_degrades_to_none() {
        let (endpoint, _request) = serve_once("200 OK", "<html>nope</html>").await;
        let lookup = ImageLookup::new(Some("secret".into())).unwrap().with_endpoint(endpoint);

        assert!(lookup.lookup("Widget").await.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_degrades_to_none() {
        // Bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let lookup = ImageLookup::new(Some("secret".into())).unwrap()
            .with_endpoint(format!("http://{}/api/", addr));
        assert!(lookup.lookup("Widget").await.is_none());
    }
}
