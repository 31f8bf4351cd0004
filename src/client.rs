//! Shared async request helper built on reqwest.

use log::{error, info};
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Content type attached to POST bodies built by [`Client::build_request`].
const JSON_MEDIA_TYPE: &str = "application/json; charset=utf-8";

/// Async GET/POST helper around one shared `reqwest::Client`.
///
/// `reqwest::Client` is internally reference-counted, so cloning this helper
/// shares the same connection pool. It is safe for concurrent use from
/// multiple tasks.
#[derive(Clone, Debug, Default)]
pub struct Client {
    inner: reqwest::Client,
}

impl Client {
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Wrap an externally configured `reqwest::Client`.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }

    /// Build a GET request, or a POST request carrying `content` as a
    /// JSON-typed body when `content` is present and non-empty.
    pub fn build_request(&self, url: &str, content: Option<&str>) -> Result<reqwest::Request> {
        if url.trim().is_empty() {
            return Err(Error::InvalidArgument("url"));
        }
        let builder = match content {
            Some(body) if !body.is_empty() => self
                .inner
                .post(url)
                .header(CONTENT_TYPE, JSON_MEDIA_TYPE)
                .body(body.to_string()),
            _ => self.inner.get(url),
        };
        builder.build().map_err(|e| {
            error!("failed to build request for {}: {}", url, e);
            Error::network(e)
        })
    }

    /// Run a request on the shared client.
    pub async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response> {
        let url = request.url().clone();
        self.inner.execute(request).await.map_err(|e| {
            error!("request to {} failed: {}", url, e);
            Error::network(e)
        })
    }

    /// GET `url` and return the body of a successful response.
    pub async fn get(&self, url: &str) -> Result<String> {
        let request = self.build_request(url, None)?;
        let response = self.execute(request).await?;
        Self::read_body(response).await
    }

    /// POST `content` to `url` and return the body of a successful response.
    pub async fn post(&self, url: &str, content: &str) -> Result<String> {
        let request = self.build_request(url, Some(content))?;
        let response = self.execute(request).await?;
        Self::read_body(response).await
    }

    /// GET a JSON endpoint and deserialize the body.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.get(url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Submit a request for asynchronous execution on the ambient tokio
    /// runtime. GET when `content` is absent or empty, POST otherwise.
    ///
    /// Fire-and-forget: the callback is invoked exactly once with either the
    /// response body or the failure. No retries, no cancellation; ordering
    /// relative to other enqueued calls is unspecified.
    pub fn enqueue<F>(&self, url: &str, content: Option<String>, callback: F)
    where
        F: FnOnce(Result<String>) + Send + 'static,
    {
        let client = self.clone();
        let url = url.to_string();
        tokio::spawn(async move {
            let result = match content.as_deref() {
                Some(body) if !body.is_empty() => client.post(&url, body).await,
                _ => client.get(&url).await,
            };
            callback(result);
        });
    }

    /// Fetch `url` and log every response header name/value pair.
    ///
    /// Diagnostic-only: failures are logged and suppressed.
    pub async fn log_headers(&self, url: &str, content: Option<&str>) {
        let outcome = match self.build_request(url, content) {
            Ok(request) => self.execute(request).await,
            Err(e) => Err(e),
        };
        match outcome {
            Ok(response) => {
                for (name, value) in response.headers() {
                    info!("{} ---> {}", name, value.to_str().unwrap_or("<non-ascii>"));
                }
            }
            Err(e) => error!("failed to fetch headers from {}: {}", url, e),
        }
    }

    async fn read_body(response: reqwest::Response) -> Result<String> {
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }
        response.text().await.map_err(Error::network)
    }
}
