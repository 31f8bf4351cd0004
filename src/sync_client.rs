//! Blocking request helper built on ureq.

use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use log::{error, info};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{read_timeout_key, RequestOptions, DEFAULT_CONNECT_TIMEOUT_SECS};
use crate::convert::{convert_body, Charset};
use crate::error::{Error, Result};

/// Synchronous GET/POST helper.
///
/// Each call builds a fresh agent with the configured connect timeout and
/// discards it afterwards; nothing is pooled or reused across calls. The
/// connect timeout is per-instance state, so two clients never observe each
/// other's configuration.
#[derive(Clone, Debug)]
pub struct SyncClient {
    connect_timeout: Duration,
}

impl SyncClient {
    pub fn new() -> Self {
        Self {
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    /// Update the connect timeout. Non-positive values are ignored and the
    /// previous value is kept.
    pub fn set_connect_timeout(&mut self, secs: i64) {
        if secs > 0 {
            self.connect_timeout = Duration::from_secs(secs as u64);
        }
        info!("connect timeout is {}s", self.connect_timeout.as_secs());
    }

    /// Current connect timeout in seconds.
    pub fn connect_timeout(&self) -> u64 {
        self.connect_timeout.as_secs()
    }

    /// Update the connect timeout from one key of a TOML key/value resource.
    ///
    /// A missing resource leaves the timeout untouched, as does a key whose
    /// value is absent, non-integer, or non-positive.
    pub fn set_connect_timeout_from_file(
        &mut self,
        path: impl AsRef<Path>,
        key: &str,
    ) -> Result<()> {
        if let Some(secs) = read_timeout_key(path, key)? {
            self.connect_timeout = Duration::from_secs(secs);
        }
        info!("connect timeout is {}s", self.connect_timeout.as_secs());
        Ok(())
    }

    /// Perform a GET and convert the response body into `T`.
    ///
    /// The body is decoded with `charset` (UTF-8 when unspecified); a blank
    /// body converts to `T::default()`.
    pub fn get<T>(
        &self,
        url: &str,
        charset: Option<Charset>,
        options: Option<&RequestOptions>,
    ) -> Result<T>
    where
        T: FromStr + Default,
        T::Err: fmt::Display,
    {
        let bytes = self.execute(url, None, options)?;
        convert_body(&charset.unwrap_or_default().decode(&bytes))
    }

    /// Perform a POST carrying `body` and convert the response body into `T`.
    ///
    /// Same contract as [`get`](Self::get); `options.media_type` sets the
    /// Content-Type header when present.
    pub fn post<T>(
        &self,
        url: &str,
        body: &str,
        charset: Option<Charset>,
        options: Option<&RequestOptions>,
    ) -> Result<T>
    where
        T: FromStr + Default,
        T::Err: fmt::Display,
    {
        let bytes = self.execute(url, Some(body), options)?;
        convert_body(&charset.unwrap_or_default().decode(&bytes))
    }

    /// GET a JSON endpoint and deserialize the body.
    pub fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let bytes = self.execute(url, None, None)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// POST `body` as JSON and deserialize the response.
    pub fn post_json<T, B>(&self, url: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let payload = serde_json::to_string(body)?;
        let options = RequestOptions::new().media_type("application/json; charset=utf-8");
        let bytes = self.execute(url, Some(&payload), Some(&options))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn execute(
        &self,
        url: &str,
        post_body: Option<&str>,
        options: Option<&RequestOptions>,
    ) -> Result<Vec<u8>> {
        if url.trim().is_empty() {
            return Err(Error::InvalidArgument("url"));
        }
        let timeout = options
            .and_then(|o| o.connect_timeout)
            .unwrap_or(self.connect_timeout);
        info!("request url: {} (connect timeout {}s)", url, timeout.as_secs());

        // one agent per call, discarded afterwards
        let agent = ureq::AgentBuilder::new().timeout_connect(timeout).build();

        let response = match post_body {
            None => agent.get(url).call(),
            Some(body) => {
                let mut request = agent.post(url);
                if let Some(media_type) = options.and_then(|o| o.media_type.as_deref()) {
                    request = request.set("Content-Type", media_type);
                }
                request.send_string(body)
            }
        }
        .map_err(|e| {
            error!("request to {} failed: {}", url, e);
            Error::network(e)
        })?;

        let mut bytes = Vec::new();
        response.into_reader().read_to_end(&mut bytes).map_err(|e| {
            error!("failed to read response body from {}: {}", url, e);
            Error::network(e)
        })?;
        Ok(bytes)
    }
}

impl Default for SyncClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_timeout_overwrites() {
        let mut client = SyncClient::new();
        assert_eq!(client.connect_timeout(), DEFAULT_CONNECT_TIMEOUT_SECS);
        client.set_connect_timeout(5);
        assert_eq!(client.connect_timeout(), 5);
    }

    #[test]
    fn non_positive_timeout_is_ignored() {
        let mut client = SyncClient::new();
        client.set_connect_timeout(7);
        client.set_connect_timeout(0);
        client.set_connect_timeout(-3);
        assert_eq!(client.connect_timeout(), 7);
    }

    #[test]
    fn blank_url_is_rejected_without_a_network_call() {
        let client = SyncClient::new();
        assert!(matches!(
            client.get::<String>("  ", None, None),
            Err(Error::InvalidArgument("url"))
        ));
        assert!(matches!(
            client.post::<String>("", "body", None, None),
            Err(Error::InvalidArgument("url"))
        ));
    }
}
