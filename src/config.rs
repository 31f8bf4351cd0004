//! Per-call request options and timeout configuration loading.

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{Error, Result};

/// Connect timeout applied when nothing else is configured.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Per-call overrides for a single request.
///
/// When a field is unset the client's own configuration applies.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    pub connect_timeout: Option<Duration>,
    pub media_type: Option<String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }
}

/// Read one integer key from a TOML key/value resource.
///
/// A missing file is not an error; only a positive integer value is
/// returned, anything else yields `None`.
pub fn read_timeout_key(path: impl AsRef<Path>, key: &str) -> Result<Option<u64>> {
    let path = path.as_ref();
    if path.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(Error::InvalidArgument("config path"));
    }
    if key.trim().is_empty() {
        return Err(Error::InvalidArgument("config key"));
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(Error::Config(e.to_string())),
    };

    let table: toml::Table = content
        .parse()
        .map_err(|e: toml::de::Error| Error::Config(e.to_string()))?;

    Ok(match table.get(key).and_then(|v| v.as_integer()) {
        Some(v) if v > 0 => Some(v as u64),
        _ => None,
    })
}
