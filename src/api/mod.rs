//! Record sources: live HTTP endpoint or built-in sample data.
//!
//! The viewer only ever issues one read-only call, `GET /back-margin`,
//! returning a JSON array of records. A non-2xx response or a transport
//! error are the only failure modes.

use std::thread;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::model::{MarginRecord, sample_records};

/// Latency added by the sample source so the loading state is visible.
const SAMPLE_DELAY: Duration = Duration::from_millis(500);

/// Errors from fetching back-margin records.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Non-2xx response from the API.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Transport-level failure (connection refused, DNS, decode, ...).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// A source of back-margin records.
///
/// Implementations are called from a background thread, once per fetch;
/// there is no retry, backoff, or cancellation below this trait.
pub trait RecordSource: Send + Sync {
    /// Fetches the full record collection.
    fn fetch(&self) -> Result<Vec<MarginRecord>, FetchError>;

    /// Short label for the header mode indicator ("LIVE" or "SAMPLE").
    fn label(&self) -> &'static str;
}

/// Fetches records from the back-margin HTTP API.
pub struct HttpSource {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl RecordSource for HttpSource {
    fn fetch(&self) -> Result<Vec<MarginRecord>, FetchError> {
        let url = format!("{}/back-margin", self.base_url.trim_end_matches('/'));
        debug!("fetching records from {}", url);

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            let message = status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string();
            warn!("fetch failed: HTTP {} from {}", status.as_u16(), url);
            return Err(FetchError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let records: Vec<MarginRecord> = response.json()?;
        info!("fetched {} records from {}", records.len(), url);
        Ok(records)
    }

    fn label(&self) -> &'static str {
        "LIVE"
    }
}

/// Returns the built-in sample records after a short simulated delay.
pub struct SampleSource {
    delay: Duration,
}

impl SampleSource {
    pub fn new() -> Self {
        Self {
            delay: SAMPLE_DELAY,
        }
    }

    /// Sample source without artificial latency (for tests).
    pub fn immediate() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }
}

impl Default for SampleSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordSource for SampleSource {
    fn fetch(&self) -> Result<Vec<MarginRecord>, FetchError> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        let records = sample_records();
        debug!("returning {} sample records", records.len());
        Ok(records)
    }

    fn label(&self) -> &'static str {
        "SAMPLE"
    }
}
