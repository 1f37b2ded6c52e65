//! Client-side record store.
//!
//! A single list of records plus loading/error flags, mutated only by
//! the reducers below (one per fetch lifecycle action). The record list
//! is replaced wholesale on success, never edited in place.

use crate::model::MarginRecord;

/// Store for fetched back-margin records.
#[derive(Debug, Clone, Default)]
pub struct MarginStore {
    pub records: Vec<MarginRecord>,
    /// True while a fetch is in flight.
    pub loading: bool,
    /// Human-readable message from the last failed fetch.
    pub error: Option<String>,
}

impl MarginStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fetch has been dispatched.
    pub fn fetch_started(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// The fetch fulfilled; replaces the collection wholesale.
    pub fn fetch_succeeded(&mut self, records: Vec<MarginRecord>) {
        self.loading = false;
        self.error = None;
        self.records = records;
    }

    /// The fetch rejected. Previously fetched records are kept so the
    /// table does not go blank behind the error banner.
    pub fn fetch_failed(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_records;

    #[test]
    fn fetch_lifecycle_pending_fulfilled() {
        let mut store = MarginStore::new();
        assert!(!store.loading);
        assert!(store.records.is_empty());

        store.fetch_started();
        assert!(store.loading);
        assert_eq!(store.error, None);

        store.fetch_succeeded(sample_records());
        assert!(!store.loading);
        assert_eq!(store.records.len(), 5);
        assert_eq!(store.error, None);
    }

    #[test]
    fn fetch_failure_keeps_stale_records() {
        let mut store = MarginStore::new();
        store.fetch_succeeded(sample_records());

        store.fetch_started();
        store.fetch_failed("HTTP 503: service unavailable");
        assert!(!store.loading);
        assert_eq!(
            store.error.as_deref(),
            Some("HTTP 503: service unavailable")
        );
        assert_eq!(store.records.len(), 5);

        store.clear_error();
        assert_eq!(store.error, None);
    }

    #[test]
    fn starting_a_fetch_clears_previous_error() {
        let mut store = MarginStore::new();
        store.fetch_failed("network down");
        store.fetch_started();
        assert_eq!(store.error, None);
        assert!(store.loading);
    }

    #[test]
    fn success_replaces_collection_wholesale() {
        let mut store = MarginStore::new();
        store.fetch_succeeded(sample_records());
        store.fetch_succeeded(sample_records()[..2].to_vec());
        assert_eq!(store.records.len(), 2);
    }
}
