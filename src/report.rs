use std::sync::Arc;

/// Events emitted while talking to the catalog
#[derive(Debug, Clone)]
pub enum CatalogEvent {
    /// A request is about to be sent
    RequestStarted {
        /// Short name of the query (e.g. "trending", "search")
        query: &'static str,
        url: String,
    },

    /// A request returned a usable result list
    RequestCompleted {
        query: &'static str,
        /// Number of raw records in the response
        results: usize,
    },

    /// A request failed and the error is about to be returned to the caller
    RequestFailed { query: &'static str, error: String },

    /// A raw record could not be mapped and was left out of the result
    RecordSkipped { query: &'static str, reason: String },

    /// The related-video lookup for a discovery failed and was replaced by an empty list
    EnrichmentFailed { discovery_id: String, error: String },

    /// A home feed category failed to load and is shown empty
    CategoryFailed { category: String, error: String },
}

/// Trait for reporting catalog events.
///
/// The library never prints. Implementations decide whether events end up
/// on a spinner, in a log line, or nowhere at all.
pub trait Reporter: Send + Sync {
    /// Report a catalog event
    fn report(&self, event: CatalogEvent);
}

/// A shared reference to a reporter
pub type SharedReporter = Arc<dyn Reporter>;

/// A no-op reporter that silently ignores all events.
/// Useful for tests or quiet mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn report(&self, _event: CatalogEvent) {}
}

impl NoopReporter {
    /// Create a new NoopReporter wrapped in an Arc
    pub fn shared() -> SharedReporter {
        Arc::new(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_reporter_handles_all_events() {
        let reporter = NoopReporter;

        reporter.report(CatalogEvent::RequestStarted {
            query: "trending",
            url: "https://itunes.apple.com/search?term=science+discovery".to_string(),
        });

        reporter.report(CatalogEvent::RequestCompleted {
            query: "trending",
            results: 20,
        });

        reporter.report(CatalogEvent::RequestFailed {
            query: "search",
            error: "HTTP error 503".to_string(),
        });

        reporter.report(CatalogEvent::RecordSkipped {
            query: "search",
            reason: "Record 'x' has neither trackId nor collectionId".to_string(),
        });

        reporter.report(CatalogEvent::EnrichmentFailed {
            discovery_id: "1200361736".to_string(),
            error: "HTTP error 500".to_string(),
        });

        reporter.report(CatalogEvent::CategoryFailed {
            category: "history".to_string(),
            error: "HTTP error 502".to_string(),
        });
    }

    #[test]
    fn shared_noop_reporter_is_usable_through_arc() {
        let reporter = NoopReporter::shared();
        let clone = Arc::clone(&reporter);

        clone.report(CatalogEvent::RequestCompleted {
            query: "videos",
            results: 0,
        });
    }
}
