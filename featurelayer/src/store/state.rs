//! Per-query fetch outcome types.
//!
//! The store tracks two things for every query key: the last successfully
//! fetched payload, and the outcome of the most recent fetch attempt. These
//! types describe the latter. A key with no recorded outcome was never
//! passed to a fetch action.

/// Outcome of the most recent fetch attempt for a query key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A fetch has been issued and has not yet resolved.
    Loading,
    /// The most recent fetch succeeded.
    Loaded,
    /// The most recent fetch failed; the reason is kept for diagnostics.
    Failed(String),
}

impl FetchOutcome {
    /// Collapses the outcome to its status tag.
    pub fn status(&self) -> QueryStatus {
        match self {
            Self::Loading => QueryStatus::Loading,
            Self::Loaded => QueryStatus::Loaded,
            Self::Failed(_) => QueryStatus::Failed,
        }
    }
}

/// Lightweight status summary for a query key.
///
/// Unlike [`FetchOutcome`] this carries no data, so it is cheap to poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryStatus {
    /// The key was never passed to a fetch action.
    #[default]
    NotRequested,
    /// A fetch is in flight.
    Loading,
    /// The most recent fetch succeeded.
    Loaded,
    /// The most recent fetch failed.
    Failed,
}

impl std::fmt::Display for QueryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotRequested => write!(f, "Not requested"),
            Self::Loading => write!(f, "Loading"),
            Self::Loaded => write!(f, "Loaded"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_status_mapping() {
        assert_eq!(FetchOutcome::Loading.status(), QueryStatus::Loading);
        assert_eq!(FetchOutcome::Loaded.status(), QueryStatus::Loaded);
        assert_eq!(
            FetchOutcome::Failed("HTTP 500".to_string()).status(),
            QueryStatus::Failed
        );
    }

    #[test]
    fn test_status_default_is_not_requested() {
        assert_eq!(QueryStatus::default(), QueryStatus::NotRequested);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(QueryStatus::NotRequested.to_string(), "Not requested");
        assert_eq!(QueryStatus::Loading.to_string(), "Loading");
        assert_eq!(QueryStatus::Loaded.to_string(), "Loaded");
        assert_eq!(QueryStatus::Failed.to_string(), "Failed");
    }
}
