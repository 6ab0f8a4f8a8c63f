//! In-memory store of geographic query results.
//!
//! Maps query strings to their last successfully fetched feature payload,
//! alongside a per-key record of the most recent fetch outcome so callers
//! can distinguish not-requested, loading, failed, and loaded keys. Entries
//! live for the lifetime of the store; nothing ever removes one.

mod memory;
mod state;
mod stats;

pub use memory::FeatureStore;
pub use state::{FetchOutcome, QueryStatus};
pub use stats::StoreStats;
