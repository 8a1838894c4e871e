use serde_json::Value;

/// A named key → JSON-blob store. Each logical collection (rides,
/// bookings, user profile) is saved and loaded whole.
///
/// The contract is deliberately lossy at the edges: a corrupt stored value
/// degrades to "absent" on load, and a failed save is swallowed after
/// logging — the in-memory state stays the session's source of truth either
/// way. `contains` reports raw key presence so callers can tell "never
/// saved" apart from "saved but unreadable".
pub trait BlobStore: Send + Sync {
    fn load(&self, key: &str) -> Option<Value>;

    fn save(&self, key: &str, value: &Value);

    fn contains(&self, key: &str) -> bool;
}

/// Failures internal to store implementations. Never crosses the
/// `BlobStore` boundary; implementations log and degrade instead.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored blob is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}
