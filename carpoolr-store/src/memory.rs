use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;
use tracing::warn;

use crate::store::BlobStore;

/// In-memory blob store for tests and ephemeral sessions. The mutex exists
/// only to satisfy the `&self` store contract; there is a single logical
/// actor, so it is never contended.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn load(&self, key: &str) -> Option<Value> {
        match self.blobs.lock() {
            Ok(blobs) => blobs.get(key).cloned(),
            Err(e) => {
                warn!("Memory store poisoned on load: {}", e);
                None
            }
        }
    }

    fn save(&self, key: &str, value: &Value) {
        match self.blobs.lock() {
            Ok(mut blobs) => {
                blobs.insert(key.to_string(), value.clone());
            }
            Err(e) => warn!("Memory store poisoned on save: {}", e),
        }
    }

    fn contains(&self, key: &str) -> bool {
        self.blobs
            .lock()
            .map(|blobs| blobs.contains_key(key))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_trip_and_presence() {
        let store = MemoryStore::new();
        assert!(!store.contains("carpoolr_bookings"));

        store.save("carpoolr_bookings", &json!([]));
        assert!(store.contains("carpoolr_bookings"));
        assert_eq!(store.load("carpoolr_bookings"), Some(json!([])));
    }
}
