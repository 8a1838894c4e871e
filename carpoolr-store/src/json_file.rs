use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::warn;

use crate::store::{BlobStore, StoreError};

/// File-backed blob store: one `<key>.json` per collection under a data
/// directory. Writes go through a temp file and rename so a failed save
/// never leaves a half-written blob behind.
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }

    fn try_load(&self, path: &Path) -> Result<Value, StoreError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn try_save(&self, path: &Path, value: &Value) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec(value)?)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

impl BlobStore for JsonFileStore {
    fn load(&self, key: &str) -> Option<Value> {
        let path = self.path_for(key);
        if !path.exists() {
            return None;
        }
        match self.try_load(&path) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Discarding unreadable blob {}: {}", path.display(), e);
                None
            }
        }
    }

    fn save(&self, key: &str, value: &Value) {
        let path = self.path_for(key);
        if let Err(e) = self.try_save(&path, value) {
            warn!("Failed to persist {}: {}", path.display(), e);
        }
    }

    fn contains(&self, key: &str) -> bool {
        self.path_for(key).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        assert!(!store.contains("carpoolr_rides"));
        assert!(store.load("carpoolr_rides").is_none());

        let value = json!([{"from": "Noida Sec 62", "seats": 3}]);
        store.save("carpoolr_rides", &value);

        assert!(store.contains("carpoolr_rides"));
        assert_eq!(store.load("carpoolr_rides"), Some(value));
    }

    #[test]
    fn test_corrupt_blob_degrades_to_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        fs::write(dir.path().join("carpoolr_rides.json"), b"{not json").unwrap();

        // Unreadable, but the key is still present on disk
        assert!(store.load("carpoolr_rides").is_none());
        assert!(store.contains("carpoolr_rides"));
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        // A data dir that cannot be created (parent is a file)
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"x").unwrap();

        let store = JsonFileStore::new(blocker.join("nested"));
        store.save("carpoolr_rides", &json!([]));
        assert!(store.load("carpoolr_rides").is_none());
    }

    #[test]
    fn test_overwrite_replaces_blob() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        store.save("carpoolr_user", &json!({"name": "Guest", "phone": ""}));
        store.save("carpoolr_user", &json!({"name": "Asha", "phone": "98100"}));

        let loaded = store.load("carpoolr_user").unwrap();
        assert_eq!(loaded["name"], "Asha");
    }
}
