//! # Filesystem-backed key-value store
//!
//! [`FileStore`] keeps one `<key>.json` file per key under a base directory
//! and is what the desktop shell persists through. Read and write failures
//! degrade to "absent" / `false`, so a damaged data directory costs the user
//! their mirror, never the running session.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── records.json       # archived collection
//! ├── session.json       # active session, removed on logout
//! └── settings.json      # UI configuration
//! ```
//!
//! Use `dirs::data_dir()` to obtain a platform-appropriate base (the `ui`
//! crate's `make_archive` does this).

use std::path::PathBuf;

use crate::kv::KeyValueStore;

/// Filesystem-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    async fn load(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    async fn save(&self, key: &str, value: &str) -> bool {
        if std::fs::create_dir_all(&self.base).is_err() {
            return false;
        }
        std::fs::write(self.key_path(key), value).is_ok()
    }

    async fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.key_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::{Archive, RECORDS_KEY};
    use crate::models::Record;

    fn sample_record() -> Record {
        Record {
            id: "1700000000123".to_string(),
            applicant_name: "Alice Karim".to_string(),
            recipient: "Ministry of Transport".to_string(),
            subject: "Road access permit".to_string(),
            date: "2026-01-15".to_string(),
            notes: "urgent".to_string(),
            ocr_text: "To whom it may concern,\nline two".to_string(),
            image_uri: "data:image/jpeg;base64,AAAA".to_string(),
            created_at: "2026-01-15T10:00:00+00:00".to_string(),
        }
    }

    fn temp_base(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("papervault_test_{tag}_{}", std::process::id()))
    }

    #[tokio::test]
    async fn test_records_roundtrip_across_reopen() {
        let dir = temp_base("roundtrip");
        let _ = std::fs::remove_dir_all(&dir);

        let archive = Archive::new(FileStore::new(dir.clone()));
        assert!(archive.save_records(&[sample_record()]).await);

        // Re-open from the same directory.
        let reopened = Archive::new(FileStore::new(dir.clone()));
        let records = reopened.load_records().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], sample_record());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_unparsable_value_loads_as_empty() {
        let dir = temp_base("corrupt");
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir.clone());
        assert!(store.save(RECORDS_KEY, "{not json").await);

        let archive = Archive::new(FileStore::new(dir.clone()));
        assert!(archive.load_records().await.is_empty());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_session_removed_on_clear() {
        let dir = temp_base("session");
        let _ = std::fs::remove_dir_all(&dir);

        let archive = Archive::new(FileStore::new(dir.clone()));
        let user = crate::models::SessionUser {
            username: "System Administrator".to_string(),
            role: crate::models::Role::Admin,
        };
        assert!(archive.save_session(&user).await);
        assert_eq!(archive.load_session().await, Some(user));

        archive.clear_session().await;
        assert_eq!(archive.load_session().await, None);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
