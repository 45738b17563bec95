use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::kv::KeyValueStore;

/// In-memory KeyValueStore for testing.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    async fn load(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    async fn save(&self, key: &str, value: &str) -> bool {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        true
    }

    async fn remove(&self, key: &str) {
        self.values.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::{Archive, SESSION_KEY, SETTINGS_KEY};
    use crate::models::{AppSettings, Record, Role, SessionUser};

    fn record(id: &str) -> Record {
        Record {
            id: id.to_string(),
            applicant_name: "Alice Karim".to_string(),
            recipient: "City Council".to_string(),
            subject: "Water supply".to_string(),
            date: "2026-01-15".to_string(),
            notes: String::new(),
            ocr_text: "pipeline inspection".to_string(),
            image_uri: "data:image/png;base64,AAAA".to_string(),
            created_at: "2026-01-15T10:00:00+00:00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_saved_record_appears_exactly_once() {
        let archive = Archive::new(MemoryStore::new());

        assert!(archive.load_records().await.is_empty());
        assert!(archive.save_records(&[record("1")]).await);

        let records = archive.load_records().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records.iter().filter(|r| r.id == "1").count(), 1);
    }

    #[tokio::test]
    async fn test_save_replaces_whole_collection() {
        let archive = Archive::new(MemoryStore::new());

        archive.save_records(&[record("1")]).await;
        archive.save_records(&[record("2"), record("1")]).await;

        let records = archive.load_records().await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "2");
    }

    #[tokio::test]
    async fn test_clear_records_empties_the_collection() {
        let archive = Archive::new(MemoryStore::new());

        archive.save_records(&[record("1"), record("2")]).await;
        archive.clear_records().await;

        assert!(archive.load_records().await.is_empty());
    }

    #[tokio::test]
    async fn test_session_lifecycle() {
        let archive = Archive::new(MemoryStore::new());
        assert_eq!(archive.load_session().await, None);

        let user = SessionUser {
            username: "Archive Clerk".to_string(),
            role: Role::Staff,
        };
        assert!(archive.save_session(&user).await);
        assert_eq!(archive.load_session().await, Some(user));

        archive.clear_session().await;
        assert_eq!(archive.load_session().await, None);
    }

    #[tokio::test]
    async fn test_settings_default_when_absent() {
        let archive = Archive::new(MemoryStore::new());
        assert_eq!(archive.load_settings().await, AppSettings::default());
    }

    #[tokio::test]
    async fn test_settings_default_on_parse_failure() {
        let store = MemoryStore::new();
        store.save(SETTINGS_KEY, "][ nonsense").await;

        let archive = Archive::new(store);
        assert_eq!(archive.load_settings().await, AppSettings::default());
    }

    #[tokio::test]
    async fn test_settings_replaced_wholesale() {
        let archive = Archive::new(MemoryStore::new());

        let custom = AppSettings {
            sheets_url: "https://script.example/exec".to_string(),
            accent_color: "#0ea5e9".to_string(),
            system_name: "Front Desk Archive".to_string(),
            auto_fill: false,
        };
        assert!(archive.save_settings(&custom).await);
        assert_eq!(archive.load_settings().await, custom);

        assert!(archive.save_settings(&AppSettings::default()).await);
        assert_eq!(archive.load_settings().await, AppSettings::default());
    }

    #[tokio::test]
    async fn test_corrupt_session_treated_as_absent() {
        let store = MemoryStore::new();
        store.save(SESSION_KEY, "42").await;

        let archive = Archive::new(store);
        assert_eq!(archive.load_session().await, None);
    }
}
