pub mod export;
pub mod models;

mod kv;
pub use kv::{Archive, KeyValueStore, RECORDS_KEY, SESSION_KEY, SETTINGS_KEY};

mod file_store;
pub use file_store::FileStore;

mod memory;
pub use memory::MemoryStore;

pub use models::{AppSettings, Record, Role, SessionUser};
