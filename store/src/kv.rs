//! # Key-value persistence and the typed archive layer
//!
//! This module is the core of the storage layer. [`KeyValueStore`] is the
//! single persistence adapter interface — whole string values under string
//! keys, no partial updates — and [`Archive`] is the typed layer that owns
//! the three key spaces the application persists:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`RECORDS_KEY`] | the archived record collection, newest first |
//! | [`SESSION_KEY`] | the active session user, or absent |
//! | [`SETTINGS_KEY`] | the UI configuration, defaulted when absent |
//!
//! Every save replaces the entire value under its key, and keys are
//! independent: there is no transaction spanning them. That is sufficient
//! because there is exactly one writer (the UI session) and every write is a
//! whole-value overwrite.
//!
//! A stored value that fails to parse is treated as absent: the failure is
//! logged and the caller gets the default/empty value, so a damaged store
//! never takes the UI down. Implementations live in sibling modules
//! ([`crate::file_store`], [`crate::memory`]).

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{AppSettings, Record, SessionUser};

/// Key under which the archived record collection is stored.
pub const RECORDS_KEY: &str = "records";
/// Key under which the active session is stored.
pub const SESSION_KEY: &str = "session";
/// Key under which the UI configuration is stored.
pub const SETTINGS_KEY: &str = "settings";

/// Async interface for loading and saving whole values by key.
pub trait KeyValueStore {
    fn load(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Option<String>>;
    fn save(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = bool>;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = ()>;
}

/// Typed persistence for the application state, backed by a [`KeyValueStore`].
pub struct Archive<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Archive<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the archived collection, newest first. A missing or unparsable
    /// value yields an empty collection.
    pub async fn load_records(&self) -> Vec<Record> {
        self.load_parsed(RECORDS_KEY).await.unwrap_or_default()
    }

    /// Replace the persisted collection with `records`.
    pub async fn save_records(&self, records: &[Record]) -> bool {
        self.save_serialized(RECORDS_KEY, &records).await
    }

    /// Drop the whole collection — the only removal path records have.
    pub async fn clear_records(&self) {
        self.store.remove(RECORDS_KEY).await;
    }

    /// Load the active session, if one was persisted and still parses.
    pub async fn load_session(&self) -> Option<SessionUser> {
        self.load_parsed(SESSION_KEY).await
    }

    /// Persist the active session.
    pub async fn save_session(&self, user: &SessionUser) -> bool {
        self.save_serialized(SESSION_KEY, user).await
    }

    /// Destroy the persisted session.
    pub async fn clear_session(&self) {
        self.store.remove(SESSION_KEY).await;
    }

    /// Load the configuration. Always yields a value: a missing or
    /// unparsable entry is equivalent to [`AppSettings::default`].
    pub async fn load_settings(&self) -> AppSettings {
        self.load_parsed(SETTINGS_KEY).await.unwrap_or_default()
    }

    /// Replace the persisted configuration wholesale.
    pub async fn save_settings(&self, settings: &AppSettings) -> bool {
        self.save_serialized(SETTINGS_KEY, settings).await
    }

    async fn load_parsed<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.load(key).await?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!("discarding unparsable `{key}` value: {err}");
                None
            }
        }
    }

    async fn save_serialized<T: Serialize>(&self, key: &str, value: &T) -> bool {
        match serde_json::to_string(value) {
            Ok(raw) => self.store.save(key, &raw).await,
            Err(err) => {
                tracing::warn!("failed to serialize `{key}` value: {err}");
                false
            }
        }
    }
}
