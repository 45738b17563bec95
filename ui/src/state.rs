//! Application state: the in-memory mirror of the three persisted values.
//!
//! [`StoreProvider`] owns the canonical signals — session, record
//! collection, configuration — reads them once on mount, and supplies them
//! via context. Every mutation helper follows the same contract: mutate the
//! signal, then overwrite the persisted copy in full. While the app runs the
//! signals are the source of truth and the store is a passive mirror.

use dioxus::prelude::*;
use store::{AppSettings, Record, SessionUser};

use crate::make_archive;

/// Authentication state for the application.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    /// True until the persisted session has been read once.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Current session signal.
pub fn use_session() -> Signal<SessionState> {
    use_context()
}

/// Archived records, newest first.
pub fn use_records() -> Signal<Vec<Record>> {
    use_context()
}

/// UI configuration.
pub fn use_settings() -> Signal<AppSettings> {
    use_context()
}

/// Provider component that loads persisted state and supplies the signals.
/// Wrap the router with this so every screen sees the same state.
#[component]
pub fn StoreProvider(children: Element) -> Element {
    let mut session = use_context_provider(|| Signal::new(SessionState::default()));
    let mut records = use_context_provider(|| Signal::new(Vec::<Record>::new()));
    let mut settings = use_context_provider(|| Signal::new(AppSettings::default()));

    // Read-on-init: one pass over the three keys, then the signals own it.
    let _ = use_resource(move || async move {
        let archive = make_archive();
        records.set(archive.load_records().await);
        settings.set(archive.load_settings().await);
        session.set(SessionState {
            user: archive.load_session().await,
            loading: false,
        });
    });

    rsx! {
        {children}
    }
}

/// Establish a session: set the signal, then persist it.
pub async fn sign_in(mut session: Signal<SessionState>, user: SessionUser) {
    session.set(SessionState {
        user: Some(user.clone()),
        loading: false,
    });
    if !make_archive().save_session(&user).await {
        tracing::warn!("session was not persisted; it will not survive a restart");
    }
}

/// Destroy the session, in memory and in the store.
pub async fn sign_out(mut session: Signal<SessionState>) {
    session.set(SessionState {
        user: None,
        loading: false,
    });
    make_archive().clear_session().await;
}

/// Prepend a newly archived record (the collection is newest-first) and
/// overwrite the persisted collection.
pub async fn archive_record(mut records: Signal<Vec<Record>>, record: Record) {
    records.write().insert(0, record);
    let snapshot = records();
    if !make_archive().save_records(&snapshot).await {
        tracing::warn!("record collection was not persisted");
    }
}

/// Replace the configuration wholesale, in memory and in the store.
pub async fn apply_settings(mut settings: Signal<AppSettings>, next: AppSettings) {
    settings.set(next.clone());
    if !make_archive().save_settings(&next).await {
        tracing::warn!("settings were not persisted");
    }
}

/// Clear the whole collection — the only removal path records have.
pub async fn clear_archive(mut records: Signal<Vec<Record>>) {
    records.set(Vec::new());
    make_archive().clear_records().await;
}
