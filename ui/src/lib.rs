//! This crate contains the shared UI layer: the state container mirroring
//! the persisted values, the store constructor, and the form controls the
//! desktop views are built from.

use dioxus::prelude::*;

pub mod components;

mod archive;
pub use archive::{data_dir, make_archive};

mod state;
pub use state::{
    apply_settings, archive_record, clear_archive, sign_in, sign_out, use_records, use_session,
    use_settings, SessionState, StoreProvider,
};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
