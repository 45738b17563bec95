//! # API crate — outbound integrations for PaperVault
//!
//! Everything that crosses the process boundary lives here: the credential
//! gate, the document-analysis client, and the best-effort spreadsheet
//! forwarder. The UI crates call these directly; none of them touch
//! persisted state — durability belongs to the `store` crate alone.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Map a credential pair to a role and session user |
//! | [`ocr`] | Single-shot structured field extraction from a scanned image |
//! | [`sheets`] | Fire-and-forget mirroring of saved records to a webhook |

pub mod auth;
pub mod ocr;
pub mod sheets;

pub use auth::{authenticate, AuthError};
pub use ocr::{OcrClient, OcrError, OcrResult};
pub use sheets::forward_record;
