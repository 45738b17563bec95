//! Store constructor for the desktop platform.
//!
//! | Platform | Data directory |
//! |----------|----------------|
//! | macOS | `~/Library/Application Support/papervault/` |
//! | Linux | `~/.local/share/papervault/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\papervault\` |

use std::path::PathBuf;

use store::{Archive, FileStore};

/// Platform data directory holding the three persisted values.
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("papervault")
}

/// Open the archive backed by the platform data directory.
pub fn make_archive() -> Archive<FileStore> {
    Archive::new(FileStore::new(data_dir()))
}
