//! # Filesystem-backed session storage
//!
//! [`FileBackend`] persists the session blob as a file on desktop platforms,
//! so a login survives an app restart. One file per key under the base
//! directory.
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/placement-portal/` |
//! | Linux | `~/.local/share/placement-portal/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\placement-portal\` |

use std::path::PathBuf;

use crate::session::SessionBackend;

/// Filesystem-backed storage for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileBackend {
    base: PathBuf,
}

impl FileBackend {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Backend rooted at the platform data directory.
    pub fn default_location() -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("placement-portal");
        Self::new(base)
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl SessionBackend for FileBackend {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn put(&self, key: &str, value: &str) {
        let path = self.key_path(key);
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = std::fs::write(&path, value) {
            tracing::error!("failed to write {}: {e}", path.display());
        }
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.key_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Session, UserRole};
    use crate::session::SessionStore;

    #[test]
    fn file_backend_roundtrip() {
        let dir = std::env::temp_dir().join(format!("placement_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = SessionStore::new(FileBackend::new(dir.clone()));
        let session = Session {
            user_id: "9876543210".to_string(),
            role: UserRole::Placement,
            full_name: "Officer Rao".to_string(),
        };
        store.save(&session);

        // Re-open from the same directory
        let store2 = SessionStore::new(FileBackend::new(dir.clone()));
        assert_eq!(store2.load().unwrap(), Some(session));

        store2.clear();
        assert!(store2.load().unwrap().is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
