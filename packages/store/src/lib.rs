pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryBackend;

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileBackend;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageBackend;

pub use models::{Session, UserRole};
pub use session::{SessionBackend, SessionError, SessionStore, SESSION_KEY};
