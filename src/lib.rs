//! # securestore
//!
//! Persists application credentials into an OS-native secure store:
//! - Windows Credential Manager
//! - macOS Keychain
//! - Linux Secret Service
//! - password-store
//!
//! The adapter validates the requested backend against an allow-list
//! intersected with live OS availability, gzip-compresses credential blobs
//! so they fit under OS size limits, and keeps reads and removals of absent
//! items non-fatal. The OS stores provide the encryption-at-rest guarantee;
//! this crate adds none of its own.
//!
//! ```no_run
//! use securestore::CredentialStore;
//!
//! # fn main() -> securestore::Result<()> {
//! let store = CredentialStore::system();
//!
//! store.upsert("secret-service", b"serialized credentials")?;
//! let creds = store.get("secret-service")?;
//! assert!(!creds.is_empty());
//! store.remove("secret-service")?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod codec;
pub mod error;
pub mod logger;
pub mod provider;
pub mod store;
mod system;

pub use backend::Backend;
pub use error::{Result, StoreError};
pub use logger::{ConsoleLogger, Level, Logger, NopLogger, TracingLogger};
pub use provider::{HandleError, Item, StoreConfig, StoreHandle, StoreProvider};
pub use store::{
    CredentialStore, COLLECTION_NAME, ITEM_KEY, KIND_INTERNET_PASSWORD, MAX_WINDOWS_BYTE_SIZE,
};
pub use system::SystemProvider;
