//! Credential store adapter
//!
//! A thin adapter over an OS-native secure store: it validates the requested
//! backend against the allow-list and live availability, gzip-compresses the
//! credential blob on the way in, and translates a narrow set of store errors
//! into domain outcomes. At most one item exists per backend per user
//! profile; writes overwrite.

use tracing::{debug, warn};

use crate::backend::Backend;
use crate::codec;
use crate::error::{Result, StoreError};
use crate::provider::{HandleError, Item, StoreConfig, StoreHandle, StoreProvider};
use crate::system::SystemProvider;

/// Fixed key and label under which the single credential item is stored
pub const ITEM_KEY: &str = "RedHatSSO";

/// macOS Keychain item kind
pub const KIND_INTERNET_PASSWORD: &str = "Internet password";

/// Common OS default collection name
pub const COLLECTION_NAME: &str = "login";

/// Windows Credential Manager has a 2500 byte limit
pub const MAX_WINDOWS_BYTE_SIZE: usize = 2500;

/// macOS error signature for a keychain deletion the app lacks permission for
const MACOS_PERMISSION_SIGNATURE: &str = "Keychain Error. (-25244)";

/// Credential store over a secure-store provider
///
/// Every operation opens a fresh handle and runs to completion; there is no
/// caching, no locking, and no retrying in this adapter.
pub struct CredentialStore<P = SystemProvider> {
    provider: P,
}

impl CredentialStore<SystemProvider> {
    /// Create a store backed by the platform keyring
    pub fn system() -> Self {
        Self::new(SystemProvider::new())
    }
}

impl Default for CredentialStore<SystemProvider> {
    fn default() -> Self {
        Self::system()
    }
}

impl<P: StoreProvider> CredentialStore<P> {
    /// Create a store over a custom provider
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Fixed per-backend configuration for opening the store
    fn config(backend: Backend) -> StoreConfig {
        StoreConfig {
            backend,
            service: ITEM_KEY,
            collection: COLLECTION_NAME,
            trust_application: true,
            synchronizable: false,
            accessible_when_unlocked: false,
        }
    }

    /// Validate that the requested backend is allow-listed and available
    ///
    /// An empty or unrecognized identifier is invalid; a recognized backend
    /// the OS does not report as usable is unavailable.
    pub fn validate(&self, backend: &str) -> Result<Backend> {
        let backend: Backend = backend.parse()?;

        if !self.available_backends().contains(&backend) {
            return Err(StoreError::BackendUnavailable { backend });
        }

        Ok(backend)
    }

    /// Whether the named backend is allow-listed and currently available
    pub fn is_available(&self, backend: &str) -> bool {
        self.validate(backend).is_ok()
    }

    /// Allow-listed backends the OS reports as usable
    ///
    /// OS-reported order, filtered by allow-list membership, without
    /// duplicates.
    pub fn available_backends(&self) -> Vec<Backend> {
        let mut available = Vec::new();

        for id in self.provider.available_backends() {
            if let Ok(backend) = id.parse::<Backend>() {
                if !available.contains(&backend) {
                    available.push(backend);
                }
            }
        }

        available
    }

    /// Write credentials to the backend, overwriting any existing item
    ///
    /// The blob is gzip-compressed before it is written; for the Windows
    /// Credential Manager the compressed size must fit under
    /// [`MAX_WINDOWS_BYTE_SIZE`] or the write is rejected up front.
    pub fn upsert(&self, backend: &str, credentials: &[u8]) -> Result<()> {
        let backend = self.validate(backend)?;
        let handle = self.open(backend)?;

        let compressed = codec::compress(credentials)?;

        // Only the Windows Credential Manager enforces a hard size limit
        if backend == Backend::Wincred && compressed.len() > MAX_WINDOWS_BYTE_SIZE {
            return Err(StoreError::TooLarge {
                size: compressed.len(),
                max: MAX_WINDOWS_BYTE_SIZE,
            });
        }

        handle
            .set(Item {
                key: ITEM_KEY.to_string(),
                label: ITEM_KEY.to_string(),
                description: KIND_INTERNET_PASSWORD.to_string(),
                data: compressed,
            })
            .map_err(|e| StoreError::WriteStore(e.to_string()))?;

        debug!("stored credentials in {} backend", backend);
        Ok(())
    }

    /// Read credentials back from the backend
    ///
    /// An absent item yields an empty result, not an error; callers
    /// distinguish "no credentials yet" by checking for a zero-length result.
    /// A non-empty item that fails to decompress is corrupt and surfaces as
    /// an error.
    pub fn get(&self, backend: &str) -> Result<Vec<u8>> {
        let backend = self.validate(backend)?;
        let handle = self.open(backend)?;

        let stored = match handle.get(ITEM_KEY) {
            Ok(data) => data,
            Err(HandleError::NotFound) => {
                debug!("no credentials stored in {} backend", backend);
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::ReadStore(e.to_string())),
        };

        if stored.is_empty() {
            return Ok(stored);
        }

        codec::decompress(&stored)
    }

    /// Remove the credential item from the backend
    ///
    /// Removing an item that does not exist succeeds: the key is already
    /// gone, which is the state the caller asked for.
    pub fn remove(&self, backend: &str) -> Result<()> {
        let backend = self.validate(backend)?;
        let handle = self.open(backend)?;

        match handle.remove(ITEM_KEY) {
            Ok(()) => {
                debug!("removed credentials from {} backend", backend);
                Ok(())
            }
            Err(HandleError::NotFound) => Ok(()),
            Err(e) => {
                let message = e.to_string();

                if message.contains(MACOS_PERMISSION_SIGNATURE) {
                    warn!("keychain denied removal: {}", message);
                    return Err(StoreError::RemoveStore(format!(
                        "{}\nThis application may not have permission to delete from the \
                         Keychain. Please check the permissions in the Keychain and try again",
                        message
                    )));
                }

                Err(StoreError::RemoveStore(message))
            }
        }
    }

    fn open(&self, backend: Backend) -> Result<Box<dyn StoreHandle>> {
        self.provider
            .open(&Self::config(backend))
            .map_err(|e| StoreError::OpenStore(e.to_string()))
    }
}
