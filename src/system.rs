//! Production store provider backed by the `keyring` crate
//!
//! Serves the platform's native store:
//! - macOS: Keychain
//! - Windows: Credential Manager (DPAPI)
//! - Linux: Secret Service (GNOME Keyring, KWallet)

use keyring::Entry;
use tracing::debug;

use crate::backend::Backend;
use crate::provider::{HandleError, Item, StoreConfig, StoreHandle, StoreProvider};

/// Store provider backed by the platform keyring
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProvider;

impl SystemProvider {
    pub fn new() -> Self {
        Self
    }

    /// The backend the platform keyring serves on this OS
    ///
    /// The password-store backend is allow-listed but never reported here:
    /// the keyring collaborator does not drive the `pass` CLI.
    fn platform_backend() -> Option<Backend> {
        #[cfg(target_os = "windows")]
        {
            Some(Backend::Wincred)
        }
        #[cfg(target_os = "macos")]
        {
            Some(Backend::Keychain)
        }
        #[cfg(target_os = "linux")]
        {
            Some(Backend::SecretService)
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}

impl StoreProvider for SystemProvider {
    fn available_backends(&self) -> Vec<String> {
        Self::platform_backend()
            .map(|backend| backend.id().to_string())
            .into_iter()
            .collect()
    }

    fn open(&self, config: &StoreConfig) -> Result<Box<dyn StoreHandle>, HandleError> {
        match Self::platform_backend() {
            Some(backend) if backend == config.backend => Ok(Box::new(SystemHandle {
                service: config.service,
            })),
            _ => Err(HandleError::Backend(format!(
                "backend {} is not served by the platform keyring",
                config.backend
            ))),
        }
    }
}

/// Handle over `keyring::Entry`, scoped to one service name
struct SystemHandle {
    service: &'static str,
}

impl SystemHandle {
    fn entry(&self, key: &str) -> Result<Entry, HandleError> {
        Entry::new(self.service, key).map_err(|e| HandleError::Backend(e.to_string()))
    }
}

impl StoreHandle for SystemHandle {
    fn set(&self, item: Item) -> Result<(), HandleError> {
        let entry = self.entry(&item.key)?;

        // Platform keyrings store strings, so byte payloads go in as base64
        let encoded = base64_encode(&item.data);
        entry
            .set_password(&encoded)
            .map_err(|e| HandleError::Backend(e.to_string()))?;

        debug!("stored item in platform keyring: {}", item.key);
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Vec<u8>, HandleError> {
        let entry = self.entry(key)?;

        match entry.get_password() {
            Ok(encoded) => base64_decode(&encoded),
            Err(keyring::Error::NoEntry) => Err(HandleError::NotFound),
            Err(e) => Err(HandleError::Backend(e.to_string())),
        }
    }

    fn remove(&self, key: &str) -> Result<(), HandleError> {
        let entry = self.entry(key)?;

        match entry.delete_password() {
            Ok(()) => {
                debug!("deleted item from platform keyring: {}", key);
                Ok(())
            }
            Err(keyring::Error::NoEntry) => Err(HandleError::NotFound),
            Err(e) => Err(HandleError::Backend(e.to_string())),
        }
    }
}

/// Base64 encode bytes
fn base64_encode(data: &[u8]) -> String {
    use base64::Engine;
    base64::engine::general_purpose::STANDARD.encode(data)
}

/// Base64 decode string
fn base64_decode(encoded: &str) -> Result<Vec<u8>, HandleError> {
    use base64::Engine;
    base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| HandleError::Backend(format!("base64 decode error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_at_most_one_platform_backend() {
        let provider = SystemProvider::new();
        let available = provider.available_backends();

        assert!(available.len() <= 1);
        for id in &available {
            assert!(id.parse::<Backend>().is_ok());
        }
    }

    #[test]
    fn test_open_rejects_foreign_backend() {
        let provider = SystemProvider::new();

        // Whatever the platform is, the pass backend is never served here
        let config = StoreConfig {
            backend: Backend::Pass,
            service: "test-service",
            collection: "login",
            trust_application: true,
            synchronizable: false,
            accessible_when_unlocked: false,
        };

        assert!(provider.open(&config).is_err());
    }
}
