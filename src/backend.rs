//! Secure-store backend identifiers
//!
//! The allow-list is the four OS-native stores this crate is willing to talk
//! to. Anything else a provider might report is filtered out before it is
//! visible to callers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// An OS-native secure-storage mechanism
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    /// Windows Credential Manager
    Wincred,
    /// macOS Keychain
    Keychain,
    /// Linux Secret Service (GNOME Keyring, KWallet)
    SecretService,
    /// password-store (`pass`)
    Pass,
}

impl Backend {
    /// Backends callers are allowed to request
    pub const ALLOWED: [Backend; 4] = [
        Backend::Wincred,
        Backend::Keychain,
        Backend::SecretService,
        Backend::Pass,
    ];

    /// Stable string identifier for this backend
    pub fn id(self) -> &'static str {
        match self {
            Backend::Wincred => "wincred",
            Backend::Keychain => "keychain",
            Backend::SecretService => "secret-service",
            Backend::Pass => "pass",
        }
    }

    /// Identifiers of all allowed backends
    pub fn allowed_ids() -> [&'static str; 4] {
        [
            Backend::Wincred.id(),
            Backend::Keychain.id(),
            Backend::SecretService.id(),
            Backend::Pass.id(),
        ]
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Backend {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wincred" => Ok(Backend::Wincred),
            "keychain" => Ok(Backend::Keychain),
            "secret-service" => Ok(Backend::SecretService),
            "pass" => Ok(Backend::Pass),
            other => Err(StoreError::InvalidBackend {
                requested: other.to_string(),
            }),
        }
    }
}
