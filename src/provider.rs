//! Collaborator seam for the underlying secure-store library
//!
//! The adapter never talks to an OS store directly; it goes through a
//! [`StoreProvider`] that opens short-lived [`StoreHandle`]s. Production code
//! uses [`crate::SystemProvider`]; tests substitute in-memory providers.

use thiserror::Error;

use crate::backend::Backend;

/// Fixed configuration for opening a secure-store handle
///
/// Every field is a process-wide constant chosen by the adapter; nothing here
/// is caller-configurable. Providers apply the subset their platform
/// understands and ignore the rest.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// The single backend this handle is restricted to
    pub backend: Backend,
    /// Service name used to namespace items
    pub service: &'static str,
    /// Collection the item lives in (e.g. the "login" keychain)
    pub collection: &'static str,
    /// macOS: trust this application without a per-call prompt
    pub trust_application: bool,
    /// macOS: synchronize the item across devices
    pub synchronizable: bool,
    /// macOS: restrict access to the unlocked state
    pub accessible_when_unlocked: bool,
}

/// A single secret entry within a backend's collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub key: String,
    pub label: String,
    pub description: String,
    pub data: Vec<u8>,
}

/// Handle-level failures
///
/// "Not found" stays distinguishable so the adapter can downgrade it to an
/// empty read and an idempotent removal.
#[derive(Error, Debug)]
pub enum HandleError {
    #[error("item not found")]
    NotFound,

    #[error("{0}")]
    Backend(String),
}

/// Provider of secure-store handles (the external keyring collaborator)
pub trait StoreProvider {
    /// Backend identifiers the OS reports as usable, in OS-reported order
    ///
    /// May include identifiers outside this crate's allow-list; the adapter
    /// filters them out.
    fn available_backends(&self) -> Vec<String>;

    /// Open a handle restricted to the configured backend
    fn open(&self, config: &StoreConfig) -> Result<Box<dyn StoreHandle>, HandleError>;
}

/// An open handle to one backend's collection
///
/// Handles are opened fresh per call and dropped at the end of it; nothing is
/// cached across calls.
pub trait StoreHandle {
    /// Write an item, overwriting any existing item under the same key
    fn set(&self, item: Item) -> Result<(), HandleError>;

    /// Fetch an item's data by key
    fn get(&self, key: &str) -> Result<Vec<u8>, HandleError>;

    /// Remove an item by key
    fn remove(&self, key: &str) -> Result<(), HandleError>;
}
