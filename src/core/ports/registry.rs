//! Recipient registry port
//!
//! Defines the interface for loading and managing recipient organizations.
//! Implementations handle persistence (TOML file, database, ...).

use thiserror::Error;

use super::super::models::Recipient;

/// Errors that can occur when reading or writing the registry
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The registry store could not be read or written
    #[error("registry I/O error: {0}")]
    Io(String),

    /// The registry store exists but could not be parsed
    #[error("invalid registry file {path}: {detail}")]
    Parse {
        /// The file that failed to parse
        path: String,
        /// What went wrong
        detail: String,
    },

    /// No recipient with the given id exists
    #[error("unknown recipient: {0}")]
    UnknownRecipient(String),

    /// A recipient with the given id already exists
    #[error("recipient already exists: {0}")]
    DuplicateRecipient(String),
}

/// Store of recipient organizations
pub trait RecipientRegistry: Send + Sync {
    /// All recipients in the registry
    fn list(&self) -> Result<Vec<Recipient>, RegistryError>;

    /// Add a new recipient; errors if the id is already taken
    fn add(&self, recipient: Recipient) -> Result<(), RegistryError>;

    /// Remove a recipient by id
    fn remove(&self, recipient_id: &str) -> Result<(), RegistryError>;

    /// Mark a recipient as verified or unverified
    fn set_verified(&self, recipient_id: &str, verified: bool) -> Result<(), RegistryError>;
}
