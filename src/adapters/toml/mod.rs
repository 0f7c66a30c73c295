//! TOML-backed recipient registry
//!
//! Implements the `RecipientRegistry` port over a `recipients.toml` file:
//! an array of `[[recipient]]` tables, human-edited and committed alongside
//! the project config. A missing file reads as an empty registry; a file
//! that exists but does not parse is an error.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::models::{Category, GeoPoint, Recipient};
use crate::core::ports::{RecipientRegistry, RegistryError};

/// One `[[recipient]]` table in the registry file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipientEntry {
    /// Unique identifier
    pub id: String,
    /// Organization name
    pub name: String,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
    /// Maximum quantity acceptable per run, in kilograms
    pub capacity_kg: f64,
    /// Accepted food categories
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Whether the organization has been verified
    #[serde(default)]
    pub verified: bool,
}

/// The registry file as a whole
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipientsFile {
    /// All registered recipients
    #[serde(default, rename = "recipient")]
    pub recipients: Vec<RecipientEntry>,
}

impl From<RecipientEntry> for Recipient {
    fn from(entry: RecipientEntry) -> Self {
        Self {
            recipient_id: entry.id,
            name: entry.name,
            location: GeoPoint::new(entry.lat, entry.lng),
            capacity_kg: entry.capacity_kg,
            accepted_categories: entry.categories,
            verified: entry.verified,
        }
    }
}

impl From<Recipient> for RecipientEntry {
    fn from(recipient: Recipient) -> Self {
        Self {
            id: recipient.recipient_id,
            name: recipient.name,
            lat: recipient.location.lat,
            lng: recipient.location.lng,
            capacity_kg: recipient.capacity_kg,
            categories: recipient.accepted_categories,
            verified: recipient.verified,
        }
    }
}

/// Recipient registry backed by a recipients.toml file
#[derive(Debug, Clone)]
pub struct TomlRecipientRegistry {
    /// Path to the registry file
    path: PathBuf,
}

impl TomlRecipientRegistry {
    /// Create a registry over the given file
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the registry file; a missing file is an empty registry
    fn load(&self) -> Result<RecipientsFile, RegistryError> {
        if !self.path.exists() {
            return Ok(RecipientsFile::default());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| RegistryError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| RegistryError::Parse {
            path: self.path.display().to_string(),
            detail: e.to_string(),
        })
    }

    fn save(&self, file: &RecipientsFile) -> Result<(), RegistryError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| RegistryError::Io(e.to_string()))?;
        }

        let content = toml::to_string_pretty(file)
            .map_err(|e| RegistryError::Io(e.to_string()))?;
        fs::write(&self.path, content).map_err(|e| RegistryError::Io(e.to_string()))
    }
}

impl RecipientRegistry for TomlRecipientRegistry {
    fn list(&self) -> Result<Vec<Recipient>, RegistryError> {
        Ok(self.load()?.recipients.into_iter().map(Recipient::from).collect())
    }

    fn add(&self, recipient: Recipient) -> Result<(), RegistryError> {
        let mut file = self.load()?;

        if file.recipients.iter().any(|e| e.id == recipient.recipient_id) {
            return Err(RegistryError::DuplicateRecipient(recipient.recipient_id));
        }

        file.recipients.push(recipient.into());
        self.save(&file)
    }

    fn remove(&self, recipient_id: &str) -> Result<(), RegistryError> {
        let mut file = self.load()?;
        let initial_len = file.recipients.len();

        file.recipients.retain(|e| e.id != recipient_id);

        if file.recipients.len() == initial_len {
            return Err(RegistryError::UnknownRecipient(recipient_id.to_string()));
        }

        self.save(&file)
    }

    fn set_verified(&self, recipient_id: &str, verified: bool) -> Result<(), RegistryError> {
        let mut file = self.load()?;

        let Some(entry) = file.recipients.iter_mut().find(|e| e.id == recipient_id) else {
            return Err(RegistryError::UnknownRecipient(recipient_id.to_string()));
        };

        entry.verified = verified;
        self.save(&file)
    }
}
