//! Project configuration management
//!
//! Settings load from `replate.toml` in the working directory, falling back
//! to `~/.replate/config.toml`, then to defaults. A config file that exists
//! but does not parse is an error, never a silent default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::services::ImpactFactors;
use crate::paths;

/// Project configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// The surplus site (restaurant/kitchen)
    #[serde(default)]
    pub site: SiteConfig,
    /// Risk analysis settings
    #[serde(default)]
    pub risk: RiskConfig,
    /// Impact estimation factors
    #[serde(default)]
    pub impact: ImpactConfig,
    /// Hosted-model settings
    #[serde(default)]
    pub llm: LlmConfig,
    /// File locations
    #[serde(default)]
    pub paths: PathsConfig,
}

/// The surplus site: where distance to recipients is measured from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site name, used in output headers
    #[serde(default = "default_site_name")]
    pub name: String,
    /// Site latitude in degrees
    #[serde(default)]
    pub lat: f64,
    /// Site longitude in degrees
    #[serde(default)]
    pub lng: f64,
}

fn default_site_name() -> String {
    "kitchen".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            lat: 0.0,
            lng: 0.0,
        }
    }
}

/// Risk analysis settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Days of projected need that stock may cover before counting as surplus
    #[serde(default = "default_window_days")]
    pub surplus_window_days: u32,
}

const fn default_window_days() -> u32 {
    7
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            surplus_window_days: default_window_days(),
        }
    }
}

/// Impact estimation factors (per kilogram)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ImpactConfig {
    /// CO2-equivalent emissions avoided per kilogram
    #[serde(default = "default_co2")]
    pub co2_per_kg: f64,
    /// Meals provided per kilogram
    #[serde(default = "default_meals")]
    pub meals_per_kg: f64,
    /// Purchase cost recovered per kilogram
    #[serde(default = "default_cost")]
    pub cost_per_kg: f64,
}

const fn default_co2() -> f64 {
    2.5
}

const fn default_meals() -> f64 {
    10.0
}

const fn default_cost() -> f64 {
    250.0
}

impl Default for ImpactConfig {
    fn default() -> Self {
        Self {
            co2_per_kg: default_co2(),
            meals_per_kg: default_meals(),
            cost_per_kg: default_cost(),
        }
    }
}

impl From<ImpactConfig> for ImpactFactors {
    fn from(config: ImpactConfig) -> Self {
        Self {
            co2_per_kg: config.co2_per_kg,
            meals_per_kg: config.meals_per_kg,
            cost_per_kg: config.cost_per_kg,
        }
    }
}

/// Hosted-model settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Model identifier passed to the API
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
        }
    }
}

/// File locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Recipient registry file, relative to the working directory
    #[serde(default = "default_recipients")]
    pub recipients: String,
}

fn default_recipients() -> String {
    paths::RECIPIENTS_TOML.to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            recipients: default_recipients(),
        }
    }
}

impl Config {
    /// Load configuration: project file, then global file, then defaults
    pub fn load() -> anyhow::Result<Self> {
        let project = paths::project_config();
        if project.exists() {
            return Self::load_from(&project);
        }

        let global = paths::global_config();
        if global.exists() {
            return Self::load_from(&global);
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read {}: {e}", path.display()))?;
        toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("invalid config {}: {e}", path.display()))
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// The recipient registry path from config
    #[must_use]
    pub fn recipients_path(&self) -> PathBuf {
        PathBuf::from(&self.paths.recipients)
    }
}
