//! # Settings Module
//!
//! ## Purpose
//! Holds the knobs of conversion and comparison that callers may want to change
//! without touching code, stored as a small JSON file.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "native_extension": "yaml",
//!   "permissive": true,
//!   "tolerance": { "relative": 1e-5, "absolute": 1e-8 }
//! }
//! ```
//! Every field is optional in the file; missing ones take their default.
//!
//! ## Usage Pattern
//! ```rust, ignore
//! use mechtools::settings::Settings;
//!
//! let settings = Settings::load(Path::new("mechtools.json"))?;
//! let converter = Converter::new(SerdeLibrary, settings);
//! ```
use crate::Conversion::error::MechError;
use crate::Mechanism::compare::Tolerance;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Conversion and comparison settings.
///
/// # Fields
/// * `native_extension` - extension (without dot) marking native mechanism files
/// * `permissive` - tolerate repeated entries and unknown third-body colliders in foreign input
/// * `tolerance` - tolerance of PLOG pressures and Chebyshev coefficients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub native_extension: String,
    pub permissive: bool,
    pub tolerance: Tolerance,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            native_extension: "yaml".to_string(),
            permissive: true,
            tolerance: Tolerance::default(),
        }
    }
}

impl Settings {
    /// Loads settings from a JSON file.
    ///
    /// # Returns
    /// * `Ok(Settings)` - parsed settings, defaults for fields the file leaves out
    /// * `Err(MechError::Io)` - the file cannot be read
    /// * `Err(MechError::Settings)` - the file is not valid settings JSON or names no extension
    pub fn load(path: &Path) -> Result<Self, MechError> {
        let content = fs::read_to_string(path).map_err(|e| MechError::io(path, e))?;
        let settings: Settings = serde_json::from_str(&content)
            .map_err(|e| MechError::Settings(format!("{}: {}", path.display(), e)))?;
        settings.validate()?;
        info!("settings loaded from {}", path.display());
        Ok(settings)
    }

    /// Saves settings as pretty-printed JSON, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<(), MechError> {
        self.validate()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| MechError::io(path, e))
    }

    fn validate(&self) -> Result<(), MechError> {
        if self.native_extension.trim_start_matches('.').trim().is_empty() {
            return Err(MechError::Settings(
                "native_extension must not be empty".to_string(),
            ));
        }
        if !(self.tolerance.relative >= 0.0 && self.tolerance.absolute >= 0.0) {
            return Err(MechError::Settings(format!(
                "tolerances must be non-negative, got {:?}",
                self.tolerance
            )));
        }
        Ok(())
    }
}
