//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the shift
//! form's field list from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{CalculatorError, CalculatorResult};

use super::types::{FieldRegistry, FieldsConfig};

/// Loads the field registry from YAML.
///
/// # File Structure
///
/// ```text
/// fields:
///   - id: fuel_expense
///     label: "Fuel (ignore Fuel Card purchases)"
///     placeholder: "Ignore fuel paid with Fuel Card"
///   - id: car_wash
///     label: "Car Wash"
///   ...
/// ```
///
/// `step`, `min` and `max` default to `0.01`, `0.0` and `10000.0`.
///
/// # Example
///
/// ```no_run
/// use shift_summary::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/fields.yaml").unwrap();
/// println!("Loaded {} fields", loader.registry().fields().count());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    registry: FieldRegistry,
}

impl ConfigLoader {
    /// Loads the field list from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML or unknown field ids
    /// - The field list does not name each form field exactly once
    pub fn load<P: AsRef<Path>>(path: P) -> CalculatorResult<Self> {
        let path = path.as_ref();
        let config = Self::load_yaml::<FieldsConfig>(path)?;
        let registry = FieldRegistry::from_specs(config.fields)?;

        debug!(path = %path.display(), "Loaded field registry");
        Ok(Self { registry })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> CalculatorResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| CalculatorError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| CalculatorError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded registry.
    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    /// Consumes the loader, returning the registry.
    pub fn into_registry(self) -> FieldRegistry {
        self.registry
    }
}
