// Engine settings, loaded from a JSON file or left at their defaults
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use shared::utils::currency::CurrencyStyle;

use crate::data::csv_parser::UNKNOWN_LABEL;
use crate::error::EngineError;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EngineSettings {
    /// Cell delimiter of the input table.
    pub delimiter: char,
    /// Stand-in for an empty company or type cell.
    pub unknown_label: String,
    pub currency: CurrencyStyle,
    /// Where aggregate tables are written as CSV, if anywhere.
    pub export_dir: Option<PathBuf>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            delimiter: ',',
            unknown_label: UNKNOWN_LABEL.to_string(),
            currency: CurrencyStyle::default(),
            export_dir: None,
        }
    }
}

impl EngineSettings {
    /// Parses settings JSON; absent keys keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let settings: EngineSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), "Loaded engine settings");
        Ok(settings)
    }

    fn validate(&self) -> Result<(), EngineError> {
        if self.delimiter == '"' || self.delimiter == '\n' || self.delimiter == '\r' {
            return Err(EngineError::ConfigError(format!(
                "Delimiter {:?} cannot be used to separate cells",
                self.delimiter
            )));
        }
        if self.unknown_label.trim().is_empty() {
            return Err(EngineError::ConfigError("unknown_label must not be empty".to_string()));
        }
        Ok(())
    }
}
