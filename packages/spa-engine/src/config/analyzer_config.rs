//! Top-level analyzer configuration

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigExportV1, ConfigOverrides, SUPPORTED_VERSIONS};
use super::preset::Preset;
use super::stage_configs::{ExtractionConfig, OptimizerConfig};
use super::validation::{validate_section, Validatable};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for knowledge-base construction and query optimisation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub preset: Preset,
    pub extraction: ExtractionConfig,
    pub optimizer: OptimizerConfig,
}

impl AnalyzerConfig {
    /// Complete defaults for a preset
    pub fn preset(preset: Preset) -> Self {
        Self {
            preset,
            extraction: ExtractionConfig::from_preset(preset),
            optimizer: OptimizerConfig::from_preset(preset),
        }
    }

    /// Override the extraction section
    pub fn extraction(mut self, f: impl FnOnce(ExtractionConfig) -> ExtractionConfig) -> Self {
        self.extraction = f(self.extraction);
        self
    }

    /// Override the optimizer section
    pub fn optimizer(mut self, f: impl FnOnce(OptimizerConfig) -> OptimizerConfig) -> Self {
        self.optimizer = f(self.optimizer);
        self
    }

    /// Parse a YAML v1 document and validate the result
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        if !SUPPORTED_VERSIONS.contains(&export.version) {
            return Err(ConfigError::UnsupportedVersion {
                found: export.version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let preset = Preset::from_str(&export.preset)?;
        let mut config = Self::preset(preset);

        if let Some(overrides) = export.overrides {
            if let Some(extraction) = overrides.extraction {
                config.extraction = extraction;
            }
            if let Some(optimizer) = overrides.optimizer {
                config.optimizer = optimizer;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Load from YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Export to YAML (v1 schema, every section spelled out)
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: SUPPORTED_VERSIONS[0],
            preset: self.preset.to_string(),
            overrides: Some(ConfigOverrides {
                extraction: Some(self.extraction.clone()),
                optimizer: Some(self.optimizer.clone()),
            }),
        };

        Ok(serde_yaml::to_string(&export)?)
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}

impl Validatable for AnalyzerConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_section(&self.extraction)?;
        validate_section(&self.optimizer)?;
        Ok(())
    }
}
