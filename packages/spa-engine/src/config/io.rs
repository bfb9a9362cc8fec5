//! Configuration I/O (YAML)
//!
//! Defines the YAML schema types. Loading and export live on
//! [`AnalyzerConfig`](super::AnalyzerConfig).

use super::stage_configs::{ExtractionConfig, OptimizerConfig};
use serde::{Deserialize, Serialize};

/// Schema versions this build can read
pub const SUPPORTED_VERSIONS: [u32; 1] = [1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    pub version: u32,

    /// Base preset
    pub preset: String,

    /// Per-section overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<ConfigOverrides>,
}

/// Configuration overrides
///
/// A present section replaces the preset's section wholesale; fields the
/// section omits take their balanced defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction: Option<ExtractionConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimizer: Option<OptimizerConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::error::ConfigError;
    use crate::config::{AnalyzerConfig, Preset, SeedStrategy};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_yaml_export() {
        let config = AnalyzerConfig::preset(Preset::Fast).optimizer(|c| c.max_group_size(12));

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("version: 1"));
        assert!(yaml.contains("preset: fast"));
        assert!(yaml.contains("max_group_size: 12"));
    }

    #[test]
    fn test_yaml_loading() {
        let yaml_content = r#"
version: 1
preset: fast
overrides:
  extraction:
    affects: true
  optimizer:
    seed_strategy: all_nodes
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml_content.as_bytes()).unwrap();

        let config = AnalyzerConfig::from_yaml_file(temp_file.path()).unwrap();
        assert!(config.extraction.affects);
        // Omitted fields fall back to the section default
        assert!(config.extraction.next_star);
        assert_eq!(config.optimizer.seed_strategy, SeedStrategy::AllNodes);
    }

    #[test]
    fn test_yaml_missing_version() {
        let result = AnalyzerConfig::from_yaml_str("preset: fast\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_yaml_unsupported_version() {
        let result = AnalyzerConfig::from_yaml_str("version: 2\npreset: fast\n");
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::UnsupportedVersion { found: 2, .. }
        ));
    }

    #[test]
    fn test_yaml_unknown_section_rejected() {
        let yaml = "version: 1\npreset: fast\noverrides:\n  parser:\n    strict: true\n";
        assert!(matches!(
            AnalyzerConfig::from_yaml_str(yaml),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn test_yaml_invalid_override_is_validated() {
        let yaml = "version: 1\npreset: balanced\noverrides:\n  optimizer:\n    max_group_size: 100\n";
        assert!(matches!(
            AnalyzerConfig::from_yaml_str(yaml),
            Err(ConfigError::Range { field, .. }) if field == "optimizer.max_group_size"
        ));
    }
}
