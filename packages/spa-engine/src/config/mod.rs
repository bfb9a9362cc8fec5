//! Analyzer configuration
//!
//! Two tiers:
//! - Preset: one-liner defaults (`fast`, `balanced`, `thorough`)
//! - YAML v1: preset plus per-section overrides
//!
//! # Examples
//!
//! ```rust,ignore
//! use spa_engine::config::{AnalyzerConfig, Preset};
//!
//! let config = AnalyzerConfig::preset(Preset::Fast);
//! let config = AnalyzerConfig::preset(Preset::Balanced)
//!     .optimizer(|c| c.seed_strategy(SeedStrategy::AllNodes));
//! let config = AnalyzerConfig::from_yaml_file("analyzer.yaml")?;
//! ```

pub mod analyzer_config;
pub mod error;
pub mod io;
pub mod preset;
pub mod stage_configs;
pub mod validation;

// Re-exports
pub use analyzer_config::AnalyzerConfig;
pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigExportV1, ConfigOverrides};
pub use preset::Preset;
pub use stage_configs::{ExtractionConfig, OptimizerConfig, SeedStrategy};
pub use validation::{validate_section, Validatable};
