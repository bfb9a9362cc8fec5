//! Configuration validation
//!
//! Every config section implements [`Validatable`]; the analyzer config
//! validates each of its sections through [`validate_section`].

use super::error::{ConfigError, ConfigResult};

/// Trait for validatable configuration objects
pub trait Validatable {
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Get the configuration name for error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}

/// Validate one section, qualifying range errors as `section.field`
pub fn validate_section<T: Validatable>(section: &T) -> ConfigResult<()> {
    section.validate().map_err(|err| match err {
        ConfigError::Range {
            field,
            value,
            min,
            max,
            hint,
        } => ConfigError::Range {
            field: format!("{}.{}", section.config_name(), field),
            value,
            min,
            max,
            hint,
        },
        other => other,
    })
}
