//! Section-specific configuration types
//!
//! One struct per analyzer phase, each with builders, preset defaults and
//! validation.

use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use super::validation::Validatable;
use serde::{Deserialize, Serialize};

/// Largest clause group the sorter accepts (one bit per clause)
pub const MAX_GROUP_SIZE: usize = 64;

// ============================================================================
// Design Extraction Configuration
// ============================================================================

/// Which derived relation families the knowledge base builder computes
///
/// Follows, Parent, Uses, Modifies, Calls and Next are always extracted.
/// Disabled families are left as empty tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Next* closure, and NextBip* when `bip` is on
    pub next_star: bool,

    /// Affects / Affects*
    pub affects: bool,

    /// NextBip / AffectsBip / AffectsBip* (NextBip* also needs `next_star`)
    pub bip: bool,
}

impl ExtractionConfig {
    /// Builder: Set next_star
    pub fn next_star(mut self, v: bool) -> Self {
        self.next_star = v;
        self
    }

    /// Builder: Set affects
    pub fn affects(mut self, v: bool) -> Self {
        self.affects = v;
        self
    }

    /// Builder: Set bip
    pub fn bip(mut self, v: bool) -> Self {
        self.bip = v;
        self
    }

    /// Get preset configuration
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Fast => Self {
                next_star: true,
                affects: false,
                bip: false,
            },
            Preset::Balanced => Self {
                next_star: true,
                affects: true,
                bip: false,
            },
            Preset::Thorough => Self {
                next_star: true,
                affects: true,
                bip: true,
            },
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Balanced)
    }
}

impl Validatable for ExtractionConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "extraction"
    }
}

// ============================================================================
// Query Optimizer Configuration
// ============================================================================

/// Which clauses the group sorter tries as the first pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedStrategy {
    /// Only the clauses sharing the group's minimum weight
    #[default]
    MinWeight,
    /// Every clause; optimal over all connected arrangements
    AllNodes,
}

/// Query Optimizer Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Master switch; when off the query keeps its written order
    pub enabled: bool,

    /// Replace synonyms fixed by `with x = literal` in the other clauses
    pub substitute_with_values: bool,

    /// Drop structurally equal clauses after the first occurrence
    pub remove_duplicate_clauses: bool,

    /// Order groups: no synonyms, then unselected synonyms, then by size
    pub sort_groups: bool,

    /// DP seed selection
    pub seed_strategy: SeedStrategy,

    /// Groups above this size are ordered greedily instead of by the exact DP (1..=64)
    pub max_group_size: usize,
}

impl OptimizerConfig {
    /// Builder: Set enabled
    pub fn enabled(mut self, v: bool) -> Self {
        self.enabled = v;
        self
    }

    /// Builder: Set substitute_with_values
    pub fn substitute_with_values(mut self, v: bool) -> Self {
        self.substitute_with_values = v;
        self
    }

    /// Builder: Set remove_duplicate_clauses
    pub fn remove_duplicate_clauses(mut self, v: bool) -> Self {
        self.remove_duplicate_clauses = v;
        self
    }

    /// Builder: Set sort_groups
    pub fn sort_groups(mut self, v: bool) -> Self {
        self.sort_groups = v;
        self
    }

    /// Builder: Set seed_strategy
    pub fn seed_strategy(mut self, v: SeedStrategy) -> Self {
        self.seed_strategy = v;
        self
    }

    /// Builder: Set max_group_size
    pub fn max_group_size(mut self, v: usize) -> Self {
        self.max_group_size = v;
        self
    }

    /// Get preset configuration
    pub fn from_preset(preset: Preset) -> Self {
        let seed_strategy = match preset {
            Preset::Fast | Preset::Balanced => SeedStrategy::MinWeight,
            Preset::Thorough => SeedStrategy::AllNodes,
        };
        Self {
            enabled: true,
            substitute_with_values: true,
            remove_duplicate_clauses: true,
            sort_groups: true,
            seed_strategy,
            max_group_size: match preset {
                Preset::Fast => 16,
                Preset::Balanced => 20,
                Preset::Thorough => 24,
            },
        }
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Balanced)
    }
}

impl Validatable for OptimizerConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_group_size == 0 || self.max_group_size > MAX_GROUP_SIZE {
            return Err(ConfigError::range_with_hint(
                "max_group_size",
                self.max_group_size,
                1,
                MAX_GROUP_SIZE,
                "Clause groups are sorted over a 64-bit mask",
            ));
        }

        if !self.enabled && (self.substitute_with_values || self.remove_duplicate_clauses) {
            return Err(ConfigError::conflict(
                "with-value substitution and duplicate removal run inside the optimizer",
                "set enabled: true or turn both rewrites off",
            ));
        }

        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "optimizer"
    }
}
