use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Unification pipeline configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnifyConfig {
    /// Manipulation names, tried in order.
    pub manipulations: Vec<String>,
    /// Keep a symbol unchanged when it is an alias of several approved symbols,
    /// instead of dropping it from the match table.
    pub keep_gene_multiple_aliases: bool,
    /// Run the approved aggregation stage after unapproved resolution.
    pub aggregate_approved: bool,
    /// Minimum coverage gain (union / largest) for an approved symbol to aggregate.
    pub aggregation_ratio: f64,
    /// Emit a `conflict` record for samples that already hold both symbols of a merge.
    pub report_shared_samples: bool,
}

impl Default for UnifyConfig {
    fn default() -> Self {
        Self {
            manipulations: defaults::DEFAULT_MANIPULATIONS
                .iter()
                .map(|m| m.to_string())
                .collect(),
            keep_gene_multiple_aliases: defaults::DEFAULT_KEEP_GENE_MULTIPLE_ALIASES,
            aggregate_approved: defaults::DEFAULT_AGGREGATE_APPROVED,
            aggregation_ratio: defaults::DEFAULT_AGGREGATION_RATIO,
            report_shared_samples: defaults::DEFAULT_REPORT_SHARED_SAMPLES,
        }
    }
}

impl UnifyConfig {
    /// Load configuration from a TOML file and validate it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: UnifyConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string and validate it.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: UnifyConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    ///
    /// Manipulation names are checked against the registry by the matching crate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.manipulations.is_empty() {
            return Err(ConfigError::EmptyManipulations);
        }
        if !self.aggregation_ratio.is_finite() || self.aggregation_ratio < 1.0 {
            return Err(ConfigError::ValidationFailed {
                field: "aggregation_ratio".to_string(),
                message: "must be a finite number >= 1.0".to_string(),
            });
        }
        Ok(())
    }
}
