//! Named, pure string → string normalization rules.

use std::fmt;

use genesym_core::constants::IDENTITY;
use genesym_core::errors::ConfigError;

/// A named symbol transform.
#[derive(Clone, Copy)]
pub struct Manipulation {
    pub name: &'static str,
    transform: fn(&str) -> String,
}

impl Manipulation {
    pub fn apply(&self, symbol: &str) -> String {
        (self.transform)(symbol)
    }

    pub fn is_identity(&self) -> bool {
        self.name == IDENTITY
    }
}

impl fmt::Debug for Manipulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manipulation").field("name", &self.name).finish()
    }
}

pub mod rules {
    /// The symbol unchanged.
    pub fn identity(symbol: &str) -> String {
        symbol.to_string()
    }

    /// Every `.` replaced by `-` (`HLA.A` → `HLA-A`).
    pub fn dot_to_dash(symbol: &str) -> String {
        symbol.replace('.', "-")
    }

    /// Text before the first `.` (`ENSG00000141510.16` → `ENSG00000141510`).
    pub fn discard_after_dot(symbol: &str) -> String {
        symbol.split('.').next().unwrap_or(symbol).to_string()
    }
}

const REGISTRY: [Manipulation; 3] = [
    Manipulation {
        name: IDENTITY,
        transform: rules::identity,
    },
    Manipulation {
        name: "dot_to_dash",
        transform: rules::dot_to_dash,
    },
    Manipulation {
        name: "discard_after_dot",
        transform: rules::discard_after_dot,
    },
];

/// Ordered selection of manipulations. Earlier steps win for a given symbol.
#[derive(Debug, Clone)]
pub struct ManipulationPipeline {
    steps: Vec<Manipulation>,
}

impl ManipulationPipeline {
    /// Select manipulations by name, keeping the caller's order.
    ///
    /// Unknown names are a configuration error.
    pub fn select<S: AsRef<str>>(names: &[S]) -> Result<Self, ConfigError> {
        if names.is_empty() {
            return Err(ConfigError::EmptyManipulations);
        }
        let steps = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                REGISTRY
                    .iter()
                    .find(|m| m.name == name)
                    .copied()
                    .ok_or_else(|| ConfigError::UnknownManipulation {
                        name: name.to_string(),
                        available: REGISTRY.iter().map(|m| m.name.to_string()).collect(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[Manipulation] {
        &self.steps
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|m| m.name).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
