use std::fmt;

use serde::{Deserialize, Serialize};

use super::{SampleId, Symbol};

/// What a change record asks the caller to do with a symbol in a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeAction {
    /// Replace the symbol by the new one.
    Rename,
    /// Keep the symbol and add the new one alongside it.
    Copy,
    /// Ambiguous or contradictory; left for manual review.
    Conflict,
}

impl ChangeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rename => "rename",
            Self::Copy => "copy",
            Self::Conflict => "conflict",
        }
    }
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One auditable rename/copy/conflict decision. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// `None` for node-level conflicts that concern no single sample.
    pub sample: Option<SampleId>,
    pub action: ChangeAction,
    pub symbol: Symbol,
    pub new: Option<Symbol>,
    pub reason: String,
}

impl ChangeRecord {
    /// A rename or copy of `symbol` to `new` within one sample.
    pub fn transfer(
        sample: &str,
        action: ChangeAction,
        symbol: &str,
        new: &str,
        reason: String,
    ) -> Self {
        Self {
            sample: Some(sample.to_string()),
            action,
            symbol: symbol.to_string(),
            new: Some(new.to_string()),
            reason,
        }
    }

    /// A conflict within one sample.
    pub fn sample_conflict(sample: &str, symbol: &str, new: &str, reason: String) -> Self {
        Self {
            sample: Some(sample.to_string()),
            action: ChangeAction::Conflict,
            symbol: symbol.to_string(),
            new: Some(new.to_string()),
            reason,
        }
    }

    /// A conflict about a node as a whole.
    pub fn node_conflict(symbol: &str, reason: String) -> Self {
        Self {
            sample: None,
            action: ChangeAction::Conflict,
            symbol: symbol.to_string(),
            new: None,
            reason,
        }
    }

    pub fn is_conflict(&self) -> bool {
        self.action == ChangeAction::Conflict
    }
}
