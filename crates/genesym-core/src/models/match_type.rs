use std::fmt;

use serde::{Deserialize, Serialize};

/// How a symbol relates to its authoritative entry after clean-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MatchType {
    #[serde(rename = "Approved symbol")]
    Approved,
    #[serde(rename = "Previous symbol")]
    Previous,
    #[serde(rename = "Alias symbol")]
    Alias,
    /// Alias dropped because its target is already present as an approved symbol.
    #[serde(rename = "Alias_discarded_existing_approved")]
    AliasDiscardedExistingApproved,
    /// Alias of several approved symbols, kept unchanged.
    #[serde(rename = "Alias_discarded")]
    AliasDiscarded,
    #[serde(rename = "unmatched")]
    Unmatched,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "Approved symbol",
            Self::Previous => "Previous symbol",
            Self::Alias => "Alias symbol",
            Self::AliasDiscardedExistingApproved => "Alias_discarded_existing_approved",
            Self::AliasDiscarded => "Alias_discarded",
            Self::Unmatched => "unmatched",
        }
    }

    /// Human-readable label used in change reasons, e.g. "Alias discarded".
    pub fn label(&self) -> String {
        capitalize(&self.as_str().replace('_', " "))
    }

    /// A match the resolver accepts as resolving the symbol.
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Approved | Self::Previous | Self::Alias)
    }

    /// Approved or previous symbol: an unambiguous authoritative form.
    pub fn is_authoritative(&self) -> bool {
        matches!(self, Self::Approved | Self::Previous)
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
