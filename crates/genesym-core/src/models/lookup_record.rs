use serde::{Deserialize, Serialize};

use super::MatchType;

/// Classification returned by the nomenclature service for one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LookupMatch {
    #[serde(rename = "Approved symbol")]
    Approved,
    #[serde(rename = "Previous symbol")]
    Previous,
    #[serde(rename = "Alias symbol")]
    Alias,
    #[serde(rename = "Unmatched")]
    Unmatched,
}

impl LookupMatch {
    pub fn to_match_type(self) -> MatchType {
        match self {
            Self::Approved => MatchType::Approved,
            Self::Previous => MatchType::Previous,
            Self::Alias => MatchType::Alias,
            Self::Unmatched => MatchType::Unmatched,
        }
    }
}

/// One row of a nomenclature lookup response.
///
/// A candidate may produce several rows (e.g. a previous symbol of one gene
/// that is also an alias of another).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRecord {
    /// The candidate string as sent to the service.
    pub input: String,
    #[serde(default)]
    pub approved_symbol: Option<String>,
    #[serde(default)]
    pub match_type: Option<LookupMatch>,
    /// Authoritative locus information, passed through untouched.
    #[serde(default)]
    pub location: Option<String>,
}

impl LookupRecord {
    pub fn unmatched(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            approved_symbol: None,
            match_type: Some(LookupMatch::Unmatched),
            location: None,
        }
    }

    /// The matched approved symbol, if this row resolves its candidate.
    pub fn resolved(&self) -> Option<(&str, MatchType)> {
        let match_type = self.match_type?.to_match_type();
        match (&self.approved_symbol, match_type.is_match()) {
            (Some(approved), true) => Some((approved.as_str(), match_type)),
            _ => None,
        }
    }
}
