use serde::{Deserialize, Serialize};

use super::{MatchType, Symbol};
use crate::constants::IDENTITY;

/// One row of the match table: how an input symbol was matched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchRecord {
    /// The raw symbol as it appeared in the samples.
    pub original: Symbol,
    /// Name of the manipulation that produced the match, `None` if unmatched.
    pub resolution: Option<String>,
    /// The candidate string sent to the lookup (manipulated form).
    pub input: Symbol,
    pub approved_symbol: Option<Symbol>,
    pub match_type: MatchType,
    pub location: Option<String>,
    /// `true` iff resolved and `approved_symbol != original`.
    pub changed: bool,
}

impl MatchRecord {
    pub fn matched(
        original: &str,
        resolution: &str,
        input: &str,
        approved_symbol: &str,
        match_type: MatchType,
        location: Option<String>,
    ) -> Self {
        let mut record = Self {
            original: original.to_string(),
            resolution: Some(resolution.to_string()),
            input: input.to_string(),
            approved_symbol: Some(approved_symbol.to_string()),
            match_type,
            location,
            changed: false,
        };
        record.recompute_changed();
        record
    }

    pub fn unmatched(original: &str) -> Self {
        Self {
            original: original.to_string(),
            resolution: None,
            input: original.to_string(),
            approved_symbol: None,
            match_type: MatchType::Unmatched,
            location: None,
            changed: false,
        }
    }

    /// The symbol kept as-is: identity resolution onto itself.
    pub fn identity_fallback(original: &str, match_type: MatchType) -> Self {
        Self::matched(original, IDENTITY, original, original, match_type, None)
    }

    pub fn recompute_changed(&mut self) {
        self.changed = self.resolution.is_some()
            && self.approved_symbol.as_deref() != Some(self.original.as_str());
    }

    pub fn is_identity(&self) -> bool {
        self.resolution.as_deref() == Some(IDENTITY)
    }

    /// Resolved through a manipulation other than identity.
    pub fn is_manipulated(&self) -> bool {
        self.resolution.as_deref().is_some_and(|r| r != IDENTITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_follows_approved_symbol() {
        let renamed = MatchRecord::matched("COX1", IDENTITY, "COX1", "MT-CO1", MatchType::Previous, None);
        assert!(renamed.changed);
        let same = MatchRecord::matched("TP53", IDENTITY, "TP53", "TP53", MatchType::Approved, None);
        assert!(!same.changed);
        assert!(!MatchRecord::unmatched("XYZ").changed);
    }

    #[test]
    fn fallback_is_identity_onto_itself() {
        let record = MatchRecord::identity_fallback("ABC", MatchType::AliasDiscarded);
        assert!(record.is_identity());
        assert!(!record.is_manipulated());
        assert_eq!(record.approved_symbol.as_deref(), Some("ABC"));
        assert!(!record.changed);
    }
}
