//! In-memory nomenclature snapshot implementing `ISymbolLookup`.

use std::collections::HashMap;

use genesym_core::errors::GenesymResult;
use genesym_core::models::LookupRecord;
use genesym_core::traits::ISymbolLookup;

/// Case-insensitive lookup over a fixed set of nomenclature rows.
///
/// Every candidate is answered: known candidates with all their rows (the
/// `input` field echoes the candidate as sent), unknown ones with a single
/// `Unmatched` row.
#[derive(Debug, Clone, Default)]
pub struct TableLookup {
    name: String,
    rows: HashMap<String, Vec<LookupRecord>>,
}

impl TableLookup {
    pub fn new(name: impl Into<String>, records: Vec<LookupRecord>) -> Self {
        let mut rows: HashMap<String, Vec<LookupRecord>> = HashMap::new();
        for record in records {
            rows.entry(record.input.to_uppercase())
                .or_default()
                .push(record);
        }
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Build from a JSON array of lookup rows.
    pub fn from_json(name: impl Into<String>, json: &str) -> GenesymResult<Self> {
        let records: Vec<LookupRecord> = serde_json::from_str(json)?;
        Ok(Self::new(name, records))
    }

    /// Number of distinct (case-folded) inputs known to the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl ISymbolLookup for TableLookup {
    fn lookup(&self, candidates: &[String]) -> GenesymResult<Vec<LookupRecord>> {
        let mut response = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            match self.rows.get(&candidate.to_uppercase()) {
                Some(rows) => response.extend(rows.iter().map(|row| LookupRecord {
                    input: candidate.clone(),
                    ..row.clone()
                })),
                None => response.push(LookupRecord::unmatched(candidate.as_str())),
            }
        }
        Ok(response)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genesym_core::models::{LookupMatch, MatchType};

    fn row(input: &str, approved: &str, match_type: LookupMatch) -> LookupRecord {
        LookupRecord {
            input: input.to_string(),
            approved_symbol: Some(approved.to_string()),
            match_type: Some(match_type),
            location: None,
        }
    }

    #[test]
    fn answers_case_insensitively_and_echoes_candidate() {
        let table = TableLookup::new(
            "test",
            vec![
                row("COX1", "MT-CO1", LookupMatch::Previous),
                row("COX1", "PTGS1", LookupMatch::Alias),
            ],
        );
        let response = table.lookup(&["cox1".to_string()]).unwrap();
        assert_eq!(response.len(), 2);
        assert!(response.iter().all(|r| r.input == "cox1"));
        assert_eq!(response[0].resolved(), Some(("MT-CO1", MatchType::Previous)));
    }

    #[test]
    fn unknown_candidates_are_unmatched() {
        let table = TableLookup::new("test", vec![]);
        let response = table.lookup(&["NOPE".to_string()]).unwrap();
        assert_eq!(response, vec![LookupRecord::unmatched("NOPE")]);
        assert!(table.is_empty());
    }

    #[test]
    fn parses_json_snapshot() {
        let json = r#"[{"input":"TP53","approvedSymbol":"TP53","matchType":"Approved symbol"}]"#;
        let table = TableLookup::from_json("snapshot", json).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.name(), "snapshot");
        assert!(TableLookup::from_json("bad", "{").is_err());
    }
}
