//! Human-readable change reasons.

use std::collections::BTreeSet;

use genesym_core::models::{ChangeAction, SampleId};

pub(crate) fn transfer(label: &str, action: ChangeAction, symbol: &str, new: &str, sample: &str) -> String {
    format!("{label}, {action} from {symbol} to {new} in sample {sample}.")
}

pub(crate) fn shared_sample(symbol: &str, new: &str, sample: &str) -> String {
    format!("Conflict: both {symbol} and {new} are present in sample {sample}. Skipping change.")
}

pub(crate) fn multiple_live_successors(
    symbol: &str,
    samples: &BTreeSet<SampleId>,
    candidates: &[(&str, &BTreeSet<SampleId>)],
) -> String {
    let listed: Vec<String> = candidates
        .iter()
        .map(|(candidate, candidate_samples)| format!("{candidate} {}", join(candidate_samples)))
        .collect();
    format!(
        "Conflict: {symbol} {} could become any of {}. Skipping change.",
        join(samples),
        listed.join(", ")
    )
}

pub(crate) fn two_level_aggregation(symbol: &str, marked: &[&str]) -> String {
    format!(
        "Conflict: {symbol} would aggregate {} which are themselves aggregation targets. Two-level aggregation is not supported, skipping them.",
        marked.join(", ")
    )
}

fn join(samples: &BTreeSet<SampleId>) -> String {
    let listed: Vec<&str> = samples.iter().map(String::as_str).collect();
    format!("[{}]", listed.join(", "))
}
