pub mod change_record;
pub mod lookup_record;
pub mod match_record;
pub mod match_stats;
pub mod match_type;
pub mod samples;

pub use change_record::{ChangeAction, ChangeRecord};
pub use lookup_record::{LookupMatch, LookupRecord};
pub use match_record::MatchRecord;
pub use match_stats::MatchStats;
pub use match_type::MatchType;
pub use samples::{symbol_membership, symbol_union, SampleId, SampleSymbols, Symbol};
