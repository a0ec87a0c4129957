pub mod types;

pub use types::{
    ChangeType, Clause, DiffEntry, MatchMethod, MatchedPair, Report, Severity, SeverityCounts,
};
