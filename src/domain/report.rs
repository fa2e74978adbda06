use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub type ReportId = String;

/// Report identifiers and initial tallies the ledger is seeded with.
/// These must match the report mocks the UI ships with.
pub const SEED_REPORTS: [(&str, i64); 4] = [("1", 47), ("2", 89), ("3", 23), ("4", 65)];

/// Vote tally for a single civic issue report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteRecord {
    /// Current tally. May go negative under toggle policy (unmatched unvotes).
    pub count: i64,
    /// Voter identifiers already counted. Only enforced when voter
    /// uniqueness is switched on; always populated when a voter id arrives.
    pub voters: HashSet<String>,
}

impl VoteRecord {
    pub fn new(count: i64) -> Self {
        Self {
            count,
            voters: HashSet::new(),
        }
    }

    pub fn has_voter(&self, voter_id: &str) -> bool {
        self.voters.contains(voter_id)
    }
}
