use std::collections::HashMap;

use super::{ReportId, SEED_REPORTS, VoteIntent, VotePolicy, VoteRecord};

/// In-memory map of report id to vote record.
///
/// Pure and synchronous: existence checks and vote math live here,
/// serialization of concurrent callers is the service's job.
#[derive(Debug, Clone)]
pub struct VoteLedger {
    records: HashMap<ReportId, VoteRecord>,
}

impl VoteLedger {
    /// Build a ledger seeded with the fixed report set.
    pub fn seeded() -> Self {
        Self::with_counts(SEED_REPORTS.iter().map(|&(id, count)| (id.into(), count)))
    }

    /// Build a ledger from arbitrary (id, count) pairs.
    pub fn with_counts(counts: impl IntoIterator<Item = (ReportId, i64)>) -> Self {
        let records = counts
            .into_iter()
            .map(|(id, count)| (id, VoteRecord::new(count)))
            .collect();
        Self { records }
    }

    /// Current count for a report, or None if the id is unknown.
    pub fn count(&self, report_id: &str) -> Option<i64> {
        self.records.get(report_id).map(|record| record.count)
    }

    pub fn contains(&self, report_id: &str) -> bool {
        self.records.contains_key(report_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Apply a vote to a report and return the new count, or None if the
    /// id is unknown (the ledger is left untouched in that case).
    ///
    /// The voter set mirrors toggle state: an upvote records the voter,
    /// a toggle unvote removes them. With `enforce_unique` on, a request
    /// that would not change the voter's membership (repeat upvote from a
    /// recorded voter, repeat unvote from an unrecorded one) is a no-op
    /// returning the current count. Requests without a voter id are never
    /// deduplicated.
    pub fn apply(
        &mut self,
        report_id: &str,
        intent: &VoteIntent,
        policy: VotePolicy,
        enforce_unique: bool,
    ) -> Option<i64> {
        let record = self.records.get_mut(report_id)?;
        let upvote = policy.is_upvote(intent);

        if let Some(voter_id) = &intent.voter_id {
            let changed = if upvote {
                record.voters.insert(voter_id.clone())
            } else {
                record.voters.remove(voter_id)
            };
            if enforce_unique && !changed {
                return Some(record.count);
            }
        }

        record.count += if upvote { 1 } else { -1 };
        Some(record.count)
    }
}
