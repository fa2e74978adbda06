use tokio::sync::RwLock;

use crate::domain::{VoteIntent, VoteLedger, VotePolicy};

use super::AppError;

/// Application service owning the vote ledger.
/// This is the primary interface for any client (HTTP, CLI, tests).
///
/// The ledger sits behind a single RwLock: reads share the read lock,
/// mutations take the write lock, so the read-modify-write of a vote is
/// linearizable and concurrent votes on one report never lose updates.
pub struct VoteService {
    ledger: RwLock<VoteLedger>,
    policy: VotePolicy,
    enforce_unique_voters: bool,
}

impl VoteService {
    /// Create a service seeded with the fixed report set.
    pub fn new(policy: VotePolicy) -> Self {
        Self::with_ledger(VoteLedger::seeded(), policy)
    }

    /// Create a service over an arbitrary ledger (useful for tests).
    pub fn with_ledger(ledger: VoteLedger, policy: VotePolicy) -> Self {
        Self {
            ledger: RwLock::new(ledger),
            policy,
            enforce_unique_voters: false,
        }
    }

    /// Reject repeat votes from an already-counted voter id.
    pub fn with_unique_voters(mut self, enforce: bool) -> Self {
        self.enforce_unique_voters = enforce;
        self
    }

    pub fn policy(&self) -> VotePolicy {
        self.policy
    }

    /// Current vote count for a report.
    pub async fn get_count(&self, report_id: &str) -> Result<i64, AppError> {
        self.ledger
            .read()
            .await
            .count(report_id)
            .ok_or_else(|| AppError::ReportNotFound(report_id.to_string()))
    }

    /// Apply a vote under the configured policy and return the new count.
    /// An unknown report id leaves the ledger unchanged.
    pub async fn apply_vote(&self, report_id: &str, intent: VoteIntent) -> Result<i64, AppError> {
        let count = self
            .ledger
            .write()
            .await
            .apply(report_id, &intent, self.policy, self.enforce_unique_voters)
            .ok_or_else(|| AppError::ReportNotFound(report_id.to_string()))?;

        tracing::debug!(
            report_id,
            count,
            policy = %self.policy,
            "vote applied"
        );
        Ok(count)
    }
}
