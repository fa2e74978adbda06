/// How the ledger interprets an incoming vote request.
///
/// The product shipped two divergent behaviors; both are kept as explicit
/// configuration so a deployment picks one and applies it consistently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VotePolicy {
    /// Every call adds +1 regardless of payload. No decrement path.
    Monotonic,
    /// The caller declares the toggle state it wants: voted adds +1,
    /// unvoted subtracts 1. Unmatched unvotes can drive a count negative.
    Toggle,
}

impl VotePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            VotePolicy::Monotonic => "monotonic",
            VotePolicy::Toggle => "toggle",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "monotonic" => Some(VotePolicy::Monotonic),
            "toggle" => Some(VotePolicy::Toggle),
            _ => None,
        }
    }

    /// Whether this request counts as an upvote under the policy.
    /// Monotonic treats every call as one; toggle trusts the caller.
    pub fn is_upvote(&self, intent: &VoteIntent) -> bool {
        match self {
            VotePolicy::Monotonic => true,
            VotePolicy::Toggle => intent.voted,
        }
    }
}

impl std::fmt::Display for VotePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a single vote request asks for.
#[derive(Debug, Clone)]
pub struct VoteIntent {
    /// Toggle state the caller wants to move to. Ignored under monotonic.
    pub voted: bool,
    /// Caller-supplied voter identifier, if any.
    pub voter_id: Option<String>,
}

impl VoteIntent {
    /// A plain upvote with no voter attribution.
    pub fn up() -> Self {
        Self {
            voted: true,
            voter_id: None,
        }
    }

    /// A toggle request moving to the given voted state.
    pub fn toggle(voted: bool) -> Self {
        Self {
            voted,
            voter_id: None,
        }
    }

    pub fn with_voter(mut self, voter_id: impl Into<String>) -> Self {
        self.voter_id = Some(voter_id.into());
        self
    }
}

impl Default for VoteIntent {
    fn default() -> Self {
        Self::up()
    }
}
