use serde::{Deserialize, Serialize};

/// Affirmative ballot in a vote result.
pub const VOTE_TYPE_SUPPORT: u32 = 1;
/// Negative ballot in a vote result.
pub const VOTE_TYPE_OPPOSE: u32 = 2;

/// A bill under consideration. `sponsor_id` references a legislator that is
/// not guaranteed to be present in the legislators dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    pub id: u32,
    pub title: String,
    pub sponsor_id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legislator {
    pub id: u32,
    pub name: String,
}

/// One voting event on a bill; a bill may accumulate several over its
/// lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub id: u32,
    pub bill_id: u32,
}

/// A single legislator's ballot within one voting event. vote_type values
/// other than support (1) and oppose (2) are carried but never tallied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteResult {
    pub id: u32,
    pub legislator_id: u32,
    pub vote_id: u32,
    pub vote_type: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegislatorVoteCount {
    pub id: u32,
    pub name: String,
    pub num_supported_bills: u32,
    pub num_opposed_bills: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillVoteCount {
    pub id: u32,
    pub title: String,
    pub supporter_count: u32,
    pub opposer_count: u32,
    pub primary_sponsor: String,
}
