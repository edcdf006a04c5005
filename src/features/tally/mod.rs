pub mod dto;
pub mod service;

pub use dto::{
    Bill, BillVoteCount, Legislator, LegislatorVoteCount, Vote, VoteResult, VOTE_TYPE_OPPOSE,
    VOTE_TYPE_SUPPORT,
};
pub use service::{bill_vote_counts, legislator_vote_counts};
