pub mod datasets;
pub mod tally;
