use std::collections::HashMap;

use crate::features::tally::dto::{
    Bill, BillVoteCount, Legislator, LegislatorVoteCount, Vote, VoteResult, VOTE_TYPE_OPPOSE,
    VOTE_TYPE_SUPPORT,
};

#[derive(Default)]
struct BallotCounts {
    supported: u32,
    opposed: u32,
}

/// Count support and oppose ballots per legislator.
///
/// Only legislators that cast at least one ballot produce a row; a
/// legislator_id missing from `legislators` still produces a row under a
/// placeholder name. Rows come out in the order each legislator_id was first
/// seen in `results` — callers needing a particular order must sort.
pub fn legislator_vote_counts(
    legislators: &[Legislator],
    results: &[VoteResult],
) -> Vec<LegislatorVoteCount> {
    let name_by_id = legislator_name_map(legislators);

    let mut counts: HashMap<u32, BallotCounts> = HashMap::new();
    let mut first_seen: Vec<u32> = Vec::new();

    for result in results {
        let entry = counts.entry(result.legislator_id).or_insert_with(|| {
            first_seen.push(result.legislator_id);
            BallotCounts::default()
        });

        match result.vote_type {
            VOTE_TYPE_SUPPORT => entry.supported += 1,
            VOTE_TYPE_OPPOSE => entry.opposed += 1,
            _ => {}
        }
    }

    first_seen
        .into_iter()
        .map(|legislator_id| {
            let tally = &counts[&legislator_id];
            LegislatorVoteCount {
                id: legislator_id,
                name: resolve_name(&name_by_id, legislator_id),
                num_supported_bills: tally.supported,
                num_opposed_bills: tally.opposed,
            }
        })
        .collect()
}

/// Count support and oppose ballots per bill and resolve its primary sponsor.
///
/// Every input bill yields exactly one row, bills without any voting event
/// included. Ballots whose vote_id matches no vote have no bill to attach to
/// and are dropped. Output is sorted ascending by bill id.
pub fn bill_vote_counts(
    bills: &[Bill],
    votes: &[Vote],
    results: &[VoteResult],
    legislators: &[Legislator],
) -> Vec<BillVoteCount> {
    let name_by_id = legislator_name_map(legislators);

    let mut vote_ids_by_bill: HashMap<u32, Vec<u32>> = HashMap::new();
    for vote in votes {
        vote_ids_by_bill.entry(vote.bill_id).or_default().push(vote.id);
    }

    let mut results_by_vote: HashMap<u32, Vec<&VoteResult>> = HashMap::new();
    for result in results {
        results_by_vote.entry(result.vote_id).or_default().push(result);
    }

    let empty_votes: Vec<u32> = Vec::new();
    let mut rows: Vec<BillVoteCount> = bills
        .iter()
        .map(|bill| {
            let mut supporter_count = 0;
            let mut opposer_count = 0;

            let bill_vote_ids = vote_ids_by_bill.get(&bill.id).unwrap_or(&empty_votes);
            for vote_id in bill_vote_ids {
                let Some(vote_results) = results_by_vote.get(vote_id) else {
                    continue;
                };
                for result in vote_results {
                    match result.vote_type {
                        VOTE_TYPE_SUPPORT => supporter_count += 1,
                        VOTE_TYPE_OPPOSE => opposer_count += 1,
                        _ => {}
                    }
                }
            }

            BillVoteCount {
                id: bill.id,
                title: bill.title.clone(),
                supporter_count,
                opposer_count,
                primary_sponsor: resolve_name(&name_by_id, bill.sponsor_id),
            }
        })
        .collect();

    rows.sort_by_key(|row| row.id);

    rows
}

fn legislator_name_map(legislators: &[Legislator]) -> HashMap<u32, &str> {
    legislators
        .iter()
        .map(|legislator| (legislator.id, legislator.name.as_str()))
        .collect()
}

fn resolve_name(name_by_id: &HashMap<u32, &str>, id: u32) -> String {
    name_by_id
        .get(&id)
        .map(|name| (*name).to_string())
        .unwrap_or_else(|| format!("Unknown (ID: {id})"))
}
