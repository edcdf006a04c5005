use tracing_subscriber::EnvFilter;

use vote_tally::config::load_config;
use vote_tally::core::error::AppError;
use vote_tally::features::datasets::DatasetRepository;
use vote_tally::features::tally::{bill_vote_counts, legislator_vote_counts};

const LEGISLATOR_COUNTS_FILE: &str = "legislators-support-oppose-count.csv";
const BILL_COUNTS_FILE: &str = "bills-support-oppose-count.csv";

fn main() -> Result<(), AppError> {
    init_tracing();

    let config = load_config()?;
    let repository = DatasetRepository::new(&config);

    let bills = repository.get_all_bills()?;
    let legislators = repository.get_all_legislators()?;
    let votes = repository.get_all_votes()?;
    let vote_results = repository.get_all_vote_results()?;

    tracing::info!(
        bills = bills.len(),
        legislators = legislators.len(),
        votes = votes.len(),
        vote_results = vote_results.len(),
        "loaded datasets from {}",
        config.datasets_path
    );

    let legislator_counts = legislator_vote_counts(&legislators, &vote_results);
    repository.save_legislator_vote_counts(&legislator_counts, LEGISLATOR_COUNTS_FILE)?;
    tracing::info!(
        rows = legislator_counts.len(),
        "wrote {}/{LEGISLATOR_COUNTS_FILE}",
        config.output_path
    );

    let bill_counts = bill_vote_counts(&bills, &votes, &vote_results, &legislators);
    repository.save_bill_vote_counts(&bill_counts, BILL_COUNTS_FILE)?;
    tracing::info!(
        rows = bill_counts.len(),
        "wrote {}/{BILL_COUNTS_FILE}",
        config.output_path
    );

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .with_target(false)
        .init();
}
