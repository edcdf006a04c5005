use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::AppConfig;
use crate::core::error::AppError;
use crate::features::tally::dto::{
    Bill, BillVoteCount, Legislator, LegislatorVoteCount, Vote, VoteResult,
};

const BILLS_FILE: &str = "bills.csv";
const LEGISLATORS_FILE: &str = "legislators.csv";
const VOTES_FILE: &str = "votes.csv";
const VOTE_RESULTS_FILE: &str = "vote_results.csv";

/// Reads the four input relations from headered CSV files in the datasets
/// directory and persists derived relations into the output directory.
pub struct DatasetRepository {
    datasets_path: PathBuf,
    output_path: PathBuf,
}

impl DatasetRepository {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            datasets_path: PathBuf::from(&config.datasets_path),
            output_path: PathBuf::from(&config.output_path),
        }
    }

    pub fn get_all_bills(&self) -> Result<Vec<Bill>, AppError> {
        self.read_records(BILLS_FILE)
    }

    pub fn get_all_legislators(&self) -> Result<Vec<Legislator>, AppError> {
        self.read_records(LEGISLATORS_FILE)
    }

    pub fn get_all_votes(&self) -> Result<Vec<Vote>, AppError> {
        self.read_records(VOTES_FILE)
    }

    pub fn get_all_vote_results(&self) -> Result<Vec<VoteResult>, AppError> {
        self.read_records(VOTE_RESULTS_FILE)
    }

    pub fn save_legislator_vote_counts(
        &self,
        counts: &[LegislatorVoteCount],
        filename: &str,
    ) -> Result<(), AppError> {
        self.write_records(counts, filename)
    }

    pub fn save_bill_vote_counts(
        &self,
        counts: &[BillVoteCount],
        filename: &str,
    ) -> Result<(), AppError> {
        self.write_records(counts, filename)
    }

    fn read_records<T>(&self, filename: &str) -> Result<Vec<T>, AppError>
    where
        T: DeserializeOwned,
    {
        let path = self.datasets_path.join(filename);
        let mut reader = csv::Reader::from_path(&path).map_err(|err| {
            AppError::dataset(format!("failed to open {}: {err}", path.display()))
        })?;

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: T = row.map_err(|err| {
                AppError::dataset(format!("malformed row in {}: {err}", path.display()))
            })?;
            records.push(record);
        }

        Ok(records)
    }

    fn write_records<T>(&self, records: &[T], filename: &str) -> Result<(), AppError>
    where
        T: Serialize,
    {
        ensure_directory(&self.output_path)?;

        let path = self.output_path.join(filename);
        let mut writer = csv::Writer::from_path(&path).map_err(|err| {
            AppError::dataset(format!("failed to create {}: {err}", path.display()))
        })?;

        for record in records {
            writer.serialize(record).map_err(|err| {
                AppError::dataset(format!("failed to write {}: {err}", path.display()))
            })?;
        }

        writer.flush().map_err(|err| {
            AppError::dataset(format!("failed to flush {}: {err}", path.display()))
        })?;

        Ok(())
    }
}

fn ensure_directory(path: &Path) -> Result<(), AppError> {
    fs::create_dir_all(path).map_err(|err| {
        AppError::dataset(format!(
            "failed to create output directory {}: {err}",
            path.display()
        ))
    })
}
