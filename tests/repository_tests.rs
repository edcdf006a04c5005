use std::fs;

use tempfile::TempDir;

use vote_tally::config::AppConfig;
use vote_tally::features::datasets::DatasetRepository;
use vote_tally::features::tally::{
    Bill, BillVoteCount, Legislator, LegislatorVoteCount, Vote, VoteResult,
};

fn repository_in(dir: &TempDir) -> DatasetRepository {
    let config = AppConfig {
        datasets_path: dir.path().join("datasets").display().to_string(),
        output_path: dir.path().join("output").display().to_string(),
    };
    DatasetRepository::new(&config)
}

fn write_dataset(dir: &TempDir, filename: &str, contents: &str) {
    let datasets_dir = dir.path().join("datasets");
    fs::create_dir_all(&datasets_dir).expect("create datasets dir");
    fs::write(datasets_dir.join(filename), contents).expect("write dataset file");
}

fn read_output(dir: &TempDir, filename: &str) -> String {
    fs::read_to_string(dir.path().join("output").join(filename)).expect("read output file")
}

#[test]
fn loads_bills_from_csv() {
    let dir = TempDir::new().expect("temp dir");
    write_dataset(
        &dir,
        "bills.csv",
        "id,title,sponsor_id\n1,Infrastructure Investment Act,101\n2,Education Reform Act,102\n",
    );

    let bills = repository_in(&dir).get_all_bills().expect("load bills");

    assert_eq!(
        bills,
        vec![
            Bill {
                id: 1,
                title: "Infrastructure Investment Act".to_string(),
                sponsor_id: 101,
            },
            Bill {
                id: 2,
                title: "Education Reform Act".to_string(),
                sponsor_id: 102,
            },
        ]
    );
}

#[test]
fn loads_legislators_from_csv() {
    let dir = TempDir::new().expect("temp dir");
    write_dataset(&dir, "legislators.csv", "id,name\n101,Rep. John Doe\n");

    let legislators = repository_in(&dir)
        .get_all_legislators()
        .expect("load legislators");

    assert_eq!(
        legislators,
        vec![Legislator {
            id: 101,
            name: "Rep. John Doe".to_string(),
        }]
    );
}

#[test]
fn loads_votes_and_vote_results_from_csv() {
    let dir = TempDir::new().expect("temp dir");
    write_dataset(&dir, "votes.csv", "id,bill_id\n1,1\n2,1\n");
    write_dataset(
        &dir,
        "vote_results.csv",
        "id,legislator_id,vote_id,vote_type\n1,101,1,1\n2,102,1,2\n",
    );

    let repository = repository_in(&dir);
    let votes = repository.get_all_votes().expect("load votes");
    let results = repository
        .get_all_vote_results()
        .expect("load vote results");

    assert_eq!(votes, vec![Vote { id: 1, bill_id: 1 }, Vote { id: 2, bill_id: 1 }]);
    assert_eq!(
        results,
        vec![
            VoteResult {
                id: 1,
                legislator_id: 101,
                vote_id: 1,
                vote_type: 1,
            },
            VoteResult {
                id: 2,
                legislator_id: 102,
                vote_id: 1,
                vote_type: 2,
            },
        ]
    );
}

#[test]
fn missing_dataset_file_is_a_dataset_error() {
    let dir = TempDir::new().expect("temp dir");

    let error = repository_in(&dir)
        .get_all_bills()
        .expect_err("missing file should fail");

    assert!(error.to_string().contains("bills.csv"));
}

#[test]
fn malformed_row_is_a_dataset_error() {
    let dir = TempDir::new().expect("temp dir");
    write_dataset(&dir, "votes.csv", "id,bill_id\n1,not-a-number\n");

    let error = repository_in(&dir)
        .get_all_votes()
        .expect_err("malformed row should fail");

    assert!(error.to_string().contains("votes.csv"));
}

#[test]
fn saves_legislator_vote_counts_with_headers() {
    let dir = TempDir::new().expect("temp dir");
    let counts = vec![LegislatorVoteCount {
        id: 101,
        name: "Rep. John Doe".to_string(),
        num_supported_bills: 2,
        num_opposed_bills: 1,
    }];

    repository_in(&dir)
        .save_legislator_vote_counts(&counts, "legislators-support-oppose-count.csv")
        .expect("save counts");

    let written = read_output(&dir, "legislators-support-oppose-count.csv");
    assert_eq!(
        written,
        "id,name,num_supported_bills,num_opposed_bills\n101,Rep. John Doe,2,1\n"
    );
}

#[test]
fn saves_bill_vote_counts_with_headers() {
    let dir = TempDir::new().expect("temp dir");
    let counts = vec![BillVoteCount {
        id: 1,
        title: "Infrastructure Investment Act".to_string(),
        supporter_count: 3,
        opposer_count: 2,
        primary_sponsor: "Unknown (ID: 999)".to_string(),
    }];

    repository_in(&dir)
        .save_bill_vote_counts(&counts, "bills-support-oppose-count.csv")
        .expect("save counts");

    let written = read_output(&dir, "bills-support-oppose-count.csv");
    assert_eq!(
        written,
        "id,title,supporter_count,opposer_count,primary_sponsor\n\
         1,Infrastructure Investment Act,3,2,Unknown (ID: 999)\n"
    );
}

#[test]
fn save_creates_missing_output_directory() {
    let dir = TempDir::new().expect("temp dir");
    let nested = dir.path().join("output").join("derived");
    let config = AppConfig {
        datasets_path: dir.path().join("datasets").display().to_string(),
        output_path: nested.display().to_string(),
    };

    DatasetRepository::new(&config)
        .save_legislator_vote_counts(&[], "empty.csv")
        .expect("save into missing directory");

    assert!(nested.join("empty.csv").exists());
}
