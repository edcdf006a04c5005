pub mod repository;

pub use repository::DatasetRepository;
