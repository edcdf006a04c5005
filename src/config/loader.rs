use std::env;

use crate::config::dto::AppConfig;
use crate::core::error::AppError;

pub fn load_config() -> Result<AppConfig, AppError> {
    dotenvy::dotenv().ok();

    let datasets_path = env::var("DATASETS_PATH").unwrap_or_else(|_| "datasets".to_string());
    if datasets_path.trim().is_empty() {
        return Err(AppError::configuration(
            "DATASETS_PATH must not be empty".to_string(),
        ));
    }

    let output_path =
        env::var("DATASETS_OUTPUT_PATH").unwrap_or_else(|_| format!("{datasets_path}/output"));
    if output_path.trim().is_empty() {
        return Err(AppError::configuration(
            "DATASETS_OUTPUT_PATH must not be empty".to_string(),
        ));
    }

    Ok(AppConfig {
        datasets_path,
        output_path,
    })
}
