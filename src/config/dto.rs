use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub datasets_path: String,
    pub output_path: String,
}
