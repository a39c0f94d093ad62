use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Title mapping artifact (JSON array; order defines movie ids)
    #[serde(default = "default_titles_path")]
    pub titles_path: String,

    /// Delimited metadata artifact with encoded list columns
    #[serde(default = "default_metadata_path")]
    pub metadata_path: String,

    /// Square similarity matrix artifact (nested JSON array)
    #[serde(default = "default_similarity_path")]
    pub similarity_path: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_titles_path() -> String {
    "data/movies.json".to_string()
}

fn default_metadata_path() -> String {
    "data/metadata.csv".to_string()
}

fn default_similarity_path() -> String {
    "data/similarity.json".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
