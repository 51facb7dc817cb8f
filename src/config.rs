//! Runtime configuration
//!
//! Command-line flags with environment fallbacks.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser};

const DEFAULT_FOODS_FILE: &str = "foods.json";
const DEFAULT_METADATA_FILE: &str = "metadata.json";

/// Hyakumi HTTP server
#[derive(Parser, Debug)]
#[command(name = "hyakumi")]
#[command(about = "Read-only HTTP API over the food composition table")]
pub struct ServerConfig {
    /// Listen address
    #[arg(long, default_value = "0.0.0.0:8787", env = "HYAKUMI_LISTEN")]
    pub listen: SocketAddr,

    #[command(flatten)]
    pub dataset: DatasetArgs,
}

/// Location of the dataset files
#[derive(Args, Debug, Clone, Default)]
pub struct DatasetArgs {
    /// Food rows JSON file (default: data/foods.json under the project root)
    #[arg(long, env = "HYAKUMI_FOODS_PATH")]
    pub foods_path: Option<PathBuf>,

    /// Nutrient metadata JSON file (default: data/metadata.json under the project root)
    #[arg(long, env = "HYAKUMI_METADATA_PATH")]
    pub metadata_path: Option<PathBuf>,
}

impl DatasetArgs {
    pub fn foods_path(&self) -> PathBuf {
        self.foods_path
            .clone()
            .unwrap_or_else(|| default_data_dir().join(DEFAULT_FOODS_FILE))
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.metadata_path
            .clone()
            .unwrap_or_else(|| default_data_dir().join(DEFAULT_METADATA_FILE))
    }
}

/// `data/` next to the project root, found from the executable's location
pub fn default_data_dir() -> PathBuf {
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    // Go up from target/release or target/debug to project root
    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(grandparent) = path.parent().and_then(|p| p.parent()) {
            path = grandparent.to_path_buf();
        }
    }

    path.push("data");
    path
}
