pub mod config;
pub mod pipeline;

use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Load .env from the usual candidate paths. Returns the file that was loaded.
///
/// Runs before tracing is installed, so the caller logs the result.
pub fn load_dotenv() -> Option<PathBuf> {
    load_dotenv_from(&[Path::new(".env"), Path::new("../.env")])
}

/// Load the first candidate that parses. Variables already set in the
/// environment win over the file.
pub fn load_dotenv_from(candidates: &[&Path]) -> Option<PathBuf> {
    candidates
        .iter()
        .find(|path| dotenvy::from_path(path).is_ok())
        .map(|path| path.to_path_buf())
}
