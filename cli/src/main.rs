//! Dither an image and show it on a VRaptor OLED display.

use clap::Parser;

use vraptor_oled::config::{AppConfig, Cli};
use vraptor_oled::pipeline;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env feeds both RUST_LOG and the clap env fallbacks
    let dotenv = vraptor_oled::load_dotenv();
    vraptor_oled::init_tracing();
    match &dotenv {
        Some(path) => tracing::debug!(path = %path.display(), "Loaded .env"),
        None => tracing::debug!("No .env file found, using system environment variables"),
    }

    let cli = Cli::parse();
    let config = AppConfig::from_cli(cli)?;
    pipeline::run(&config).await
}
