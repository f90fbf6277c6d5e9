//! Recommendation evaluation - main entry point
//!
//! Runs one baseline-vs-personalized evaluation and prints the CTR report.
//! Logs go to stderr; stdout carries only the report.

use anyhow::Result;
use recommendation_eval::Config;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recommendation_eval=info,warn".into()),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    info!(
        variant = ?config.variant,
        learning = config.learning,
        "Starting recommendation evaluation"
    );

    let report = recommendation_eval::run(&config)?;
    print!("{}", report.render_summary());

    Ok(())
}
