//! Supplement Explorer - Main Entry Point
//!
//! Native catalog browser for expert-endorsed longevity supplements

use supplement_explorer::app::application::run_app;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Supplement Explorer...");

    // Run the GPUI application
    run_app();
}
