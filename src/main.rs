use tracing_subscriber::EnvFilter;

use hospitaldb::config;

fn main() {
    // Diagnostics go to stderr; stdout is reserved for the operator report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("{} v{} starting", config::APP_NAME, config::APP_VERSION);

    if let Err(error) = hospitaldb::run(&config::registry_path()) {
        tracing::error!(%error, "Corrector run failed");
        std::process::exit(1);
    }
}
