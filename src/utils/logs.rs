use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. `RUST_LOG` overrides the default `info` filter.
/// JSON output is meant for lambda deployments, where CloudWatch adds the ingestion time.
pub fn setup_tracing(json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        // disable printing the name of the module in every log line.
        .with_target(false);
    // a second install is a no-op
    let _ = if json {
        builder
            // ANSI color codes show up in a confusing manner in CloudWatch logs.
            .with_ansi(false)
            .without_time()
            .json()
            .try_init()
    } else {
        builder.compact().try_init()
    };
}
