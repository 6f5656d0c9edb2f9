use anyhow::Result;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing and logging
///
/// This sets up:
/// - Structured JSON logging (format `json`, or `ENVIRONMENT=production`)
/// - Console logging otherwise
/// - Environment-based log level filtering (`RUST_LOG` wins over `log_level`)
///
/// Logs go to stderr; stdout is reserved for command output.
pub fn init_observability(
    service_name: &str,
    service_version: &str,
    log_level: &str,
    log_format: &str,
) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    if use_json(log_format) {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_filter(env_filter),
            )
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr)
                    .with_filter(env_filter),
            )
            .try_init()?;
    }

    tracing::info!(
        service.name = service_name,
        service.version = service_version,
        "Observability initialized"
    );

    Ok(())
}

fn use_json(log_format: &str) -> bool {
    let is_production = std::env::var("ENVIRONMENT")
        .map(|env| env == "production")
        .unwrap_or(false);

    is_production || log_format.eq_ignore_ascii_case("json")
}
