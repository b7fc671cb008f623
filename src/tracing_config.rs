use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Verbosity;

/// Initialize tracing for the application.
///
/// Logs go to stderr so that they never interfere with anything a desktop
/// environment pipes from stdout. The filter derives from the command-line
/// verbosity; a `RUST_LOG` environment variable takes precedence when set.
///
/// # Errors
/// Returns error if a global subscriber is already installed.
pub fn init(verbosity: Verbosity) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.as_filter()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}
