use crate::Environment;
use color_eyre::config::HookBuilder;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs color-eyre panic and error report hooks.
///
/// Keeps report locations visible while hiding the noisy env section.
/// Safe to call more than once; later calls are no-ops.
pub fn install_color_eyre() {
    let _ = HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initializes the global tracing subscriber for the given environment.
///
/// Respects RUST_LOG when set. Production logs as flattened JSON,
/// development logs pretty and human-readable.
pub fn init_tracing(environment: &Environment) {
    let default_directive = if environment.is_production() {
        "info"
    } else {
        "debug"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let result = if environment.is_production() {
        let fmt_layer = fmt::layer()
            .json()
            .with_target(false)
            .flatten_event(true);

        tracing_subscriber::registry()
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .with(fmt_layer)
            .try_init()
    } else {
        let fmt_layer = fmt::layer()
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .pretty();

        tracing_subscriber::registry()
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .with(fmt_layer)
            .try_init()
    };

    match result {
        Ok(_) => tracing::info!("Tracing initialized for {:?} environment", environment),
        Err(_) => tracing::debug!("Tracing subscriber already initialized"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_development() {
        temp_env::with_var("RUST_LOG", None::<&str>, || {
            init_tracing(&Environment::Development);
        });
    }

    #[test]
    fn test_init_tracing_production() {
        temp_env::with_var("RUST_LOG", None::<&str>, || {
            init_tracing(&Environment::Production);
        });
    }

    #[test]
    fn test_init_tracing_multiple_calls_do_not_panic() {
        init_tracing(&Environment::Development);
        init_tracing(&Environment::Production);
    }

    #[test]
    fn test_init_tracing_respects_rust_log() {
        temp_env::with_var("RUST_LOG", Some("warn"), || {
            init_tracing(&Environment::Development);
        });
    }

    #[test]
    fn test_install_color_eyre_is_idempotent() {
        install_color_eyre();
        install_color_eyre();
    }
}
