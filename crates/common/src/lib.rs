pub mod config;
pub mod logging;

pub use config::{Environment, LogLevel};
pub use logging::setup_logging;

/// Creates an info-level span and enters it.
#[macro_export]
macro_rules! span {
    ($name:literal) => {
        tracing::info_span!($name).entered()
    };
}

/// Creates a debug-level span and enters it.
#[macro_export]
macro_rules! span_debug {
    ($name:literal) => {
        tracing::debug_span!($name).entered()
    };
}

#[cfg(test)]
mod tests {
    use tracing::Level;

    fn with_max_level<T>(level: Level, f: impl FnOnce() -> T) -> T {
        let subscriber = tracing_subscriber::fmt().with_max_level(level).finish();
        tracing::subscriber::with_default(subscriber, f)
    }

    #[test]
    fn test_span_debug_enabled_at_debug_level() {
        with_max_level(Level::DEBUG, || {
            let span = span_debug!("stage");
            assert!(!span.is_disabled());
        });
    }

    #[test]
    fn test_span_debug_filtered_at_info_level() {
        with_max_level(Level::INFO, || {
            assert!(span_debug!("stage").is_disabled());
            assert!(!span!("stage").is_disabled());
        });
    }
}
