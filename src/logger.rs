//! Logging interface for client-facing code
//!
//! A small capability contract: four level predicates and four formatted
//! emit operations. Concrete loggers choose their own sink; there is no
//! state beyond configuration and no hierarchy between implementations.

use std::fmt::Arguments;

use tracing::{debug, error, info, warn};

/// Log level for threshold-based loggers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

/// Interface implemented by objects used for logging by the client
///
/// Messages are formatted with `format_args!`, so callers write
/// `logger.info(format_args!("opened {} backend", name))`.
pub trait Logger {
    /// Returns true iff the debug level is enabled
    fn debug_enabled(&self) -> bool;

    /// Returns true iff the information level is enabled
    fn info_enabled(&self) -> bool;

    /// Returns true iff the warning level is enabled
    fn warn_enabled(&self) -> bool;

    /// Returns true iff the error level is enabled
    fn error_enabled(&self) -> bool;

    /// Send a debug message to the log
    fn debug(&self, args: Arguments<'_>);

    /// Send an information message to the log
    fn info(&self, args: Arguments<'_>);

    /// Send a warning message to the log
    fn warn(&self, args: Arguments<'_>);

    /// Send an error message to the log
    fn error(&self, args: Arguments<'_>);
}

/// Logger that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NopLogger;

impl Logger for NopLogger {
    fn debug_enabled(&self) -> bool {
        false
    }

    fn info_enabled(&self) -> bool {
        false
    }

    fn warn_enabled(&self) -> bool {
        false
    }

    fn error_enabled(&self) -> bool {
        false
    }

    fn debug(&self, _args: Arguments<'_>) {}

    fn info(&self, _args: Arguments<'_>) {}

    fn warn(&self, _args: Arguments<'_>) {}

    fn error(&self, _args: Arguments<'_>) {}
}

/// Logger that writes to stderr, filtered by a level threshold
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger {
    level: Level,
}

impl ConsoleLogger {
    /// Create a console logger emitting messages at `level` and above
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    fn emit(&self, level: Level, tag: &str, args: Arguments<'_>) {
        if level >= self.level {
            eprintln!("{tag} {args}");
        }
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

impl Logger for ConsoleLogger {
    fn debug_enabled(&self) -> bool {
        Level::Debug >= self.level
    }

    fn info_enabled(&self) -> bool {
        Level::Info >= self.level
    }

    fn warn_enabled(&self) -> bool {
        Level::Warn >= self.level
    }

    fn error_enabled(&self) -> bool {
        Level::Error >= self.level
    }

    fn debug(&self, args: Arguments<'_>) {
        self.emit(Level::Debug, "DEBUG", args);
    }

    fn info(&self, args: Arguments<'_>) {
        self.emit(Level::Info, "INFO", args);
    }

    fn warn(&self, args: Arguments<'_>) {
        self.emit(Level::Warn, "WARN", args);
    }

    fn error(&self, args: Arguments<'_>) {
        self.emit(Level::Error, "ERROR", args);
    }
}

/// Logger that forwards to the `tracing` facade
///
/// Enabled-ness reflects whatever subscriber is active, so these predicates
/// are as dynamic as the subscriber's filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn debug_enabled(&self) -> bool {
        tracing::enabled!(tracing::Level::DEBUG)
    }

    fn info_enabled(&self) -> bool {
        tracing::enabled!(tracing::Level::INFO)
    }

    fn warn_enabled(&self) -> bool {
        tracing::enabled!(tracing::Level::WARN)
    }

    fn error_enabled(&self) -> bool {
        tracing::enabled!(tracing::Level::ERROR)
    }

    fn debug(&self, args: Arguments<'_>) {
        debug!("{}", args);
    }

    fn info(&self, args: Arguments<'_>) {
        info!("{}", args);
    }

    fn warn(&self, args: Arguments<'_>) {
        warn!("{}", args);
    }

    fn error(&self, args: Arguments<'_>) {
        error!("{}", args);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    /// Test logger that records what it would have emitted
    #[derive(Default)]
    struct RecordingLogger {
        messages: RefCell<Vec<String>>,
    }

    impl Logger for RecordingLogger {
        fn debug_enabled(&self) -> bool {
            true
        }

        fn info_enabled(&self) -> bool {
            true
        }

        fn warn_enabled(&self) -> bool {
            true
        }

        fn error_enabled(&self) -> bool {
            true
        }

        fn debug(&self, args: Arguments<'_>) {
            self.messages.borrow_mut().push(format!("debug: {args}"));
        }

        fn info(&self, args: Arguments<'_>) {
            self.messages.borrow_mut().push(format!("info: {args}"));
        }

        fn warn(&self, args: Arguments<'_>) {
            self.messages.borrow_mut().push(format!("warn: {args}"));
        }

        fn error(&self, args: Arguments<'_>) {
            self.messages.borrow_mut().push(format!("error: {args}"));
        }
    }

    #[test]
    fn test_nop_logger_disables_every_level() {
        let logger = NopLogger;

        assert!(!logger.debug_enabled());
        assert!(!logger.info_enabled());
        assert!(!logger.warn_enabled());
        assert!(!logger.error_enabled());

        // Emitting is a no-op, not a panic
        logger.debug(format_args!("dropped"));
        logger.error(format_args!("also dropped"));
    }

    #[test]
    fn test_console_logger_threshold() {
        let logger = ConsoleLogger::new(Level::Warn);

        assert!(!logger.debug_enabled());
        assert!(!logger.info_enabled());
        assert!(logger.warn_enabled());
        assert!(logger.error_enabled());
    }

    #[test]
    fn test_console_logger_defaults_to_info() {
        let logger = ConsoleLogger::default();

        assert!(!logger.debug_enabled());
        assert!(logger.info_enabled());
    }

    #[test]
    fn test_tracing_logger_tracks_the_active_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let logger = TracingLogger;

            assert!(!logger.debug_enabled());
            assert!(logger.info_enabled());
            assert!(logger.warn_enabled());
            assert!(logger.error_enabled());

            logger.info(format_args!("forwarded to tracing"));
        });
    }

    #[test]
    fn test_formatting_flows_through_the_trait() {
        let logger = RecordingLogger::default();

        logger.info(format_args!("stored {} bytes in {}", 42, "keychain"));
        logger.warn(format_args!("backend {} unavailable", "pass"));

        let messages = logger.messages.borrow();
        assert_eq!(messages[0], "info: stored 42 bytes in keychain");
        assert_eq!(messages[1], "warn: backend pass unavailable");
    }
}
