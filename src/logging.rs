//! Diagnostic logging setup.
//!
//! The crate logs through `tracing` (one-time policy warnings, dropped
//! alerts, classification traces) and leaves subscriber installation to the
//! host. Hosts without their own subscriber can call [`init_logging`] at
//! startup; output goes to stderr so it never mixes with the application's
//! stdout.

use tracing_subscriber::{fmt, EnvFilter};

/// Log level for the bundled subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Most verbose.
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    /// Least verbose.
    Error,
    /// Disable logging entirely.
    Off,
}

impl LogLevel {
    fn directive(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Off => "off",
        }
    }
}

/// Configuration for the bundled subscriber.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// The log level to use unless `RUST_LOG` is set.
    pub level: LogLevel,
    /// Whether to include timestamps.
    pub with_timestamps: bool,
    /// Whether to include the target (module path).
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            with_timestamps: true,
            with_target: true,
        }
    }
}

impl LoggingConfig {
    /// Creates a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the log level.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Sets whether to include timestamps.
    pub fn with_timestamps(mut self, enabled: bool) -> Self {
        self.with_timestamps = enabled;
        self
    }

    /// Sets whether to include the target (module path).
    pub fn with_target(mut self, enabled: bool) -> Self {
        self.with_target = enabled;
        self
    }
}

/// Installs a stderr subscriber with the given configuration.
///
/// `RUST_LOG` takes precedence over the configured level. Safe to call more
/// than once; only the first installation wins, later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(config.level.directive())
    };

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(config.with_target);

    let result = if config.with_timestamps {
        subscriber.try_init()
    } else {
        subscriber.without_time().try_init()
    };
    // A subscriber installed by the host is fine; ours simply loses.
    let _ = result;
}

/// Installs the subscriber with default settings.
pub fn init_default_logging() {
    init_logging(LoggingConfig::default());
}
