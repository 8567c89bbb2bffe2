use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Output format of the console layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Console logging settings.
///
/// # Configuration
///
/// - **Log Level**: `LOG_LEVEL` (default: "info"), ignored when `RUST_LOG` is set
/// - **Format**: `LOG_FORMAT=json` for one JSON object per line, compact otherwise
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("LOG_LEVEL").ok(),
            std::env::var("LOG_FORMAT").ok(),
        )
    }

    fn from_values(level: Option<String>, format: Option<String>) -> Self {
        let level = level
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| "info".to_string());

        let format = match format.as_deref().map(str::trim) {
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        };

        Self { level, format }
    }

    /// Filter directives used when `RUST_LOG` is not set.
    ///
    /// Noisy HTTP dependencies are held at warn.
    pub fn default_directives(&self) -> String {
        format!(
            "coffeeshop={level},reqwest=warn,hyper=warn,hyper_util=warn",
            level = self.level
        )
    }
}

/// Install the global console subscriber using [`LoggingConfig::from_env`].
///
/// Calling it twice is harmless: the second install fails silently.
pub fn init_logging() {
    init_logging_with(&LoggingConfig::from_env());
}

pub fn init_logging_with(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directives()));

    let console_layer = match config.format {
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .with_writer(std::io::stderr)
            .with_filter(env_filter)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_writer(std::io::stderr)
            .with_filter(env_filter)
            .boxed(),
    };

    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}
