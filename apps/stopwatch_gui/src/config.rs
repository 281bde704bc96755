use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("window size must be positive and finite, got {width}x{height}")]
    InvalidWindowSize { width: f32, height: f32 },
    #[error("invalid log filter '{filter}': {source}")]
    InvalidLogFilter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
}

/// Launch options. None of them affects how the stopwatch counts.
#[derive(Parser, Debug, Clone)]
#[command(name = "stopwatch", about = "Desktop stopwatch with lap recording")]
pub struct StartupConfig {
    /// tracing filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_filter: String,
    #[arg(long, default_value_t = 360.0)]
    pub width: f32,
    #[arg(long, default_value_t = 520.0)]
    pub height: f32,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            width: 360.0,
            height: 520.0,
        }
    }
}

impl StartupConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_with_env(rust_log().as_deref())
    }

    pub fn validate_with_env(&self, rust_log: Option<&str>) -> Result<(), ConfigError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(self.width) || !valid(self.height) {
            return Err(ConfigError::InvalidWindowSize {
                width: self.width,
                height: self.height,
            });
        }
        self.filter_with_env(rust_log).map(|_| ())
    }

    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        self.filter_with_env(rust_log().as_deref())
    }

    /// A non-empty `RUST_LOG` wins over `--log-filter` and must parse.
    pub fn filter_with_env(&self, rust_log: Option<&str>) -> Result<EnvFilter, ConfigError> {
        let filter = match rust_log.map(str::trim) {
            Some(directives) if !directives.is_empty() => directives,
            _ => self.log_filter.as_str(),
        };
        EnvFilter::try_new(filter).map_err(|source| ConfigError::InvalidLogFilter {
            filter: filter.to_string(),
            source,
        })
    }

    pub fn inner_size(&self) -> [f32; 2] {
        [self.width, self.height]
    }
}

fn rust_log() -> Option<String> {
    std::env::var(EnvFilter::DEFAULT_ENV).ok()
}
