//! Structured logging initialization via `tracing`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Output format for log lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Human,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

/// Initialise the global tracing subscriber.
///
/// Two output formats are supported:
/// - [`LogFormat::Human`] — human-readable lines (development).
/// - [`LogFormat::Json`] — newline-delimited JSON (log aggregation).
///
/// `level` is the default filter (e.g. `"info"`,
/// `"info,docverify_verification=debug"`); `RUST_LOG` overrides it.
/// Logs go to stderr so stdout stays free for command output.
/// Calling this more than once is harmless: later calls are ignored.
pub fn init_tracing(format: LogFormat, level: &str) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = match format {
        LogFormat::Human => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_log_format_case_insensitively() {
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("human".parse::<LogFormat>(), Ok(LogFormat::Human));
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn repeated_init_does_not_panic() {
        init_tracing(LogFormat::Human, "debug");
        init_tracing(LogFormat::Json, "info");
    }
}
