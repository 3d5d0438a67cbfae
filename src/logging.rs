//! Logging integration.
//!
//! The crate logs through the `log` facade. [`report_checks`] forwards check
//! diagnostics to it so a host without its own check runner still sees them.
//! Optional tracing output is available via [`init_tracing`] when the
//! `tracing` feature is enabled.

use log::Level;

use crate::checks::{CheckLevel, CheckMessage};

/// Log target used for check diagnostics.
pub const CHECKS_TARGET: &str = "colorful::checks";

const fn log_level(level: CheckLevel) -> Level {
    match level {
        CheckLevel::Debug => Level::Debug,
        CheckLevel::Info => Level::Info,
        CheckLevel::Warning => Level::Warn,
        CheckLevel::Error | CheckLevel::Critical => Level::Error,
    }
}

/// Log every message at the level matching its severity.
///
/// Returns the number of serious (error or critical) messages.
pub fn report_checks(messages: &[CheckMessage]) -> usize {
    let mut serious = 0;
    for message in messages {
        log::log!(target: CHECKS_TARGET, log_level(message.level), "{message}");
        if message.is_serious() {
            serious += 1;
        }
    }
    serious
}

/// Install a global `tracing` fmt subscriber that also receives `log` records.
///
/// `RUST_LOG` takes precedence over `default_filter`.
///
/// # Errors
///
/// Fails if a global subscriber or logger is already installed.
#[cfg(feature = "tracing")]
pub fn init_tracing(
    default_filter: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{E001, E002};

    #[test]
    fn test_level_mapping() {
        assert_eq!(log_level(CheckLevel::Debug), Level::Debug);
        assert_eq!(log_level(CheckLevel::Info), Level::Info);
        assert_eq!(log_level(CheckLevel::Warning), Level::Warn);
        assert_eq!(log_level(CheckLevel::Error), Level::Error);
        assert_eq!(log_level(CheckLevel::Critical), Level::Error);
    }

    #[test]
    fn test_report_checks_counts_serious() {
        let mut warning = CheckMessage::error("minor", E002);
        warning.level = CheckLevel::Warning;
        let messages = vec![CheckMessage::error("colors is not iterable", E001), warning];
        assert_eq!(report_checks(&messages), 1);
        assert_eq!(report_checks(&[]), 0);
    }
}
