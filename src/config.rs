//! # Runtime configuration.
//!
//! Provides [`Config`], the settings for one supervised run, and
//! [`parse_patience`], the single piece of command-line surface this program
//! has.
//!
//! Config is immutable after startup: the binary resolves it once (defaults
//! plus the optional patience argument) and hands it to the supervisor by
//! value. There is no config file and no environment lookup.

use std::time::Duration;

use crate::error::ConfigError;

/// Settings for one supervised run.
#[derive(Clone, Debug)]
pub struct Config {
    /// Maximum time the supervisor tolerates before cancelling the worker.
    ///
    /// Measured from the moment the worker is spawned. The check runs only
    /// after each bounded wait expires, so actual cancellation delivery may
    /// lag this value by up to one `poll` interval.
    pub patience: Duration,

    /// Upper bound of a single bounded join in the supervisor's poll loop.
    ///
    /// The bounded join returns early if the worker finishes, otherwise after
    /// `poll`. Also the granularity of the `Still waiting...` notices.
    pub poll: Duration,

    /// Pause the worker takes before emitting each message.
    ///
    /// Cancellation is observed only while the worker is inside this pause.
    pub pause: Duration,
}

impl Default for Config {
    /// Default configuration (the original demo's constants):
    ///
    /// - `patience = 1h` (effectively "never cancel" for a 16s worker)
    /// - `poll = 1s`
    /// - `pause = 4s`
    fn default() -> Self {
        Self {
            patience: Duration::from_secs(60 * 60),
            poll: Duration::from_secs(1),
            pause: Duration::from_secs(4),
        }
    }
}

/// Parses the optional patience argument: an integer count of seconds.
///
/// Accepts any value `i64::from_str` accepts. Negative counts parse
/// successfully and resolve to a zero patience, i.e. a deadline that has
/// already expired by the time the worker starts.
///
/// # Errors
/// [`ConfigError::PatienceNotInteger`] if the argument is not an integer.
/// Its display is the fixed line the binary prints to stderr.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use patience::parse_patience;
///
/// assert_eq!(parse_patience("75").unwrap(), Duration::from_secs(75));
/// assert!(parse_patience("soon").is_err());
/// ```
pub fn parse_patience(arg: &str) -> Result<Duration, ConfigError> {
    let secs: i64 = arg.parse().map_err(|_| ConfigError::PatienceNotInteger {
        arg: arg.to_string(),
    })?;
    Ok(Duration::from_millis(
        (secs.max(0) as u64).saturating_mul(1000),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_patience_is_one_hour() {
        let cfg = Config::default();
        assert_eq!(cfg.patience, Duration::from_secs(3600));
        assert_eq!(cfg.poll, Duration::from_secs(1));
        assert_eq!(cfg.pause, Duration::from_secs(4));
    }

    #[test]
    fn test_parse_converts_seconds_to_millis() {
        assert_eq!(parse_patience("0").unwrap(), Duration::ZERO);
        assert_eq!(parse_patience("1").unwrap(), Duration::from_millis(1000));
        assert_eq!(parse_patience("75").unwrap(), Duration::from_millis(75_000));
    }

    #[test]
    fn test_parse_negative_resolves_to_zero() {
        assert_eq!(parse_patience("-5").unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_parse_rejects_non_integers() {
        for bad in ["", "x", "1.5", "10s", " 3"] {
            let err = parse_patience(bad).unwrap_err();
            assert_eq!(err.to_string(), "Argument must be an integer.");
        }
    }
}
