//! Command line and environment configuration.

use std::time::Duration;

use clap::Parser;

use rdswait_client::HttpConfig;
use rdswait_core::ResourceId;

use crate::delay::DelayPolicy;
use crate::error::ConfigError;

/// Longest accepted base delay between probes (one day).
pub const MAX_BASE_DELAY_SECS: u64 = 24 * 60 * 60;

/// Block until a database instance transitions into the available state.
#[derive(Parser, Debug)]
#[command(name = "rdswait", version, about)]
pub struct Args {
    /// Identifier of the instance to watch
    #[arg(value_name = "DB_INSTANCE_IDENTIFIER")]
    pub instance_id: String,

    /// Retry on errors from the status API instead of exiting
    #[arg(long, alias = "ignore-aws-errors")]
    pub ignore_errors: bool,

    /// Base URL of the status API
    #[arg(long, env = "RDSWAIT_ENDPOINT", default_value = "http://127.0.0.1:4566")]
    pub endpoint: String,

    /// Bearer token for the status API
    #[arg(long, env = "RDSWAIT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Fixed delay between probes in seconds
    #[arg(long, default_value = "25")]
    pub base_delay_secs: u64,

    /// Maximum random delay added to the base delay, in milliseconds
    #[arg(long, default_value = "5000")]
    pub jitter_ms: u64,

    /// Timeout for a single status request in seconds
    #[arg(long, default_value = "30")]
    pub request_timeout_secs: u64,
}

/// Validated run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Instance to watch.
    pub resource: ResourceId,

    /// Retry non-cancellation query failures.
    pub ignore_errors: bool,

    /// Delay between probes.
    pub delay: DelayPolicy,

    /// Status API client settings.
    pub http: HttpConfig,
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let resource = ResourceId::new(args.instance_id);
        if resource.is_blank() {
            return Err(ConfigError::EmptyIdentifier);
        }
        if args.endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }
        if args.base_delay_secs == 0 {
            return Err(ConfigError::ZeroBaseDelay);
        }
        if args.base_delay_secs > MAX_BASE_DELAY_SECS {
            return Err(ConfigError::BaseDelayTooLarge {
                max_secs: MAX_BASE_DELAY_SECS,
            });
        }
        if args.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroRequestTimeout);
        }

        Ok(Self {
            resource,
            ignore_errors: args.ignore_errors,
            delay: DelayPolicy::new(
                Duration::from_secs(args.base_delay_secs),
                Duration::from_millis(args.jitter_ms),
            ),
            http: HttpConfig {
                endpoint: args.endpoint,
                token: args.token.filter(|t| !t.is_empty()),
                request_timeout: Duration::from_secs(args.request_timeout_secs),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Config, ConfigError> {
        Config::try_from(Args::try_parse_from(argv.iter().copied()).unwrap())
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["rdswait", "db-1", "--endpoint", "http://localhost:4566"]).unwrap();
        assert_eq!(config.resource.as_str(), "db-1");
        assert!(!config.ignore_errors);
        assert_eq!(config.delay, DelayPolicy::default());
        assert_eq!(config.http.request_timeout, Duration::from_secs(30));
        assert!(config.http.token.is_none());
    }

    #[test]
    fn test_ignore_errors_flag_and_alias() {
        let config = parse(&["rdswait", "db-1", "--ignore-errors"]).unwrap();
        assert!(config.ignore_errors);

        let config = parse(&["rdswait", "--ignore-aws-errors", "db-1"]).unwrap();
        assert!(config.ignore_errors);
    }

    #[test]
    fn test_identifier_is_required() {
        assert!(Args::try_parse_from(["rdswait"]).is_err());
    }

    #[test]
    fn test_blank_identifier_rejected() {
        assert!(matches!(
            parse(&["rdswait", "  "]),
            Err(ConfigError::EmptyIdentifier)
        ));
    }

    #[test]
    fn test_zero_base_delay_rejected() {
        assert!(matches!(
            parse(&["rdswait", "db-1", "--base-delay-secs", "0"]),
            Err(ConfigError::ZeroBaseDelay)
        ));
    }

    #[test]
    fn test_oversized_base_delay_rejected() {
        assert!(matches!(
            parse(&["rdswait", "db-1", "--base-delay-secs", "18446744073709551615"]),
            Err(ConfigError::BaseDelayTooLarge { .. })
        ));
        assert!(matches!(
            parse(&["rdswait", "db-1", "--base-delay-secs", "86401"]),
            Err(ConfigError::BaseDelayTooLarge { max_secs: 86400 })
        ));
    }

    #[test]
    fn test_largest_base_delay_accepted() {
        let config = parse(&["rdswait", "db-1", "--base-delay-secs", "86400"]).unwrap();
        let delay = config.delay.next_delay();
        assert!(delay >= Duration::from_secs(86400));
        assert!(delay < config.delay.max_delay());
    }

    #[test]
    fn test_zero_request_timeout_rejected() {
        assert!(matches!(
            parse(&["rdswait", "db-1", "--request-timeout-secs", "0"]),
            Err(ConfigError::ZeroRequestTimeout)
        ));
    }

    #[test]
    fn test_custom_delay() {
        let config = parse(&[
            "rdswait",
            "db-1",
            "--base-delay-secs",
            "10",
            "--jitter-ms",
            "0",
        ])
        .unwrap();
        assert_eq!(config.delay.base(), Duration::from_secs(10));
        assert_eq!(config.delay.jitter(), Duration::ZERO);
    }
}
