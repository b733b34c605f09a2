//! Tests for command-line and environment parsing of `Config`.

use std::time::Duration;

use clap::Parser;
use real_address::config::{LogFormat, LogLevel};
use real_address::Config;

#[test]
fn test_defaults() {
    let config = Config::try_parse_from(["real_address"]).unwrap();
    assert_eq!(config.listen.to_string(), "0.0.0.0:8000");
    assert!(matches!(config.log_level, LogLevel::Info));
    assert!(matches!(config.log_format, LogFormat::Plain));
    assert_eq!(config.geocoder_url, "https://nominatim.openstreetmap.org");
    assert_eq!(config.accept_language, "en");
    assert_eq!(config.min_interval(), Duration::from_millis(1100));
    assert_eq!(config.request_timeout(), Duration::from_secs(25));
    assert_eq!(config.retry_max_attempts, 3);
    assert_eq!(config.country_only_limit, 10);
    assert!(config.contact_email.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_parsed_defaults_match_default_impl() {
    let parsed = Config::try_parse_from(["real_address"]).unwrap();
    let default = Config::default();
    assert_eq!(parsed.listen, default.listen);
    assert_eq!(parsed.user_agent, default.user_agent);
    assert_eq!(parsed.min_interval_ms, default.min_interval_ms);
    assert_eq!(parsed.retry_base_delay_ms, default.retry_base_delay_ms);
    assert_eq!(parsed.retry_max_delay_ms, default.retry_max_delay_ms);
}

#[test]
fn test_all_flags() {
    let config = Config::try_parse_from([
        "real_address",
        "--listen",
        "127.0.0.1:9000",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "--geocoder-url",
        "http://localhost:8080/nominatim",
        "--user-agent",
        "AcmeTestData/2.0 (qa@acme.test)",
        "--contact-email",
        "qa@acme.test",
        "--accept-language",
        "de",
        "--min-interval-ms",
        "2000",
        "--timeout-seconds",
        "5",
        "--retry-max-attempts",
        "4",
        "--retry-base-delay-ms",
        "500",
        "--retry-max-delay-ms",
        "4000",
        "--country-only-limit",
        "25",
    ])
    .unwrap();

    assert_eq!(config.listen.port(), 9000);
    assert!(matches!(config.log_level, LogLevel::Debug));
    assert!(matches!(config.log_format, LogFormat::Json));
    assert_eq!(config.contact_email.as_deref(), Some("qa@acme.test"));
    assert_eq!(config.accept_language, "de");
    assert_eq!(config.min_interval_ms, 2000);
    assert_eq!(config.retry_max_attempts, 4);
    assert_eq!(config.country_only_limit, 25);
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_values_are_rejected_by_parser() {
    assert!(Config::try_parse_from(["real_address", "--listen", "not-an-addr"]).is_err());
    assert!(Config::try_parse_from(["real_address", "--log-level", "loud"]).is_err());
    assert!(Config::try_parse_from(["real_address", "--country-only-limit", "300"]).is_err());
    assert!(Config::try_parse_from(["real_address", "--min-interval-ms", "-1"]).is_err());
}

#[test]
fn test_out_of_range_values_fail_validation() {
    let config =
        Config::try_parse_from(["real_address", "--country-only-limit", "0"]).unwrap();
    assert!(config.validate().is_err());

    let config = Config::try_parse_from(["real_address", "--geocoder-url", "nominatim"]).unwrap();
    assert!(config.validate().is_err());

    let config = Config::try_parse_from([
        "real_address",
        "--retry-base-delay-ms",
        "5000",
        "--retry-max-delay-ms",
        "1000",
    ])
    .unwrap();
    assert!(config.validate().is_err());
}
