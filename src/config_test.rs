use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn from_lookup_applies_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(
        cfg,
        ServerConfig { port: DEFAULT_PORT, api_upstream: None, api_timeout_secs: DEFAULT_API_TIMEOUT_SECS }
    );
}

#[test]
fn from_lookup_parses_overrides_and_trims_upstream() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("API_UPSTREAM_URL", " https://api.example.test/v1/ "),
        ("API_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_upstream.as_deref(), Some("https://api.example.test/v1"));
    assert_eq!(cfg.api_timeout_secs, 5);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("API_UPSTREAM_URL", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_upstream, None);
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidValue { var: "PORT", value: "eighty".to_owned() });
}

#[test]
fn upstream_without_scheme_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("API_UPSTREAM_URL", "api.example.test")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidUpstream("api.example.test".to_owned()));
}
