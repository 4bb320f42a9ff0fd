use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn from_lookup_defaults() {
    let cfg = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_url, "http://localhost:8000");
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg =
        HostConfig::from_lookup(lookup_from(&[("PORT", "8080"), ("LEASA_API_URL", "https://api.leasa.test/")]))
            .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_url, "https://api.leasa.test");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("PORT", "  "), ("LEASA_API_URL", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_url, "http://localhost:8000");
}

#[test]
fn invalid_port_is_rejected() {
    assert_eq!(
        HostConfig::from_lookup(lookup_from(&[("PORT", "99999")])),
        Err(ConfigError::InvalidPort("99999".to_owned()))
    );
    assert!(HostConfig::from_lookup(lookup_from(&[("PORT", "web")])).is_err());
}

#[test]
fn api_url_without_scheme_is_rejected() {
    assert_eq!(
        HostConfig::from_lookup(lookup_from(&[("LEASA_API_URL", "localhost:8000")])),
        Err(ConfigError::InvalidApiUrl("localhost:8000".to_owned()))
    );
}

#[test]
fn client_config_carries_api_url() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("LEASA_API_URL", "http://backend:9000")])).unwrap();
    assert_eq!(cfg.client_config().endpoint("/chat"), "http://backend:9000/chat");
}
