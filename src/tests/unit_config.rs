use crate::config::BlogConfig;
use std::collections::HashMap;

fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<BlogConfig> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    BlogConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_config_defaults() {
    let config = config_from(&[]).unwrap();

    assert_eq!(config.database_url, "sqlite://postboard.db");
    assert_eq!(config.max_connections, 15);
    assert_eq!(config.bind_address.to_string(), "0.0.0.0:3000");
    assert_eq!(config.max_body_bytes, 1024 * 1024);
}

#[test]
fn test_config_overrides() {
    let config = config_from(&[
        ("DATABASE_URL", "sqlite://other.db"),
        ("MAX_CONNECTIONS", "4"),
        ("BIND_ADDRESS", "127.0.0.1:8787"),
        ("MAX_BODY_BYTES", "2048"),
    ])
    .unwrap();

    assert_eq!(config.database_url, "sqlite://other.db");
    assert_eq!(config.max_connections, 4);
    assert_eq!(config.bind_address.port(), 8787);
    assert_eq!(config.max_body_bytes, 2048);
}

// garbage numbers fall back instead of failing startup
#[test]
fn test_config_unparsable_numbers_fall_back() {
    let config = config_from(&[("MAX_CONNECTIONS", "lots"), ("MAX_BODY_BYTES", "-1")]).unwrap();
    assert_eq!(config.max_connections, 15);
    assert_eq!(config.max_body_bytes, 1024 * 1024);

    let config = config_from(&[("MAX_CONNECTIONS", "0")]).unwrap();
    assert_eq!(config.max_connections, 15);
}

#[test]
fn test_config_rejects_bad_bind_address() {
    let result = config_from(&[("BIND_ADDRESS", "localhost")]);
    assert!(result.is_err());
}
