#![allow(non_snake_case)]

use super::*;

#[test]
fn CodecConfig___new___has_expected_defaults() {
    let config = CodecConfig::new("http://localhost:8080/rpc");

    assert_eq!(config.endpoint, "http://localhost:8080/rpc");
    assert_eq!(config.log_level, "info");
    assert!(config.request_timeout_ms.is_none());
    assert!(config.connect_timeout_ms.is_none());
    assert!(config.pool_idle_timeout_ms.is_none());
    assert!(config.user_agent.is_none());
}

#[test]
fn CodecConfig___from_json___parses_all_fields() {
    let json = r#"{
        "endpoint": "https://rpc.example.com/",
        "request_timeout_ms": 2500,
        "connect_timeout_ms": 300,
        "pool_idle_timeout_ms": 90000,
        "user_agent": "arith-client/1.0",
        "log_level": "debug"
    }"#;

    let config = CodecConfig::from_json(json.as_bytes()).unwrap();

    assert_eq!(config.endpoint, "https://rpc.example.com/");
    assert_eq!(config.request_timeout(), Some(Duration::from_millis(2500)));
    assert_eq!(config.connect_timeout(), Some(Duration::from_millis(300)));
    assert_eq!(config.pool_idle_timeout(), Some(Duration::from_secs(90)));
    assert_eq!(config.user_agent.as_deref(), Some("arith-client/1.0"));
    assert_eq!(config.log_level().unwrap(), LogLevel::Debug);
}

#[test]
fn CodecConfig___from_json___missing_endpoint_returns_config_error() {
    let result = CodecConfig::from_json(br#"{"log_level": "debug"}"#);

    assert!(matches!(result, Err(CodecError::Config(_))));
}

#[test]
fn CodecConfig___from_toml___parses_document() {
    let text = r#"
        endpoint = "http://127.0.0.1:9000/rpc"
        request_timeout_ms = 1000
        log_level = "warn"
    "#;

    let config = CodecConfig::from_toml(text).unwrap();

    assert_eq!(config.endpoint, "http://127.0.0.1:9000/rpc");
    assert_eq!(config.request_timeout(), Some(Duration::from_secs(1)));
    assert_eq!(config.log_level().unwrap(), LogLevel::Warn);
}

#[test]
fn CodecConfig___from_toml___invalid_document_returns_config_error() {
    let result = CodecConfig::from_toml("endpoint = ");

    assert!(matches!(result, Err(CodecError::Config(_))));
}

#[test]
fn CodecConfig___builder_chain___combines_options() {
    let config = CodecConfig::new("http://localhost/rpc")
        .with_request_timeout(Duration::from_secs(5))
        .with_connect_timeout(Duration::from_millis(250))
        .with_user_agent("test-agent");

    assert_eq!(config.request_timeout_ms, Some(5000));
    assert_eq!(config.connect_timeout_ms, Some(250));
    assert_eq!(config.user_agent.as_deref(), Some("test-agent"));
}

#[test]
fn CodecConfig___validate___accepts_http_endpoint() {
    let config = CodecConfig::new("http://localhost:8080/rpc");

    assert!(config.validate().is_ok());
}

#[test]
fn CodecConfig___validate___rejects_unknown_log_level() {
    let mut config = CodecConfig::new("http://localhost:8080/rpc");
    config.log_level = "chatty".to_string();

    assert!(matches!(config.validate(), Err(CodecError::Config(_))));
}
