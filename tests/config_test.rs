use realitydefender::{Client, Config, Error, ErrorKind, DEFAULT_BASE_URL};

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.api_key, "".to_string());
    assert_eq!(config.base_url, None);
    assert_eq!(config.timeout_seconds, None);
}

#[test]
fn test_validate_valid_config() {
    let config = Config {
        api_key: "test_api_key".to_string(),
        base_url: None,
        timeout_seconds: None,
    };

    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_empty_api_key() {
    let result = Config::default().validate();

    match result {
        Err(Error::Unauthorized(msg)) => {
            assert!(msg.contains("API key is required"));
        }
        _ => panic!("Expected Unauthorized error"),
    }
}

#[test]
fn test_validate_blank_base_url() {
    let config = Config {
        api_key: "test_api_key".to_string(),
        base_url: Some("   ".to_string()),
        timeout_seconds: None,
    };

    match config.validate() {
        Err(Error::InvalidRequest(msg)) => {
            assert!(msg.contains("Base URL cannot be empty"));
        }
        _ => panic!("Expected InvalidRequest error"),
    }
}

#[test]
fn test_client_rejects_invalid_config() {
    let err = Client::new(Config::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
}

#[test]
fn test_get_base_url_default() {
    let config = Config {
        api_key: "test_api_key".to_string(),
        base_url: None,
        timeout_seconds: None,
    };

    assert_eq!(config.get_base_url(), DEFAULT_BASE_URL);
    assert_eq!(config.get_base_url(), "https://api.prd.realitydefender.xyz");
}

#[test]
fn test_get_base_url_custom_trims_trailing_slash() {
    let config = Config {
        api_key: "test_api_key".to_string(),
        base_url: Some("https://custom-api.example.com/".to_string()),
        timeout_seconds: None,
    };

    assert_eq!(config.get_base_url(), "https://custom-api.example.com");
}

#[test]
fn test_get_timeout_seconds() {
    let mut config = Config {
        api_key: "test_api_key".to_string(),
        base_url: None,
        timeout_seconds: None,
    };
    assert_eq!(config.get_timeout_seconds(), 30);

    config.timeout_seconds = Some(120);
    assert_eq!(config.get_timeout_seconds(), 120);
}

// Kept as a single test since the process environment is shared between threads
#[test]
fn test_config_from_env() {
    std::env::remove_var("REALITY_DEFENDER_API_KEY");
    std::env::remove_var("REALITY_DEFENDER_BASE_URL");
    let err = Config::from_env().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
    assert!(err.message().contains("REALITY_DEFENDER_API_KEY"));

    std::env::set_var("REALITY_DEFENDER_API_KEY", "env_key");
    std::env::set_var("REALITY_DEFENDER_BASE_URL", "https://env.example.com");
    let config = Config::from_env().unwrap();
    assert_eq!(config.api_key, "env_key");
    assert_eq!(config.get_base_url(), "https://env.example.com");

    std::env::set_var("REALITY_DEFENDER_API_KEY", "");
    assert!(Config::from_env().is_err());

    std::env::remove_var("REALITY_DEFENDER_API_KEY");
    std::env::remove_var("REALITY_DEFENDER_BASE_URL");
}
