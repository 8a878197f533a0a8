use super::*;

#[test]
fn default_config_uses_production_base_and_timeout() {
    let config = ApiConfig::default();
    assert_eq!(config.base_url, DEFAULT_API_BASE);
    assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
}

#[test]
fn resolve_applies_overrides() {
    let config = ApiConfig::resolve(Some("https://staging.example.com"), Some("2500"));
    assert_eq!(config.base_url, "https://staging.example.com");
    assert_eq!(config.timeout_ms, 2500);
}

#[test]
fn resolve_strips_trailing_slash_from_base() {
    let config = ApiConfig::resolve(Some("https://staging.example.com/"), None);
    assert_eq!(config.base_url, "https://staging.example.com");
}

#[test]
fn resolve_falls_back_on_unparsable_timeout() {
    let config = ApiConfig::resolve(None, Some("soon"));
    assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
}

#[test]
fn login_endpoint_joins_base_and_path() {
    let config = ApiConfig::resolve(Some("https://staging.example.com"), None);
    assert_eq!(
        config.login_endpoint(),
        "https://staging.example.com/api/login"
    );
}
