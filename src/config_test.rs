use super::*;

#[test]
fn session_config_defaults_use_conventional_keys() {
    let cfg = SessionConfig::default();
    assert_eq!(cfg.access_key, "access_token");
    assert_eq!(cfg.refresh_key, "refresh_token");
    assert_eq!(cfg.refresh_policy, RefreshTokenPolicy::Optional);
}

#[test]
fn with_refresh_policy_overrides_default() {
    let cfg = SessionConfig::default().with_refresh_policy(RefreshTokenPolicy::Required);
    assert_eq!(cfg.refresh_policy, RefreshTokenPolicy::Required);
}

#[test]
fn app_config_default_login_path() {
    let cfg = AppConfig::default();
    assert_eq!(cfg.login_path, "/login");
    assert_eq!(cfg.home_path, "/");
    assert!(!cfg.api_base.ends_with('/'));
}

#[test]
fn default_paths_match_mounted_segments() {
    assert_eq!(DEFAULT_LOGIN_PATH, format!("/{LOGIN_SEGMENT}"));
    assert_eq!(DEFAULT_HOME_PATH, format!("/{HOME_SEGMENT}"));
}

#[test]
fn normalize_api_base_strips_trailing_slashes() {
    assert_eq!(normalize_api_base("https://api.example.com/v1//"), "https://api.example.com/v1");
}

#[test]
fn normalize_api_base_falls_back_when_blank() {
    assert_eq!(normalize_api_base("   "), DEFAULT_API_BASE);
    assert_eq!(normalize_api_base("/"), DEFAULT_API_BASE);
}
