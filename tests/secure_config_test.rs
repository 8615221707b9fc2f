//! Credential resolution against explicit environment snapshots.

use std::fs;
use std::path::PathBuf;

use om1_connectors::{ConfigError, EnvSnapshot, ProcessEnv, SecureConfig};
use tempfile::TempDir;

#[test]
fn test_missing_api_key() {
    let env = EnvSnapshot::new();
    assert_eq!(SecureConfig::resolve_api_key(&env, "openmind"), None);
}

#[test]
fn test_environment_variable_priority() {
    let env = EnvSnapshot::from_pairs([
        ("OM_API_KEY", "priority_key"),
        ("OPENAI_API_KEY", "lower_priority_key"),
    ]);
    assert_eq!(
        SecureConfig::resolve_api_key(&env, "openmind").as_deref(),
        Some("priority_key")
    );
    assert_eq!(
        SecureConfig::resolve_api_key(&env, "openai").as_deref(),
        Some("priority_key")
    );
}

#[test]
fn test_service_specific_key() {
    let env = EnvSnapshot::from_pairs([("OPENAI_API_KEY", "openai_specific_key")]);
    assert_eq!(
        SecureConfig::resolve_api_key(&env, "openai").as_deref(),
        Some("openai_specific_key")
    );
}

#[test]
fn test_service_name_is_upper_cased() {
    let env = EnvSnapshot::from_pairs([("ELEVENLABS_API_KEY", "elevenlabs_key_0001")]);
    assert_eq!(
        SecureConfig::resolve_api_key(&env, "elevenlabs").as_deref(),
        Some("elevenlabs_key_0001")
    );
}

#[test]
fn test_development_test_key_allowed() {
    for tier in ["dev", "development", "test", "DEVELOPMENT"] {
        let env = EnvSnapshot::from_pairs([("ENVIRONMENT", tier)]);
        assert_eq!(
            SecureConfig::resolve_api_key(&env, "openmind").as_deref(),
            Some("openmind_free"),
            "tier {tier} should allow the free key"
        );
    }
}

#[test]
fn test_production_test_key_blocked() {
    let env = EnvSnapshot::from_pairs([
        ("ENVIRONMENT", "production"),
        ("OM_API_KEY", "openmind_free"),
    ]);
    assert_eq!(SecureConfig::resolve_api_key(&env, "openmind"), None);
}

#[test]
fn test_unknown_tier_has_no_fallback() {
    let env = EnvSnapshot::from_pairs([("ENVIRONMENT", "staging")]);
    assert_eq!(SecureConfig::resolve_api_key(&env, "openmind"), None);
}

#[test]
fn test_valid_production_key() {
    let env = EnvSnapshot::from_pairs([
        ("ENVIRONMENT", "production"),
        ("OM_API_KEY", "real_secure_key_123456789"),
    ]);
    assert_eq!(
        SecureConfig::resolve_api_key(&env, "openmind").as_deref(),
        Some("real_secure_key_123456789")
    );
}

#[test]
fn test_key_validation_length() {
    let env = EnvSnapshot::new();
    assert!(!SecureConfig::validate_api_key(&env, "short", "test"));
    assert!(SecureConfig::validate_api_key(
        &env,
        "real_secure_key_123456789",
        "production"
    ));
}

#[test]
fn test_key_validation_empty() {
    let env = EnvSnapshot::from_pairs([("ENVIRONMENT", "development")]);
    assert!(!SecureConfig::validate_api_key(&env, "", "openmind"));
}

#[test]
fn test_key_validation_test_keys() {
    let env = EnvSnapshot::new();
    for test_key in ["openmind_free", "test_key", "demo_key", "example"] {
        assert!(!SecureConfig::validate_api_key(&env, test_key, "production"));
    }
}

#[test]
fn test_long_sentinel_passes_outside_production() {
    // openmind_free is 13 characters, so only the production rule rejects it.
    let prod = EnvSnapshot::from_pairs([("ENVIRONMENT", "Production")]);
    let dev = EnvSnapshot::from_pairs([("ENVIRONMENT", "development")]);
    assert!(!SecureConfig::validate_api_key(&prod, "openmind_free", "openmind"));
    assert!(SecureConfig::validate_api_key(&dev, "openmind_free", "openmind"));
}

#[test]
fn test_config_value_lookup() {
    let env = EnvSnapshot::from_pairs([("ROBOT_TYPE", "go2")]);
    assert_eq!(
        SecureConfig::get_config_value(&env, "robot_type", "", true).unwrap(),
        "go2"
    );
    assert_eq!(
        SecureConfig::get_config_value(&env, "robot_name", "spot", true).unwrap(),
        "spot"
    );
    assert_eq!(
        SecureConfig::get_config_value(&env, "robot_name", "", false).unwrap(),
        ""
    );
}

#[test]
fn test_required_config_value_missing() {
    let env = EnvSnapshot::new();
    let err = SecureConfig::get_config_value(&env, "ros_domain_id", "", true).unwrap_err();
    assert_eq!(
        err,
        ConfigError::MissingRequired {
            key: "ros_domain_id".to_string()
        }
    );
    assert_eq!(
        err.to_string(),
        "Required configuration value missing: ros_domain_id"
    );
}

#[test]
fn test_process_env_is_reread_on_every_call() {
    temp_env::with_var("OM_API_KEY", Some("first_key_value"), || {
        assert_eq!(SecureConfig::api_key("openmind").as_deref(), Some("first_key_value"));
    });
    temp_env::with_var("OM_API_KEY", Some("second_key_value"), || {
        assert_eq!(SecureConfig::api_key("openmind").as_deref(), Some("second_key_value"));
    });
}

#[test]
fn test_process_env_config_value() {
    temp_env::with_vars(
        [("OM1_TEST_SETTING", Some("on")), ("ENVIRONMENT", Some("production"))],
        || {
            assert_eq!(
                SecureConfig::config_value("om1_test_setting", "", true).unwrap(),
                "on"
            );
            // Long enough to pass the length rule; only the tier rejects it.
            assert!(!SecureConfig::is_valid_api_key("openmind_free", "openmind"));
        },
    );
    temp_env::with_var("ENVIRONMENT", Some("development"), || {
        assert!(SecureConfig::is_valid_api_key("openmind_free", "openmind"));
    });
}

fn write_dotenv(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join(".env");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_dotenv_values_are_visible() {
    let dir = TempDir::new().unwrap();
    let path = write_dotenv(&dir, "OM1_DOTENV_SETTING=real_secure_key_123456789\n");

    temp_env::with_var_unset("OM1_DOTENV_SETTING", || {
        ProcessEnv::load_dotenv_from(&path).unwrap();
        assert_eq!(
            SecureConfig::config_value("om1_dotenv_setting", "", false).unwrap(),
            "real_secure_key_123456789"
        );
    });
}

#[test]
fn test_process_variables_win_over_dotenv() {
    let dir = TempDir::new().unwrap();
    let path = write_dotenv(&dir, "OM1_DOTENV_SHADOWED=from_file\n");

    temp_env::with_var("OM1_DOTENV_SHADOWED", Some("from_shell"), || {
        ProcessEnv::load_dotenv_from(&path).unwrap();
        assert_eq!(
            SecureConfig::config_value("om1_dotenv_shadowed", "", true).unwrap(),
            "from_shell"
        );
    });
}

#[test]
fn test_dotenv_api_key_resolution() {
    let dir = TempDir::new().unwrap();
    let path = write_dotenv(&dir, "ENVIRONMENT=production\nOM_API_KEY=openmind_free\nOPENMIND_API_KEY=dotenv_key_0123456789\n");

    let env = EnvSnapshot::new().with_dotenv(&path).unwrap();
    assert_eq!(
        SecureConfig::resolve_api_key(&env, "openmind").as_deref(),
        Some("dotenv_key_0123456789")
    );
}
