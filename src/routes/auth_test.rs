use super::*;

// =============================================================================
// env_bool — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on"].iter().enumerate() {
        let key = format!("__TEST_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__TEST_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_case_insensitive_and_trimmed() {
    let key = "__TEST_EB_CI_7731__";
    unsafe { std::env::set_var(key, "  True  ") };
    assert_eq!(env_bool(key), Some(true));
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_bool_invalid_or_unset_returns_none() {
    let key = "__TEST_EB_INVALID_4412__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };

    assert_eq!(env_bool("__TEST_EB_SURELY_UNSET_XYZ_42__"), None);
}

// =============================================================================
// cookie_secure — COOKIE_SECURE and PUBLIC_BASE_URL are shared globals, so
// the https inference is tested on the predicate rather than by mutating
// those vars under parallel tests.
// =============================================================================

#[test]
fn cookie_secure_https_inference_logic() {
    assert!("https://folio.example.com".starts_with("https://"));
    assert!(!"http://localhost:3000".starts_with("https://"));
}

// =============================================================================
// LOGIN BODY
// =============================================================================

#[test]
fn login_body_deserializes_from_form_json() {
    let body: LoginBody =
        serde_json::from_str(r#"{"username":"admin","password":"admin"}"#).unwrap();
    assert_eq!(body.username, "admin");
    assert_eq!(body.password, "admin");
}
