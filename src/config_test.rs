use super::*;

// =============================================================================
// from_keys: uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn unset_keys_use_defaults() {
    let config = Config::from_keys("__TEST_CFG_HOST_UNSET_41__", "__TEST_CFG_PORT_UNSET_41__").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn port_and_host_are_parsed() {
    let (host_key, port_key) = ("__TEST_CFG_HOST_OK_17__", "__TEST_CFG_PORT_OK_17__");
    unsafe { std::env::set_var(host_key, "127.0.0.1") };
    unsafe { std::env::set_var(port_key, " 8080 ") };
    let config = Config::from_keys(host_key, port_key).unwrap();
    unsafe { std::env::remove_var(host_key) };
    unsafe { std::env::remove_var(port_key) };

    assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn empty_values_fall_back_to_defaults() {
    let (host_key, port_key) = ("__TEST_CFG_HOST_EMPTY_58__", "__TEST_CFG_PORT_EMPTY_58__");
    unsafe { std::env::set_var(host_key, "  ") };
    unsafe { std::env::set_var(port_key, "") };
    let config = Config::from_keys(host_key, port_key).unwrap();
    unsafe { std::env::remove_var(host_key) };
    unsafe { std::env::remove_var(port_key) };

    assert_eq!(config, Config::default());
}

#[test]
fn invalid_port_is_an_error() {
    let port_key = "__TEST_CFG_PORT_BAD_93__";
    unsafe { std::env::set_var(port_key, "70000") };
    let err = Config::from_keys("__TEST_CFG_HOST_UNSET_93__", port_key).unwrap_err();
    unsafe { std::env::remove_var(port_key) };

    assert_eq!(
        err,
        ConfigError::InvalidPort { key: "__TEST_CFG_PORT_BAD_93__", value: "70000".to_owned() }
    );
}

#[test]
fn invalid_host_is_an_error() {
    let host_key = "__TEST_CFG_HOST_BAD_26__";
    unsafe { std::env::set_var(host_key, "localhost") };
    let err = Config::from_keys(host_key, "__TEST_CFG_PORT_UNSET_26__").unwrap_err();
    unsafe { std::env::remove_var(host_key) };

    assert!(matches!(err, ConfigError::InvalidHost { .. }));
    assert!(err.to_string().contains("not an IP address"));
}
