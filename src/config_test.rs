use super::*;

fn site_addr() -> SocketAddr {
    "127.0.0.1:3000".parse().unwrap()
}

#[test]
fn resolve_addr_defaults_to_site_addr() {
    assert_eq!(resolve_addr(site_addr(), None).unwrap(), site_addr());
}

#[test]
fn resolve_addr_blank_port_is_ignored() {
    assert_eq!(resolve_addr(site_addr(), Some("   ")).unwrap(), site_addr());
}

#[test]
fn resolve_addr_port_binds_all_interfaces() {
    let addr = resolve_addr(site_addr(), Some(" 8080 ")).unwrap();
    assert_eq!(addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
}

#[test]
fn resolve_addr_rejects_invalid_port() {
    for bad in ["http", "70000", "-1"] {
        let err = resolve_addr(site_addr(), Some(bad)).unwrap_err();
        assert!(matches!(err, ServerError::InvalidPort(ref raw) if raw == bad), "unexpected error for {bad:?}: {err}");
    }
}

#[test]
fn resolve_assets_dir_default_and_override() {
    assert_eq!(resolve_assets_dir(None), PathBuf::from(DEFAULT_ASSETS_DIR));
    assert_eq!(resolve_assets_dir(Some("")), PathBuf::from(DEFAULT_ASSETS_DIR));
    assert_eq!(resolve_assets_dir(Some("/srv/assets")), PathBuf::from("/srv/assets"));
}

#[test]
fn invalid_port_error_message() {
    let err = ServerError::InvalidPort("abc".to_owned());
    assert_eq!(err.to_string(), "invalid PORT value: \"abc\"");
}
