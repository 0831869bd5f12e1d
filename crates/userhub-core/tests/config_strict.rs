#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;

use userhub_core::config::{self, ConfigSource, ServiceConfig};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
database:
  max_conections: 4 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8000");
    assert_eq!(cfg.database.max_connections, 5);
    assert!(cfg.database.uri.is_empty());
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn rejects_unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert!(err.to_string().contains("version"));
}

#[test]
fn rejects_bad_listen_address() {
    let bad = r#"
version: 1
server:
  listen: "not-an-addr"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("server.listen"));
}

#[test]
fn rejects_out_of_range_pool() {
    let bad = r#"
version: 1
database:
  max_connections: 0
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("max_connections"));

    let bad = r#"
version: 1
database:
  acquire_timeout_ms: 10
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("acquire_timeout_ms"));
}

#[test]
fn env_overrides_uri_and_listen() {
    let mut cfg = config::load_from_str(
        r#"
version: 1
database:
  uri: "postgres://file@localhost/a"
"#,
    )
    .unwrap();

    let env: HashMap<&str, &str> = HashMap::from([
        (config::DATABASE_URI_ENV, "postgres://env@localhost/b"),
        (config::LISTEN_ENV, "127.0.0.1:9000"),
    ]);
    cfg.apply_overrides(|k| env.get(k).map(|v| v.to_string()));

    assert_eq!(cfg.database.uri, "postgres://env@localhost/b");
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 9000);
}

#[test]
fn blank_env_values_do_not_override() {
    let mut cfg = ServiceConfig::default();
    cfg.database.uri = "postgres://kept".into();
    cfg.apply_overrides(|_| Some("  ".to_string()));
    assert_eq!(cfg.database.uri, "postgres://kept");
    assert_eq!(cfg.server.listen, "0.0.0.0:8000");
}

#[test]
fn missing_file_falls_back_to_defaults_with_overrides() {
    let path = "/nonexistent/userhub-test.yaml";
    let env = HashMap::from([("DATABASE_URI", "postgres://db/users")]);

    let (cfg, source) =
        config::load_with(path, |k| env.get(k).map(|v| v.to_string())).expect("defaults");

    assert_eq!(source, ConfigSource::Defaults(path.to_string()));
    assert_eq!(cfg.database.uri, "postgres://db/users");
    assert_eq!(cfg.server.listen, "0.0.0.0:8000");
    assert!(source.to_string().contains("not found"));
}
