use pdns_stats_domain::dialect::{RECURSOR_SOCKET, SERVER_COMMAND, SERVER_SOCKET};
use pdns_stats_domain::{ConfigError, Dialect, Target, TargetDeclaration, TransportKind};
use std::path::Path;

#[test]
fn test_server_target_defaults() {
    let target = Target::new("main", Dialect::Server);

    assert_eq!(target.instance(), "main");
    assert_eq!(target.socket_path(), Path::new(SERVER_SOCKET));
    assert_eq!(target.command(), SERVER_COMMAND);
    assert_eq!(target.transport_kind(), TransportKind::Stream);
}

#[test]
fn test_recursor_target_defaults() {
    let target = Target::new("rec", Dialect::Recursor);

    assert_eq!(target.socket_path(), Path::new(RECURSOR_SOCKET));
    assert!(target.command().starts_with("get "));
    assert_eq!(target.transport_kind(), TransportKind::Datagram);
}

#[test]
fn test_declaration_overrides_defaults() {
    let target = TargetDeclaration::new(Dialect::Recursor, "rec")
        .with_command("get questions cache-hits")
        .with_socket("/run/pdns-recursor/ctl")
        .to_target()
        .unwrap();

    assert_eq!(target.command(), "get questions cache-hits");
    assert_eq!(target.socket_path(), Path::new("/run/pdns-recursor/ctl"));
    assert_eq!(target.transport_kind(), TransportKind::Datagram);
}

#[test]
fn test_declaration_requires_dialect_and_instance() {
    let no_dialect = TargetDeclaration {
        instance: Some(toml::Value::String("x".to_string())),
        ..TargetDeclaration::default()
    };
    assert_eq!(
        no_dialect.to_target(),
        Err(ConfigError::MissingArgument("dialect"))
    );

    let mut empty_instance = TargetDeclaration::new(Dialect::Server, "");
    assert_eq!(
        empty_instance.to_target(),
        Err(ConfigError::MissingArgument("instance"))
    );

    empty_instance.instance = None;
    assert_eq!(
        empty_instance.to_target(),
        Err(ConfigError::MissingArgument("instance"))
    );
}

#[test]
fn test_declaration_rejects_unknown_dialect() {
    let declaration = TargetDeclaration {
        dialect: Some(toml::Value::String("bind".to_string())),
        instance: Some(toml::Value::String("x".to_string())),
        ..TargetDeclaration::default()
    };
    assert_eq!(
        declaration.to_target(),
        Err(ConfigError::UnknownDialect("bind".to_string()))
    );
}

#[test]
fn test_declaration_rejects_empty_overrides() {
    let declaration = TargetDeclaration::new(Dialect::Server, "main").with_command("  ");
    assert_eq!(
        declaration.to_target(),
        Err(ConfigError::EmptyValue {
            instance: "main".to_string(),
            option: "command",
        })
    );

    let declaration = TargetDeclaration::new(Dialect::Server, "main").with_socket("");
    assert!(matches!(
        declaration.to_target(),
        Err(ConfigError::EmptyValue { option: "socket", .. })
    ));
}

#[test]
fn test_declaration_rejects_non_string_values() {
    let mut declaration = TargetDeclaration::new(Dialect::Server, "main");
    declaration.instance = Some(toml::Value::Integer(5));
    assert_eq!(
        declaration.to_target(),
        Err(ConfigError::MissingArgument("instance"))
    );

    let mut declaration = TargetDeclaration::new(Dialect::Server, "main");
    declaration.dialect = Some(toml::Value::Boolean(true));
    assert_eq!(
        declaration.to_target(),
        Err(ConfigError::MissingArgument("dialect"))
    );

    let mut declaration = TargetDeclaration::new(Dialect::Recursor, "rec");
    declaration.command = Some(toml::Value::Array(vec![toml::Value::String("x".to_string())]));
    assert_eq!(
        declaration.to_target(),
        Err(ConfigError::NotAString {
            instance: "rec".to_string(),
            option: "command",
        })
    );
}
