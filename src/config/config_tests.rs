use super::*;
use std::fs;
use tempfile::tempdir;

const FULL: &str = r#"
[server]
addr = "0.0.0.0:9000"
admin_url = "https://cms.example/wp-admin/"

[token]
secret = "s3cret"
lifespan_secs = 3600

[[types]]
name = "book"
create_capability = "create_books"

[[types]]
name = "archive"

[roles]
editor = ["create_books", "edit_posts"]

[actors.alice]
roles = ["editor"]

[actors.bob]
"#;

#[test]
fn test_empty_toml_produces_defaults() {
    let cfg: DuplicatorConfig = toml::from_str("").expect("Should parse empty TOML");
    assert_eq!(cfg, DuplicatorConfig::default());
    assert_eq!(cfg.server.addr, "127.0.0.1:8088");
    assert_eq!(cfg.token.lifespan_secs, DEFAULT_LIFESPAN_SECS);
    assert!(cfg.token.secret.is_none());
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_full_config_parses() {
    let cfg: DuplicatorConfig = toml::from_str(FULL).expect("Should parse full config");
    assert_eq!(cfg.server.addr, "0.0.0.0:9000");
    assert_eq!(cfg.token.secret.as_deref(), Some("s3cret"));
    assert_eq!(cfg.token.lifespan_secs, 3600);
    assert_eq!(cfg.types.len(), 2);
    assert_eq!(cfg.types[0].create_capability.as_deref(), Some("create_books"));
    assert!(cfg.types[1].create_capability.is_none());
    assert_eq!(cfg.roles["editor"], vec!["create_books", "edit_posts"]);
    assert_eq!(cfg.actors["alice"].roles, vec!["editor"]);
    assert!(cfg.actors["bob"].roles.is_empty());
}

#[test]
fn test_partial_server_section_keeps_other_defaults() {
    let cfg: DuplicatorConfig =
        toml::from_str("[server]\naddr = \"127.0.0.1:1\"\n").expect("Should parse");
    assert_eq!(cfg.server.addr, "127.0.0.1:1");
    assert_eq!(cfg.server.admin_url, ServerConfig::default().admin_url);
}

#[test]
fn test_duplicate_type_names_rejected() {
    let cfg: DuplicatorConfig =
        toml::from_str("[[types]]\nname = \"book\"\n[[types]]\nname = \"book\"\n").unwrap();
    let err = cfg.validate().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("'book'"));
}

#[test]
fn test_empty_type_name_rejected() {
    let cfg: DuplicatorConfig = toml::from_str("[[types]]\nname = \" \"\n").unwrap();
    assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_tiny_lifespan_rejected() {
    let cfg: DuplicatorConfig = toml::from_str("[token]\nlifespan_secs = 1\n").unwrap();
    assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_bad_admin_url_rejected() {
    let cfg: DuplicatorConfig =
        toml::from_str("[server]\nadmin_url = \"not a url\"\n").unwrap();
    assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_load_config_missing_file_returns_defaults() {
    let dir = tempdir().unwrap();
    let cfg = load_config(&dir.path().join("config.toml")).unwrap();
    assert_eq!(cfg, DuplicatorConfig::default());
}

#[test]
fn test_load_config_reads_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, FULL).unwrap();
    let cfg = load_config(&path).unwrap();
    assert_eq!(cfg.server.admin_url, "https://cms.example/wp-admin/");
    assert_eq!(cfg.actors.len(), 2);
}

#[test]
fn test_load_config_invalid_toml_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[server\naddr = ").unwrap();
    assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
}

#[test]
fn test_load_config_validates() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[[types]]\nname = \"a\"\n[[types]]\nname = \"a\"\n").unwrap();
    assert!(matches!(load_config(&path), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_default_config_path() {
    let path = default_config_path();
    assert!(path.ends_with(".record-duplicator/config.toml"));
}
