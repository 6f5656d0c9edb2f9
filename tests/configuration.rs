//! Tests for configuration system

use foodplan::Config;
use std::path::PathBuf;
use temp_dir::TempDir;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.deals.sale_dir, PathBuf::from("sale"));
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, "pretty");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_file_overrides_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("foodplan.toml");
    std::fs::write(
        &path,
        r#"
[server]
host = "0.0.0.0"
port = 8080

[deals]
sale_dir = "/var/lib/foodplan/sale"

[logging]
format = "json"
"#,
    )?;

    let config = Config::load(Some(path.display().to_string()))?;

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(
        config.deals.sale_dir,
        PathBuf::from("/var/lib/foodplan/sale")
    );
    assert_eq!(config.logging.format, "json");
    // untouched keys keep their defaults
    assert_eq!(config.logging.level, "info");

    Ok(())
}

#[test]
fn test_missing_config_file_uses_defaults() -> anyhow::Result<()> {
    let config = Config::load(Some("does/not/exist.toml".to_owned()))?;

    assert_eq!(config.server.port, 3000);

    Ok(())
}
