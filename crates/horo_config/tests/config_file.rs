//! Loading chart configs from disk.

use std::io::Write;

use horo_config::{ChartConfig, ConfigError};
use horo_houses::HouseSystem;
use tempfile::NamedTempFile;

#[test]
fn loads_file_from_disk() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
house_system = "topocentric"

[houses]
altitude_m = 1200.0
"#
    )
    .unwrap();

    let c = ChartConfig::from_file(file.path()).unwrap();
    assert_eq!(c.house_system, HouseSystem::Topocentric);
    assert_eq!(c.houses.altitude_m, 1200.0);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ChartConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    match err {
        ConfigError::Io { path, .. } => assert!(path.ends_with("absent.toml")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_file_is_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "house_system = ").unwrap();
    assert!(matches!(
        ChartConfig::from_file(file.path()),
        Err(ConfigError::Parse(_))
    ));
}
