use anyhow::Result;
use scan_weigh::utils::validation::Validate;
use scan_weigh::{OnInvalid, OutputFormat, ScanConfig, ScanError};
use tempfile::TempDir;

#[test]
fn test_load_config_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("scan-weigh.toml");
    std::fs::write(
        &config_path,
        r#"
[display]
unit = "kg"
decimals = 2
output_format = "json"

[confirm]
message = "Remove?"
default_answer = true

[batch]
on_invalid = "abort"

[logging]
level = "debug"
json = true
"#,
    )?;

    let config = ScanConfig::load(config_path.to_str())?;
    config.validate()?;

    assert_eq!(config.display.unit, "kg");
    assert_eq!(config.display.output_format, OutputFormat::Json);
    assert_eq!(config.batch.on_invalid, OnInvalid::Abort);
    assert!(config.confirm.default_answer);
    assert!(config.logging.json);
    assert_eq!(
        config.weight_format().format("1.255".parse()?),
        "1.26 kg"
    );
    Ok(())
}

#[test]
fn test_missing_explicit_config_is_config_error() {
    let err = ScanConfig::load(Some("/definitely/not/here.toml")).unwrap_err();
    assert!(matches!(err, ScanError::ConfigError { .. }));
    assert!(err.to_string().contains("/definitely/not/here.toml"));
    assert!(matches!(
        ScanConfig::from_file("/definitely/not/here.toml"),
        Err(ScanError::IoError(_))
    ));
}

#[test]
fn test_invalid_toml_is_config_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("broken.toml");
    std::fs::write(&config_path, "[display\nunit = ")?;

    let err = ScanConfig::from_file(&config_path).unwrap_err();
    assert!(matches!(err, ScanError::ConfigValidationError { .. }));
    Ok(())
}
