use anyhow::Result;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.init_command().output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Created .chroniclerc.json"));

    let config = test.read_file(".chroniclerc.json")?;
    assert!(config.contains("sourceRoot"));
    assert!(config.contains("storyPatterns"));

    Ok(())
}

#[test]
fn test_init_fails_when_config_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".chroniclerc.json", "{}")?;

    let output = test.init_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(".chroniclerc.json already exists"));

    Ok(())
}
