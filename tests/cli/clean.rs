use anyhow::Result;

use crate::CliTest;

#[test]
fn test_clean_without_history() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.clean_command().output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No story report history for webtests"));

    Ok(())
}

#[test]
fn test_clean_removes_history() -> Result<()> {
    let test = CliTest::with_story("login.json", r#"{"story": "Login", "tests": []}"#)?;
    assert!(test.report_command().output()?.status.success());

    let history = test.root().join(".chronicle-history").join("webtests");
    assert!(history.is_dir());

    let output = test.clean_command().output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Cleared story report history for webtests"));
    assert!(!history.exists());

    Ok(())
}

#[test]
fn test_clean_only_touches_named_project() -> Result<()> {
    let test = CliTest::with_story("login.json", r#"{"story": "Login", "tests": []}"#)?;
    assert!(test.report_command().output()?.status.success());

    let output = test.clean_command().args(["--project", "other"]).output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No story report history for other"));
    assert!(
        test.root()
            .join(".chronicle-history")
            .join("webtests")
            .is_dir()
    );

    Ok(())
}
