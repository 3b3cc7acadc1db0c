use anyhow::Result;

use crate::CliTest;

const LOGIN_STORY: &str = r#"{"story": "Login", "tests": [{"name": "a"}, {"name": "b"}]}"#;
const SEARCH_STORY: &str = r#"{"story": "Search", "tests": [{"name": "c"}]}"#;

#[test]
fn test_report_generates_aggregate() -> Result<()> {
    let test = CliTest::with_story("login.json", LOGIN_STORY)?;
    test.write_file("target/chronicle/search.json", SEARCH_STORY)?;

    let output = test.report_command().output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generated story reports for webtests"));
    assert!(stdout.contains("2 stories, 3 tests"));

    assert_eq!(
        test.read_file("target/site/chronicle/login.json")?,
        LOGIN_STORY
    );
    assert!(
        test.root()
            .join("target/site/chronicle/search.json")
            .is_file()
    );

    Ok(())
}

#[test]
fn test_report_records_history_runs() -> Result<()> {
    let test = CliTest::with_story("login.json", LOGIN_STORY)?;

    assert!(test.report_command().output()?.status.success());
    assert!(test.report_command().output()?.status.success());

    let history = test.root().join(".chronicle-history").join("webtests");
    assert!(history.join("run-0001").join("login.json").is_file());
    assert!(history.join("run-0002").join("login.json").is_file());

    Ok(())
}

#[test]
fn test_report_uses_config_source_root() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".chroniclerc.json", r#"{ "sourceRoot": "stories" }"#)?;
    test.write_file("stories/login.json", LOGIN_STORY)?;

    let output = test.report_command().output()?;

    assert!(output.status.success());
    assert!(
        test.root()
            .join("target/site/chronicle/login.json")
            .is_file()
    );

    Ok(())
}

#[test]
fn test_report_uses_config_project_name() -> Result<()> {
    let test = CliTest::with_story("login.json", LOGIN_STORY)?;
    test.write_file(".chroniclerc.json", r#"{ "projectName": "acceptance" }"#)?;

    let output = test.report_command().output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generated story reports for acceptance"));
    assert!(
        test.root()
            .join(".chronicle-history")
            .join("acceptance")
            .is_dir()
    );

    Ok(())
}

#[test]
fn test_report_verbose_names_directories() -> Result<()> {
    let test = CliTest::with_story("login.json", LOGIN_STORY)?;

    let output = test.report_command().arg("--verbose").output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generating reports from"));
    assert!(stdout.contains("Generating reports to"));

    Ok(())
}

#[test]
fn test_report_warns_when_no_stories_found() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("target/chronicle/.gitkeep", "")?;

    let output = test.report_command().output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0 stories, 0 tests"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no story result files found"));

    Ok(())
}

#[test]
fn test_report_fails_for_missing_source_directory() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.report_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error generating aggregate story reports"));
    assert!(stderr.contains("Story source directory not found"));

    Ok(())
}

#[test]
fn test_help_lists_commands() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("report"));
    assert!(stdout.contains("clean"));
    assert!(stdout.contains("init"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"));

    Ok(())
}
