use anyhow::Result;

use crate::{CliTest, stdout_of};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let stdout = stdout_of(&mut cmd);

    assert!(stdout.contains("Created .locauditrc.json"));
    let content = std::fs::read_to_string(test.root().join(".locauditrc.json"))?;
    assert!(content.contains("modulesRoot"));
    assert!(content.contains("tableFile"));

    Ok(())
}

#[test]
fn test_init_fails_when_config_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".locauditrc.json", "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = cmd.output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("already exists"));

    Ok(())
}
