//! Integration tests for the `deveui` binary

use std::process::Command;
use tempfile::TempDir;

fn deveui() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_deveui"));
    cmd.env_remove("DEVEUI_INPUT").env_remove("DEVEUI_OUTPUT");
    cmd
}

#[test]
fn test_cli_success() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("devices.json");
    let output = temp_dir.path().join("euis.txt");
    std::fs::write(
        &input,
        r#"{"d1": {"info": {"devEUI": "AA11"}}, "d2": {"info": {"devEUI": "BB22"}}}"#,
    )
    .unwrap();

    let result = deveui()
        .current_dir(temp_dir.path())
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .output()
        .unwrap();

    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("devEUI value(s) to"));
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "AA11\nBB22\n");
}

#[test]
fn test_cli_defaults_and_dotenv() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir(temp_dir.path().join("components")).unwrap();
    std::fs::write(
        temp_dir.path().join("components/devices-2000.json"),
        r#"{"d1": {"info": {"devEUI": "CC33"}}}"#,
    )
    .unwrap();
    std::fs::write(temp_dir.path().join(".env"), "DEVEUI_OUTPUT=from-dotenv.txt\n").unwrap();

    let result = deveui().current_dir(temp_dir.path()).output().unwrap();

    assert!(result.status.success());
    assert_eq!(
        std::fs::read_to_string(temp_dir.path().join("from-dotenv.txt")).unwrap(),
        "CC33\n"
    );
}

#[test]
fn test_cli_failure_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("devices.json");
    std::fs::write(&input, "[1,2,3]").unwrap();

    let result = deveui()
        .current_dir(temp_dir.path())
        .arg("-i")
        .arg(&input)
        .output()
        .unwrap();

    assert!(!result.status.success());
    assert!(!temp_dir.path().join("device_euis.txt").exists());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("expected a JSON object"));
}
