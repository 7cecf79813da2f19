use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("config.yaml");
    fs::write(&path, contents).expect("failed to write config");
    path
}

fn nessus6() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("nessus6"));
    cmd.env_remove("NESSUS6_CONFIG")
        .env_remove("NESSUS6_URL")
        .env_remove("NESSUS6_FORMAT")
        .env_remove("NESSUS6_DEBUG");
    cmd
}

#[test]
fn version_prints_package_version() {
    nessus6()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "nessus6 version {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn status_uses_custom_config_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(
        temp.path(),
        "host: scanner.local\nport: 8835\naccess_key: ak\nsecret_key: sk\n",
    );

    let assert = nessus6()
        .arg("status")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("https://scanner.local:8835"));
    assert!(stdout.contains("Authentication: API keys"));
    assert!(stdout.contains(&config_path.to_string_lossy().to_string()));

    Ok(())
}

#[test]
fn status_without_config_suggests_init() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    nessus6()
        .arg("status")
        .arg("--config")
        .arg(temp.path().join("absent.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("nessus6 init"));

    Ok(())
}

#[test]
fn status_reports_malformed_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "host: [scanner.local\n");

    nessus6()
        .arg("status")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration not found").not())
        .stderr(predicate::str::contains("Failed to parse configuration"));

    Ok(())
}

#[test]
fn incomplete_credentials_fail_before_any_request() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "url: http://127.0.0.1:9\nusername: admin\n");

    nessus6()
        .arg("scan")
        .arg("list")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));

    Ok(())
}

#[test]
fn completion_generates_script() {
    nessus6()
        .arg("completion")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("nessus6"));
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn server_status_with_api_keys() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let login = server.mock("POST", "/session").expect(0).create();
    let _status = server
        .mock("GET", "/server/status")
        .match_header("X-ApiKeys", "accessKey=ak; secretKey=sk")
        .with_status(200)
        .with_body(r#"{"status":"ready","progress":null}"#)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(
        temp.path(),
        &format!("url: {}\naccess_key: ak\nsecret_key: sk\n", server.url()),
    );

    let assert = nessus6()
        .arg("server")
        .arg("status")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("ready"));
    login.assert();

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn scan_list_json_logs_out_password_session() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let _login = server
        .mock("POST", "/session")
        .with_status(200)
        .with_body(r#"{"token":"tok"}"#)
        .create();
    let _scans = server
        .mock("GET", "/scans")
        .match_header("X-Cookie", "token=tok")
        .with_status(200)
        .with_body(
            r#"{
                "folders": [{ "id": 3, "name": "My Scans", "type": "main" }],
                "scans": [{ "id": 11, "name": "Weekly", "status": "completed", "folder_id": 3 }],
                "timestamp": 1443532190
            }"#,
        )
        .create();
    let logout = server
        .mock("DELETE", "/session")
        .match_header("X-Cookie", "token=tok")
        .with_status(200)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(
        temp.path(),
        &format!("url: {}\nusername: admin\npassword: secret\n", server.url()),
    );

    let assert = nessus6()
        .arg("scan")
        .arg("list")
        .arg("--format")
        .arg("json")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(parsed["data"]["scans"][0]["name"], "Weekly");
    assert!(parsed["meta"]["version"].is_string());
    logout.assert();

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn url_flag_overrides_config() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let _folders = server
        .mock("GET", "/folders")
        .with_status(200)
        .with_body(r#"{"folders":[{"id":2,"name":"Trash","type":"trash","unread_count":0}]}"#)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(
        temp.path(),
        "host: unreachable.invalid\naccess_key: ak\nsecret_key: sk\n",
    );

    nessus6()
        .arg("folder")
        .arg("list")
        .arg("--url")
        .arg(server.url())
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Trash"));

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn not_found_reports_error() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let _scan = server
        .mock("GET", "/scans/404")
        .with_status(404)
        .with_body(r#"{"error":"The requested file was not found."}"#)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(
        temp.path(),
        &format!("url: {}\naccess_key: ak\nsecret_key: sk\n", server.url()),
    );

    nessus6()
        .arg("scan")
        .arg("show")
        .arg("404")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Scan 404 does not exist."));

    Ok(())
}
