//! Integration tests for login/logout/register commands.

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use tempfile::tempdir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test: login stores the token in credentials.json.
#[tokio::test(flavor = "multi_thread")]
async fn test_login_stores_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({
            "email": "amy@example.com",
            "password": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "tok-123" })))
        .expect(1)
        .mount(&server)
        .await;

    let temp = tempdir().unwrap();

    Command::cargo_bin("cork")
        .unwrap()
        .env("CORK_HOME", temp.path())
        .env("CORK_BASE_URL", server.uri())
        .args(["login", "--email", "amy@example.com", "--password", "hunter2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as amy@example.com"));

    let credentials_path = temp.path().join("credentials.json");
    assert!(credentials_path.exists(), "credentials.json should exist");

    let contents = fs::read_to_string(&credentials_path).unwrap();
    assert!(
        contents.contains("tok-123"),
        "Token should be in credentials.json"
    );
}

/// Test: login failure surfaces the server's message.
#[tokio::test(flavor = "multi_thread")]
async fn test_login_failure_shows_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid credentials" })),
        )
        .mount(&server)
        .await;

    let temp = tempdir().unwrap();

    Command::cargo_bin("cork")
        .unwrap()
        .env("CORK_HOME", temp.path())
        .env("CORK_BASE_URL", server.uri())
        .args(["login", "--email", "amy@example.com", "--password", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid credentials"));

    assert!(
        !temp.path().join("credentials.json").exists(),
        "No token should be stored on failure"
    );
}

/// Test: register with mismatched passwords makes no network call.
#[tokio::test(flavor = "multi_thread")]
async fn test_register_mismatch_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/register"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let temp = tempdir().unwrap();

    Command::cargo_bin("cork")
        .unwrap()
        .env("CORK_HOME", temp.path())
        .env("CORK_BASE_URL", server.uri())
        .args([
            "register",
            "--name",
            "Amy",
            "--email",
            "amy@example.com",
            "--password",
            "hunter2",
            "--confirm",
            "hunter3",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Passwords don't match"));
}

/// Test: successful registration posts name/email/password.
#[tokio::test(flavor = "multi_thread")]
async fn test_register_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/register"))
        .and(body_json(json!({
            "name": "Amy",
            "email": "amy@example.com",
            "password": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let temp = tempdir().unwrap();

    Command::cargo_bin("cork")
        .unwrap()
        .env("CORK_HOME", temp.path())
        .env("CORK_BASE_URL", server.uri())
        .args([
            "register",
            "--name",
            "Amy",
            "--email",
            "amy@example.com",
            "--password",
            "hunter2",
            "--confirm",
            "hunter2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered amy@example.com"));
}

/// Test: logout when not logged in shows a message.
#[test]
fn test_logout_when_not_logged_in() {
    let temp = tempdir().unwrap();

    Command::cargo_bin("cork")
        .unwrap()
        .env("CORK_HOME", temp.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));
}

/// Test: logout deletes the stored token.
#[test]
fn test_logout_clears_token() {
    let temp = tempdir().unwrap();
    let credentials_path = temp.path().join("credentials.json");
    fs::write(&credentials_path, r#"{"token": "tok-123"}"#).unwrap();

    Command::cargo_bin("cork")
        .unwrap()
        .env("CORK_HOME", temp.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out"));

    assert!(
        !credentials_path.exists(),
        "credentials.json should be removed"
    );
}
