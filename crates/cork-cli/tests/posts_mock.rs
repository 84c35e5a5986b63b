//! Integration tests for headless post commands against a mock server.

use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use tempfile::{TempDir, tempdir};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a CORK_HOME with a stored token, as if `cork login` had run.
fn logged_in_home() -> TempDir {
    let temp = tempdir().unwrap();
    std::fs::write(
        temp.path().join("credentials.json"),
        r#"{"token": "tok-123"}"#,
    )
    .unwrap();
    temp
}

/// Test: posts list prints the collection and sends the bearer token.
#[tokio::test(flavor = "multi_thread")]
async fn test_posts_list_attaches_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "_id": "p1", "title": "First", "description": "one" },
            { "_id": "p2", "title": "Second", "description": "two" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let temp = logged_in_home();

    Command::cargo_bin("cork")
        .unwrap()
        .env("CORK_HOME", temp.path())
        .env("CORK_BASE_URL", server.uri())
        .args(["posts", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("First"))
        .stdout(predicate::str::contains("Second"));
}

/// Test: without a stored token, posts commands stop before any request.
#[tokio::test(flavor = "multi_thread")]
async fn test_posts_list_requires_login() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let temp = tempdir().unwrap();

    Command::cargo_bin("cork")
        .unwrap()
        .env("CORK_HOME", temp.path())
        .env("CORK_BASE_URL", server.uri())
        .args(["posts", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

/// Test: posts create sends the payload and reports the new id.
#[tokio::test(flavor = "multi_thread")]
async fn test_posts_create() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/posts"))
        .and(header("authorization", "Bearer tok-123"))
        .and(body_json(json!({ "title": "A", "description": "B" })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ "_id": "p9", "title": "A", "description": "B" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let temp = logged_in_home();

    Command::cargo_bin("cork")
        .unwrap()
        .env("CORK_HOME", temp.path())
        .env("CORK_BASE_URL", server.uri())
        .args(["posts", "create", "--title", "A", "--description", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created post p9"));
}

/// Test: empty fields fail locally with no request sent.
#[tokio::test(flavor = "multi_thread")]
async fn test_posts_create_rejects_empty_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/posts"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let temp = logged_in_home();

    Command::cargo_bin("cork")
        .unwrap()
        .env("CORK_HOME", temp.path())
        .env("CORK_BASE_URL", server.uri())
        .args(["posts", "create", "--title", "", "--description", "B"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Title and description are required"));
}

/// Test: posts update puts to the id path.
#[tokio::test(flavor = "multi_thread")]
async fn test_posts_update() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/posts/p7"))
        .and(body_json(json!({ "title": "New", "description": "Edited" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "_id": "p7", "title": "New", "description": "Edited" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let temp = logged_in_home();

    Command::cargo_bin("cork")
        .unwrap()
        .env("CORK_HOME", temp.path())
        .env("CORK_BASE_URL", server.uri())
        .args([
            "posts",
            "update",
            "p7",
            "--title",
            "New",
            "--description",
            "Edited",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated post p7"));
}

/// Test: posts delete hits the id path and reports it.
#[tokio::test(flavor = "multi_thread")]
async fn test_posts_delete() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/posts/p1"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let temp = logged_in_home();

    Command::cargo_bin("cork")
        .unwrap()
        .env("CORK_HOME", temp.path())
        .env("CORK_BASE_URL", server.uri())
        .args(["posts", "delete", "p1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted post p1"));
}

/// Test: whoami prints the profile.
#[tokio::test(flavor = "multi_thread")]
async fn test_whoami() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "name": "Amy", "email": "amy@example.com" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let temp = logged_in_home();

    Command::cargo_bin("cork")
        .unwrap()
        .env("CORK_HOME", temp.path())
        .env("CORK_BASE_URL", server.uri())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Amy <amy@example.com>"));
}
