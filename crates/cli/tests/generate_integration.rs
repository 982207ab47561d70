//! End-to-end tests for the `swaggen` command line: file and HTTP input,
//! output writing, policy files and exit codes.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::Path;

use swaggen_cli::{CliError, load_document, run_cli_async, write_output};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SWAGGER_JSON: &str = r##"{
  "swagger": "2.0",
  "info": { "title": "Widgets", "version": "2.0.1" },
  "definitions": {
    "widget": {
      "type": "object",
      "required": ["id"],
      "properties": { "id": { "type": "string" } }
    },
    "Throwable": { "type": "object" }
  },
  "paths": {
    "/widget/{id}": {
      "get": {
        "summary": "Get Widget",
        "parameters": [{ "name": "id", "in": "path", "required": true, "type": "string" }],
        "responses": { "200": { "description": "Ok", "schema": { "$ref": "#/definitions/widget" } } }
      }
    },
    "/login": {
      "post": {
        "summary": "Login",
        "responses": { "200": { "description": "Ok", "schema": { "type": "string" } } }
      }
    }
  }
}"##;

const POLICY_TOML: &str = r#"
ignored-definitions = ["Throwable"]

[method-overrides]
"post:/login" = "__login"
"#;

fn args(items: &[&str]) -> Vec<String> {
    std::iter::once("swaggen")
        .chain(items.iter().copied())
        .map(String::from)
        .collect()
}

fn write_file(dir: &Path, name: &str, text: &str) -> String {
    let file = dir.join(name);
    fs::write(&file, text).unwrap();
    file.to_str().unwrap().to_string()
}

#[tokio::test]
async fn test_generates_client_from_file() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "swagger.json", SWAGGER_JSON);
    let policy = write_file(dir.path(), "policy.toml", POLICY_TOML);
    let output = dir.path().join("src/api/client.ts");

    let code = run_cli_async(args(&[
        "-i",
        &input,
        "-o",
        output.to_str().unwrap(),
        "-c",
        "WidgetAPI",
        "--policy",
        &policy,
        "--build-date",
        "2024-05-06 07:08:09",
    ]))
    .await;
    assert_eq!(code, 0);

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("/*   Build date: 2024-05-06 07:08:09"));
    assert!(text.contains("/*   API version: 2.0.1"));
    assert!(text.contains("export interface IWidget {"));
    assert!(!text.contains("IThrowable"));
    assert!(text.contains("export abstract class WidgetAPI {"));
    assert!(text.contains("public __login():Promise<string> {"));
    assert!(text.contains("public widgetGet(id:string):Promise<IWidget> {"));
}

#[tokio::test]
async fn test_same_input_gives_same_output() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "swagger.json", SWAGGER_JSON);
    let policy = write_file(dir.path(), "policy.toml", POLICY_TOML);
    let first = dir.path().join("first.ts");
    let second = dir.path().join("second.ts");

    for output in [&first, &second] {
        let code = run_cli_async(args(&[
            "-i",
            &input,
            "-o",
            output.to_str().unwrap(),
            "--policy",
            &policy,
            "--build-date",
            "2024-05-06 07:08:09",
        ]))
        .await;
        assert_eq!(code, 0);
    }

    assert_eq!(
        fs::read_to_string(&first).unwrap(),
        fs::read_to_string(&second).unwrap()
    );
}

#[tokio::test]
async fn test_fatal_error_writes_nothing() {
    let dir = TempDir::new().unwrap();
    // "Login" yields a single token and no override exists
    let input = write_file(dir.path(), "swagger.json", SWAGGER_JSON);
    let output = dir.path().join("client.ts");

    let code = run_cli_async(args(&["-i", &input, "-o", output.to_str().unwrap()])).await;
    assert_eq!(code, 1);
    assert!(!output.exists());
}

#[tokio::test]
async fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");

    let err = load_document(missing.to_str().unwrap()).await.unwrap_err();
    assert!(matches!(err, CliError::ReadInput { .. }));
    assert!(err.to_string().starts_with("Cannot open Swagger JSON file from"));

    let output = dir.path().join("client.ts");
    let code = run_cli_async(args(&[
        "-i",
        missing.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]))
    .await;
    assert_eq!(code, 1);
}

#[tokio::test]
async fn test_invalid_policy_file() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "swagger.json", SWAGGER_JSON);
    let policy = write_file(dir.path(), "policy.toml", "unknown-key = 1\n");
    let output = dir.path().join("client.ts");

    let code = run_cli_async(args(&[
        "-i",
        &input,
        "-o",
        output.to_str().unwrap(),
        "--policy",
        &policy,
    ]))
    .await;
    assert_eq!(code, 1);
    assert!(!output.exists());
}

#[tokio::test]
async fn test_missing_required_flags() {
    assert_ne!(run_cli_async(args(&["-i", "swagger.json"])).await, 0);
}

#[tokio::test]
async fn test_downloads_document_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/swagger.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SWAGGER_JSON))
        .mount(&server)
        .await;

    let url = format!("{}/swagger.json", server.uri());
    let text = load_document(&url).await.unwrap();
    assert_eq!(text, SWAGGER_JSON);

    let dir = TempDir::new().unwrap();
    let policy = write_file(dir.path(), "policy.toml", POLICY_TOML);
    let output = dir.path().join("client.ts");
    let code = run_cli_async(args(&[
        "--input",
        &url,
        "--output",
        output.to_str().unwrap(),
        "--policy",
        &policy,
    ]))
    .await;
    assert_eq!(code, 0);
    assert!(fs::read_to_string(&output).unwrap().contains("export interface IWidget {"));
}

#[tokio::test]
async fn test_http_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/swagger.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/swagger.json", server.uri());
    let err = load_document(&url).await.unwrap_err();
    assert!(matches!(
        err,
        CliError::DownloadStatus { status, .. } if status.as_u16() == 404
    ));
}

#[test]
fn test_write_output_creates_directories() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("a/b/client.ts");
    write_output(&output, "export {};\n").unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), "export {};\n");
}
