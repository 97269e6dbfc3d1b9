//! Tests for the CLI module

use super::*;
use crate::models::{CreatedAtSortMode, FileExportFormat, FileImportFormat};
use clap::Parser;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("zoo").chain(args.iter().copied())).unwrap()
}

// ============================================================================
// Argument Parsing
// ============================================================================

#[test]
fn test_parse_api_calls() {
    let cli = parse(&[
        "api-calls",
        "--limit",
        "5",
        "--sort-by",
        "created_at_ascending",
        "--max-items",
        "12",
        "--token",
        "t",
    ]);

    assert_eq!(cli.token.as_deref(), Some("t"));
    match cli.command {
        Commands::ApiCalls {
            limit,
            sort_by,
            max_items,
        } => {
            assert_eq!(limit, Some(5));
            assert_eq!(sort_by, Some(CreatedAtSortMode::CreatedAtAscending));
            assert_eq!(max_items, Some(12));
        }
        other => panic!("Expected ApiCalls, got {other:?}"),
    }
}

#[test]
fn test_parse_rejects_unknown_sort() {
    let result = Cli::try_parse_from(["zoo", "api-calls", "--sort-by", "sideways"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_convert() {
    let cli = parse(&["convert", "part.stl", "--to", "obj", "-f", "pretty"]);

    assert_eq!(cli.format, OutputFormat::Pretty);
    match cli.command {
        Commands::Convert {
            input,
            from,
            to,
            output_dir,
        } => {
            assert_eq!(input.to_str(), Some("part.stl"));
            assert_eq!(from, None);
            assert_eq!(to, FileExportFormat::Obj);
            assert_eq!(output_dir.to_str(), Some("."));
        }
        other => panic!("Expected Convert, got {other:?}"),
    }
}

#[test]
fn test_parse_convert_explicit_from() {
    let cli = parse(&["convert", "model.bin", "--from", "step", "--to", "stl"]);
    match cli.command {
        Commands::Convert { from, .. } => assert_eq!(from, Some(FileImportFormat::Step)),
        other => panic!("Expected Convert, got {other:?}"),
    }
}

// ============================================================================
// Runner
// ============================================================================

#[tokio::test]
async fn test_users_max_items_stops_fetching() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("limit", "2"))
        .and(query_param_is_missing("page_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "u1"}, {"id": "u2"}],
            "next_page": "tok2"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("page_token", "tok2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [{"id": "u3"}]})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let cli = parse(&[
        "users",
        "--limit",
        "2",
        "--max-items",
        "2",
        "--host",
        &uri,
        "--token",
        "t",
    ]);

    Runner::new(cli).run().await.unwrap();
}

#[tokio::test]
async fn test_api_error_surfaces() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error_code": "unauthorized",
            "message": "bad token"
        })))
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let cli = parse(&["whoami", "--host", &uri, "--token", "nope"]);
    let err = Runner::new(cli).run().await.unwrap_err();

    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_convert_writes_outputs() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("cube.stl");
    std::fs::write(&input, b"solid cube").unwrap();
    let out_dir = dir.path().join("out");

    Mock::given(method("POST"))
        .and(path("/file/conversion/stl/obj"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "op1",
            "status": "completed",
            "outputs": {"output.obj": "aGVsbG8="}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let cli = parse(&[
        "convert",
        input.to_str().unwrap(),
        "--to",
        "obj",
        "--output-dir",
        out_dir.to_str().unwrap(),
        "--host",
        &uri,
        "--token",
        "t",
    ]);
    Runner::new(cli).run().await.unwrap();

    assert_eq!(std::fs::read(out_dir.join("output.obj")).unwrap(), b"hello");
}

#[tokio::test]
async fn test_convert_failed_conversion() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("cube.stl");
    std::fs::write(&input, b"solid cube").unwrap();

    Mock::given(method("POST"))
        .and(path("/file/conversion/stl/step"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "op2",
            "status": "failed",
            "error": "mesh is not closed"
        })))
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let cli = parse(&[
        "convert",
        input.to_str().unwrap(),
        "--to",
        "step",
        "--host",
        &uri,
        "--token",
        "t",
    ]);
    let err = Runner::new(cli).run().await.unwrap_err();

    assert!(err.to_string().contains("mesh is not closed"));
}

#[tokio::test]
async fn test_convert_unknown_extension() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("notes.txt");
    std::fs::write(&input, b"hi").unwrap();

    let cli = parse(&[
        "convert",
        input.to_str().unwrap(),
        "--to",
        "obj",
        "--host",
        "http://127.0.0.1:9",
        "--token",
        "t",
    ]);
    let err = Runner::new(cli).run().await.unwrap_err();

    assert!(err.to_string().contains("--from"));
}
