//! Tests for the models module

use super::*;
use crate::error::Error;
use crate::pagination::{Page, ScanParams};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::path::Path;
use test_case::test_case;

// ============================================================================
// Enum Tests
// ============================================================================

#[test_case("created_at_ascending", CreatedAtSortMode::CreatedAtAscending ; "wire ascending")]
#[test_case("desc", CreatedAtSortMode::CreatedAtDescending ; "short descending")]
#[test_case("Ascending", CreatedAtSortMode::CreatedAtAscending ; "mixed case")]
fn test_sort_mode_from_str(input: &str, expected: CreatedAtSortMode) {
    assert_eq!(input.parse::<CreatedAtSortMode>().unwrap(), expected);
}

#[test]
fn test_sort_mode_rejects_unknown() {
    let err = "sideways".parse::<CreatedAtSortMode>().unwrap_err();
    assert!(matches!(err, Error::InvalidConfigValue { .. }));
}

#[test]
fn test_sort_mode_serde_matches_display() {
    let mode = CreatedAtSortMode::CreatedAtAscending;
    assert_eq!(serde_json::to_value(mode).unwrap(), json!(mode.to_string()));
}

#[test]
fn test_status_deserialize() {
    let status: ApiCallStatus = serde_json::from_value(json!("in_progress")).unwrap();
    assert_eq!(status, ApiCallStatus::InProgress);
    assert!(!status.is_finished());
    assert!(ApiCallStatus::Failed.is_finished());
}

#[test_case("part.STL", Some(FileImportFormat::Stl) ; "uppercase extension")]
#[test_case("bracket.stp", Some(FileImportFormat::Step) ; "step alias")]
#[test_case("notes.txt", None ; "unsupported")]
#[test_case("no_extension", None ; "missing extension")]
fn test_import_format_from_path(path: &str, expected: Option<FileImportFormat>) {
    assert_eq!(FileImportFormat::from_path(Path::new(path)), expected);
}

#[test]
fn test_export_format_round_trip_name() {
    let format: FileExportFormat = "glb".parse().unwrap();
    assert_eq!(format, FileExportFormat::Glb);
    assert_eq!(format.as_str(), "glb");
    assert!("dwg".parse::<FileExportFormat>().is_err());
}

// ============================================================================
// Resource Tests
// ============================================================================

#[test]
fn test_user_lenient_fields() {
    let user: User = serde_json::from_value(json!({
        "id": "u1",
        "email": "ada@example.com",
        "created_at": "2024-01-02T03:04:05Z",
        "some_new_field": true
    }))
    .unwrap();

    assert_eq!(user.id, "u1");
    assert!(user.name.is_none());
    assert_eq!(user.display_name(), "ada@example.com");
    assert_eq!(
        user.created_at.unwrap().to_rfc3339(),
        "2024-01-02T03:04:05+00:00"
    );
}

#[test]
fn test_api_call_page() {
    let page: Page<ApiCallWithPrice> = serde_json::from_value(json!({
        "items": [
            {"id": "c1", "endpoint": "/file/conversion", "status_code": 201, "price": 0.5},
            {"id": "c2"}
        ],
        "next_page": "tok2"
    }))
    .unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page.items[0].status_code, Some(201));
    assert_eq!(page.items[1].endpoint, None);
    assert_eq!(page.next_token(), Some("tok2"));
}

#[test]
fn test_api_token_deserialize() {
    let token: ApiToken = serde_json::from_value(json!({
        "id": "t1",
        "token": "8f1c",
        "label": "ci",
        "is_valid": true
    }))
    .unwrap();

    assert_eq!(token.label.as_deref(), Some("ci"));
    assert!(token.is_valid);
}

#[test]
fn test_file_conversion_decoded_outputs() {
    let conversion: FileConversion = serde_json::from_value(json!({
        "id": "op1",
        "type": "file_conversion",
        "status": "completed",
        "src_format": "stl",
        "output_format": "obj",
        "outputs": {"output.obj": "aGVsbG8="}
    }))
    .unwrap();

    assert_eq!(conversion.status, ApiCallStatus::Completed);
    assert_eq!(conversion.src_format, Some(FileImportFormat::Stl));

    let outputs = conversion.decoded_outputs().unwrap();
    assert_eq!(outputs.get("output.obj").map(Vec::as_slice), Some(&b"hello"[..]));
}

#[test]
fn test_file_conversion_bad_output() {
    let mut conversion = FileConversion {
        id: "op1".to_string(),
        ..FileConversion::default()
    };
    conversion
        .outputs
        .insert("broken.obj".to_string(), "!!!not base64".to_string());

    let err = conversion.decoded_outputs().unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert!(err.to_string().contains("broken.obj"));
}

// ============================================================================
// ListParams Tests
// ============================================================================

#[test]
fn test_list_params_into_scan_params() {
    let params: ScanParams = ListParams::new()
        .limit(2)
        .sort_by(CreatedAtSortMode::CreatedAtAscending)
        .filter("status", "completed")
        .into();

    assert_eq!(params.get("limit"), Some(&json!(2)));
    assert_eq!(params.get_str("sort_by"), Some("created_at_ascending"));
    assert_eq!(params.get_str("status"), Some("completed"));
    assert!(params.page_token().is_none());
}

#[test]
fn test_list_params_default_is_empty() {
    let params: ScanParams = ListParams::default().into();
    assert!(params.is_empty());
}

#[test]
fn test_list_params_page_token() {
    let params: ScanParams = ListParams::new().page_token("resume").into();
    assert_eq!(params.page_token(), Some("resume"));
}
