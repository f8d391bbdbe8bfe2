//! Integration tests for the `/patients` endpoints

mod common;

use axum::http::StatusCode;
use chrono::Utc;
use common::{app, delete, get, post, put};
use serde_json::{json, Value};

async fn create_patient(app: &axum::Router, body: Value) -> i64 {
    let (status, json) = post(app, "/patients", body).await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {json}");
    json["patientId"].as_i64().unwrap()
}

fn find<'a>(list: &'a Value, id: i64) -> Option<&'a Value> {
    list.as_array()
        .unwrap()
        .iter()
        .find(|p| p["id"] == id.to_string())
}

#[tokio::test]
async fn test_create_from_first_and_last_name_round_trips() {
    let app = app();
    let (status, json) = post(
        &app,
        "/patients",
        json!({"firstName": "สมชาย", "lastName": "ใจดี", "phone": "0812345678"}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["message"], "Patient added successfully");
    let id = json["patientId"].as_i64().unwrap();
    assert_eq!(json["patient"]["id"], id);
    assert_eq!(json["patient"]["name"], "สมชาย ใจดี");
    assert_eq!(json["patient"]["gender"], "ชาย");
    assert!(json["patient"]["created_at"].is_string());

    let (status, list) = get(&app, "/patients").await;
    assert_eq!(status, StatusCode::OK);
    let patient = find(&list, id).unwrap();
    assert_eq!(patient["firstName"], "สมชาย");
    assert_eq!(patient["lastName"], "ใจดี");
    assert_eq!(patient["phone"], "0812345678");
}

#[tokio::test]
async fn test_list_shape_includes_hn_and_last_visit() {
    let app = app();
    let id = create_patient(&app, json!({"name": "Somchai", "phone": "0800000000"})).await;

    let (_, list) = get(&app, "/patients").await;
    let patient = find(&list, id).unwrap();

    assert_eq!(patient["hn"], format!("HN{id:05}"));
    assert_eq!(patient["firstName"], "Somchai");
    assert_eq!(patient["lastName"], "");
    assert_eq!(patient["dob"], "");
    assert_eq!(
        patient["lastVisit"],
        Utc::now().date_naive().format("%Y-%m-%d").to_string()
    );
}

#[tokio::test]
async fn test_create_requires_name_and_phone() {
    let app = app();

    let (status, json) = post(&app, "/patients", json!({"phone": "0812345678"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Name and Phone are required");

    let (status, _) = post(&app, "/patients", json!({"name": "สมชาย ใจดี"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = get(&app, "/patients").await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_gender_defaults_when_missing_or_unknown() {
    let app = app();
    let missing = create_patient(&app, json!({"name": "A B", "phone": "1"})).await;
    let unknown = create_patient(&app, json!({"name": "C D", "phone": "2", "gender": "robot"})).await;
    let female = create_patient(&app, json!({"name": "E F", "phone": "3", "gender": "female"})).await;

    let (_, list) = get(&app, "/patients").await;
    assert_eq!(find(&list, missing).unwrap()["gender"], "ชาย");
    assert_eq!(find(&list, unknown).unwrap()["gender"], "ชาย");
    assert_eq!(find(&list, female).unwrap()["gender"], "หญิง");
}

#[tokio::test]
async fn test_invalid_dob_is_rejected() {
    let app = app();
    let (status, json) = post(
        &app,
        "/patients",
        json!({"name": "A B", "phone": "1", "dob": "17/05/1990"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().contains("YYYY-MM-DD"));
}

#[tokio::test]
async fn test_partial_update_changes_only_phone_and_is_idempotent() {
    let app = app();
    let id = create_patient(
        &app,
        json!({"name": "สมหญิง รักดี", "phone": "0811111111", "gender": "หญิง", "dob": "1985-02-03"}),
    )
    .await;

    let uri = format!("/patients/{id}");
    let (status, json) = put(&app, &uri, json!({"phone": "000"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], format!("Patient with ID {id} updated successfully"));

    let (_, first) = get(&app, "/patients").await;
    let (status, _) = put(&app, &uri, json!({"phone": "000"})).await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = get(&app, "/patients").await;

    let patient = find(&first, id).unwrap();
    assert_eq!(patient["phone"], "000");
    assert_eq!(patient["firstName"], "สมหญิง");
    assert_eq!(patient["lastName"], "รักดี");
    assert_eq!(patient["gender"], "หญิง");
    assert_eq!(patient["dob"], "1985-02-03");
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_update_first_name_only_keeps_last_name() {
    let app = app();
    let id = create_patient(&app, json!({"name": "สมชาย ใจดี", "phone": "0812345678"})).await;

    let (status, _) = put(&app, &format!("/patients/{id}"), json!({"firstName": "สมศักดิ์"})).await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = get(&app, "/patients").await;
    let patient = find(&list, id).unwrap();
    assert_eq!(patient["firstName"], "สมศักดิ์");
    assert_eq!(patient["lastName"], "ใจดี");
}

#[tokio::test]
async fn test_update_last_name_only_keeps_first_name() {
    let app = app();
    let id = create_patient(&app, json!({"name": "สมชาย ใจดี", "phone": "0812345678"})).await;

    let (status, _) = put(&app, &format!("/patients/{id}"), json!({"lastName": "รักดี"})).await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = get(&app, "/patients").await;
    let patient = find(&list, id).unwrap();
    assert_eq!(patient["firstName"], "สมชาย");
    assert_eq!(patient["lastName"], "รักดี");
}

#[tokio::test]
async fn test_update_null_dob_clears_it() {
    let app = app();
    let id = create_patient(&app, json!({"name": "A B", "phone": "1", "dob": "2000-01-01"})).await;

    let (status, _) = put(&app, &format!("/patients/{id}"), json!({"dob": null})).await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = get(&app, "/patients").await;
    assert_eq!(find(&list, id).unwrap()["dob"], "");
}

#[tokio::test]
async fn test_update_without_fields_is_rejected() {
    let app = app();
    let id = create_patient(&app, json!({"name": "A B", "phone": "1"})).await;

    let (status, json) = put(&app, &format!("/patients/{id}"), json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "No fields to update");
}

#[tokio::test]
async fn test_update_unknown_patient_is_silent_success() {
    let app = app();
    let (status, _) = put(&app, "/patients/999", json!({"phone": "000"})).await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = get(&app, "/patients").await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_unknown_then_list_excludes_it() {
    let app = app();
    let kept = create_patient(&app, json!({"name": "A B", "phone": "1"})).await;

    let (status, json) = delete(&app, "/patients/4242").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Patient with ID 4242 deleted successfully");

    let (_, list) = get(&app, "/patients").await;
    assert!(find(&list, 4242).is_none());
    assert!(find(&list, kept).is_some());
}

#[tokio::test]
async fn test_delete_removes_patient() {
    let app = app();
    let id = create_patient(&app, json!({"name": "A B", "phone": "1"})).await;

    let (status, _) = delete(&app, &format!("/patients/{id}")).await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = get(&app, "/patients").await;
    assert!(find(&list, id).is_none());
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = app();
    let (status, json) = delete(&app, "/patients/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().starts_with("Invalid ID"));
}
