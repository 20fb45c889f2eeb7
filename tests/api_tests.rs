//! API tests against a running server
//!
//! Start the server, then run with: cargo test -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

fn unique(label: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{} {}", label, nanos)
}

async fn create(client: &Client, resource: &str, body: Value) -> Value {
    let response = client
        .post(format!("{}/{}", BASE_URL, resource))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.expect("Failed to parse response")
}

async fn get(client: &Client, path: &str) -> Value {
    let response = client
        .get(format!("{}/{}", BASE_URL, path))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let body = get(&Client::new(), "health").await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_school_with_teacher_and_pupil() {
    let client = Client::new();
    let school_name = unique("Lincoln High");

    let school = create(&client, "school", json!({"name": school_name, "address": "1 Main St"})).await;
    let school_id = school["id"].as_i64().expect("school id");

    let teacher = create(
        &client,
        "teacher",
        json!({"firstName": "Ada", "lastName": "Lovelace", "schoolId": school_id}),
    )
    .await;
    let teacher_id = teacher["id"].as_i64().expect("teacher id");

    let school = get(&client, &format!("school/{}", school_id)).await;
    assert_eq!(school["name"], school_name.as_str());
    assert_eq!(school["teachers"][0]["id"], teacher_id);
    assert_eq!(school["teachers"][0]["firstName"], "Ada");

    let pupil = create(&client, "pupil", json!({"firstName": "Vladimir", "lastName": "Markin"})).await;
    let pupil_id = pupil["id"].as_i64().expect("pupil id");

    let response = client
        .post(format!("{}/pupil/addPupilToTeacher", BASE_URL))
        .json(&json!({"pupilId": pupil_id, "teacherId": teacher_id}))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let pupils = get(&client, &format!("pupil/{}/teachers", teacher_id)).await;
    assert_eq!(pupils[0]["id"], pupil_id);
    let teachers = get(&client, &format!("pupil/{}/teacherList", pupil_id)).await;
    assert_eq!(teachers[0]["id"], teacher_id);

    let response = client
        .delete(format!("{}/pupil/{}/teachers/{}", BASE_URL, pupil_id, teacher_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    assert_eq!(get(&client, &format!("pupil/{}/teachers", teacher_id)).await, json!([]));
}

#[tokio::test]
#[ignore]
async fn test_missing_school_fields() {
    let response = Client::new()
        .post(format!("{}/school", BASE_URL))
        .json(&json!({"name": "Lincoln High"}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Name and/or address required.");
}

#[tokio::test]
#[ignore]
async fn test_delete_twice() {
    let client = Client::new();
    let pupil = create(&client, "pupil", json!({"firstName": unique("Masha"), "lastName": "Sidorova"})).await;
    let pupil_id = pupil["id"].as_i64().expect("pupil id");

    for _ in 0..2 {
        let response = client
            .delete(format!("{}/pupil/{}", BASE_URL, pupil_id))
            .send()
            .await
            .expect("Failed to send request");
        assert!(response.status().is_success());
    }
    assert!(get(&client, &format!("pupil/{}", pupil_id)).await.is_null());
}
