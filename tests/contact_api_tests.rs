
use serde_json::{json, Value};
use test_utils::TestApp;

#[tokio::test]
async fn valid_submission_is_stored() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json(
            "/api/contact",
            &json!({
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "Hello",
                "message": "Loved the portfolio"
            }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Message sent successfully");
    let id = body["id"].as_i64().unwrap();

    let (name, read): (String, bool) =
        sqlx::query_as("SELECT name, read FROM contact_messages WHERE id = ?")
            .bind(id)
            .fetch_one(&app.db_pool)
            .await
            .unwrap();
    assert_eq!(name, "Ada");
    assert!(!read);
}

#[tokio::test]
async fn empty_message_is_rejected_without_writing() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json(
            "/api/contact",
            &json!({"name": "Ada", "email": "ada@example.com", "message": ""}),
        )
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "message is required");
    assert_eq!(app.count_rows("contact_messages").await, 0);
}

#[tokio::test]
async fn missing_fields_are_all_reported() {
    let app = TestApp::spawn().await;

    let response = app.post_json("/api/contact", &json!({"subject": "Hi"})).await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "email, message and name are required");
    assert_eq!(body["details"].as_array().unwrap().len(), 3);
    assert_eq!(app.count_rows("contact_messages").await, 0);
}

#[tokio::test]
async fn contact_messages_have_no_public_read_endpoint() {
    let app = TestApp::spawn().await;
    let response = app.get("/api/contact").await;
    assert_eq!(response.status().as_u16(), 405);
}
