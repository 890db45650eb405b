
use serde_json::{json, Value};
use test_utils::TestApp;

#[tokio::test]
async fn scanner_scenario_create_fetch_delete() {
    let app = TestApp::spawn().await;

    let id = app
        .create_project(json!({"title": "Scanner", "technologies": "Rust,Tokio", "featured": true}))
        .await;

    let response = app.get(&format!("/api/projects/{}", id)).await;
    assert_eq!(response.status().as_u16(), 200);
    let project: Value = response.json().await.unwrap();
    assert_eq!(project["id"], id);
    assert_eq!(project["title"], "Scanner");
    assert_eq!(project["technologies"], "Rust,Tokio");
    assert_eq!(project["featured"], 1);

    let response = app.delete(&format!("/api/admin/projects/{}", id)).await;
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Project deleted");

    let response = app.get(&format!("/api/projects/{}", id)).await;
    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Project not found");
}

#[tokio::test]
async fn fetched_project_matches_inserted_fields() {
    let app = TestApp::spawn().await;
    let payload = json!({
        "title": "Portfolio",
        "description": "This site",
        "technologies": "Rust,actix-web,SQLite",
        "image_url": "https://img.example.com/p.png",
        "project_url": "https://example.com",
        "github_url": "https://github.com/me/portfolio",
        "category": "web",
        "featured": 0
    });

    let id = app.create_project(payload.clone()).await;
    let project: Value = app.get(&format!("/api/projects/{}", id)).await.json().await.unwrap();

    for field in [
        "title", "description", "technologies", "image_url",
        "project_url", "github_url", "category", "featured",
    ] {
        assert_eq!(project[field], payload[field], "field {} differs", field);
    }
    assert!(project["created_at"].is_string());
}

#[tokio::test]
async fn technologies_are_returned_as_stored_text() {
    let app = TestApp::spawn().await;
    let id = app
        .create_project(json!({"title": "Legacy", "technologies": "Rust, Tokio", "featured": 1}))
        .await;

    let project: Value = app.get(&format!("/api/projects/{}", id)).await.json().await.unwrap();
    assert_eq!(project["technologies"], "Rust,Tokio");
    assert_eq!(project["featured"], 1);

    let stored: Option<String> = sqlx::query_scalar("SELECT technologies FROM projects WHERE id = ?")
        .bind(id)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(stored.as_deref(), Some("Rust,Tokio"));
}

#[tokio::test]
async fn array_technologies_are_joined_on_the_way_out() {
    let app = TestApp::spawn().await;
    let id = app
        .create_project(json!({"title": "Array", "technologies": ["Rust", "actix-web"]}))
        .await;

    let project: Value = app.get(&format!("/api/projects/{}", id)).await.json().await.unwrap();
    assert!(project["technologies"].is_string());
    assert_eq!(project["technologies"], "Rust,actix-web");
    assert_eq!(project["featured"], 0);
}

#[tokio::test]
async fn featured_filter_returns_flagged_subset_newest_first() {
    let app = TestApp::spawn().await;
    let a = app.create_project(json!({"title": "A", "featured": true})).await;
    app.create_project(json!({"title": "B"})).await;
    let c = app.create_project(json!({"title": "C", "featured": true})).await;

    let all: Vec<Value> = app.get("/api/projects").await.json().await.unwrap();
    let featured: Vec<Value> = app.get("/api/projects?featured=true").await.json().await.unwrap();

    assert_eq!(all.len(), 3);
    assert_eq!(featured.iter().map(|p| p["id"].as_i64().unwrap()).collect::<Vec<_>>(), vec![c, a]);
    assert!(featured.iter().all(|p| p["featured"] == 1));
    assert!(featured.iter().all(|p| all.contains(p)));

    // Any other value leaves the listing unfiltered
    let unfiltered: Vec<Value> = app.get("/api/projects?featured=false").await.json().await.unwrap();
    assert_eq!(unfiltered.len(), 3);
}

#[tokio::test]
async fn empty_listing_is_an_empty_array() {
    let app = TestApp::spawn().await;
    let response = app.get("/api/projects").await;
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn update_replaces_all_columns() {
    let app = TestApp::spawn().await;
    let id = app
        .create_project(json!({
            "title": "Before",
            "description": "will be cleared",
            "category": "cli",
            "featured": true
        }))
        .await;

    let response = app
        .put_json(&format!("/api/admin/projects/{}", id), &json!({"title": "After"}))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Project updated");

    let project: Value = app.get(&format!("/api/projects/{}", id)).await.json().await.unwrap();
    assert_eq!(project["title"], "After");
    assert_eq!(project["description"], Value::Null);
    assert_eq!(project["category"], Value::Null);
    assert_eq!(project["featured"], 0);
    assert_eq!(project["technologies"], Value::Null);
}

#[tokio::test]
async fn update_or_delete_of_missing_project_is_404() {
    let app = TestApp::spawn().await;

    let response = app.put_json("/api/admin/projects/4242", &json!({"title": "Ghost"})).await;
    assert_eq!(response.status().as_u16(), 404);

    let response = app.delete("/api/admin/projects/4242").await;
    assert_eq!(response.status().as_u16(), 404);

    assert_eq!(app.count_rows("projects").await, 0);
}

#[tokio::test]
async fn missing_title_is_rejected_without_writing() {
    let app = TestApp::spawn().await;

    let response = app.post_json("/api/admin/projects", &json!({"description": "no title"})).await;
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "title is required");

    let response = app.post_json("/api/admin/projects", &json!({"title": ""})).await;
    assert_eq!(response.status().as_u16(), 400);

    assert_eq!(app.count_rows("projects").await, 0);
}

#[tokio::test]
async fn non_numeric_id_is_not_found() {
    let app = TestApp::spawn().await;
    let response = app.get("/api/projects/abc").await;
    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = TestApp::spawn().await;
    let response = app
        .client
        .post(app.url("/api/admin/projects"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("JSON payload error"));
}

#[tokio::test]
async fn store_errors_pass_through_as_500() {
    let app = TestApp::spawn().await;
    sqlx::query("DROP TABLE projects").execute(&app.db_pool).await.unwrap();

    let response = app.get("/api/projects").await;
    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("no such table: projects"));
}
