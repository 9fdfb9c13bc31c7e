//! End-to-end tests against the assembled Rocket app and a throwaway SQLite file.

use careerforge::auth::{DEMO_EMAIL, DEMO_PASSWORD, DEMO_USER_ID};
use careerforge::config::AppConfig;
use careerforge::demo_data::DEMO_RESUME_TITLE;
use rocket::http::{ContentType, Header, Status};
use rocket::local::asynchronous::Client;
use serde_json::{json, Value};
use tempfile::TempDir;

async fn test_client(seed_demo_data: bool) -> (Client, TempDir) {
    client_with_ttl(seed_demo_data, 1).await
}

async fn client_with_ttl(seed_demo_data: bool, session_ttl_hours: i64) -> (Client, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        database_path: dir.path().join("api.db"),
        port: 0,
        jwt_secret: "integration-secret".to_string(),
        session_ttl_hours,
        seed_demo_data,
        log_file: None,
    };
    let rocket = careerforge::build_rocket(&config).await.unwrap();
    let client = Client::tracked(rocket).await.unwrap();
    (client, dir)
}

fn bearer(token: &str) -> Header<'static> {
    Header::new("Authorization", format!("Bearer {}", token))
}

async fn login_demo(client: &Client) -> String {
    let response = client
        .post("/api/auth/login")
        .json(&json!({ "email": DEMO_EMAIL, "password": DEMO_PASSWORD }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["data"]["user"]["id"], DEMO_USER_ID);
    body["data"]["token"].as_str().unwrap().to_string()
}

async fn signup(client: &Client, email: &str) -> String {
    let response = client
        .post("/api/auth/signup")
        .json(&json!({ "email": email, "password": "secret", "name": "Someone" }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().await.unwrap();
    body["data"]["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health_and_templates_are_public() {
    let (client, _dir) = test_client(false).await;

    let health = client.get("/api/health").dispatch().await;
    assert_eq!(health.status(), Status::Ok);
    let body: Value = health.into_json().await.unwrap();
    assert_eq!(body["message"], "OK");

    let templates = client.get("/api/templates").dispatch().await;
    assert_eq!(templates.status(), Status::Ok);
    let body: Value = templates.into_json().await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 10);
    assert_eq!(body["data"][9]["name"], "ATS Optimized");
}

#[tokio::test]
async fn test_protected_routes_require_session() {
    let (client, _dir) = test_client(false).await;

    let response = client
        .post("/api/analyze")
        .json(&json!({ "content": "team project results" }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Unauthorized);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["error_code"], "UNAUTHORIZED");
    assert_eq!(body["success"], false);

    let response = client
        .get("/api/me")
        .header(bearer("not-a-jwt"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Unauthorized);
}

#[tokio::test]
async fn test_expired_session_is_unauthorized() {
    let (client, _dir) = client_with_ttl(false, -2).await;

    let response = client
        .post("/api/auth/login")
        .json(&json!({ "email": DEMO_EMAIL, "password": DEMO_PASSWORD }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().await.unwrap();
    let token = body["data"]["token"].as_str().unwrap().to_string();

    let me = client.get("/api/me").header(bearer(&token)).dispatch().await;
    assert_eq!(me.status(), Status::Unauthorized);
    let body: Value = me.into_json().await.unwrap();
    assert_eq!(body["error_code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_cors_preflight() {
    let (client, _dir) = test_client(false).await;

    let preflight = client.options("/api/analyze").dispatch().await;
    assert_eq!(preflight.status(), Status::Ok);
    assert_eq!(
        preflight.headers().get_one("Access-Control-Allow-Origin"),
        Some("*")
    );
    assert_eq!(
        preflight.headers().get_one("Access-Control-Allow-Methods"),
        Some("POST, GET, DELETE, OPTIONS")
    );

    let health = client.get("/api/health").dispatch().await;
    assert_eq!(
        health.headers().get_one("Access-Control-Allow-Origin"),
        Some("*")
    );
}

#[tokio::test]
async fn test_login_rejects_wrong_password() {
    let (client, _dir) = test_client(false).await;

    let response = client
        .post("/api/auth/login")
        .json(&json!({ "email": DEMO_EMAIL, "password": "nope" }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Unauthorized);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["error_code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_logout_ends_session() {
    let (client, _dir) = test_client(false).await;
    let token = login_demo(&client).await;

    let me = client.get("/api/me").header(bearer(&token)).dispatch().await;
    assert_eq!(me.status(), Status::Ok);
    let body: Value = me.into_json().await.unwrap();
    assert_eq!(body["data"]["email"], DEMO_EMAIL);

    let logout = client
        .post("/api/auth/logout")
        .header(bearer(&token))
        .dispatch()
        .await;
    assert_eq!(logout.status(), Status::Ok);

    let me = client.get("/api/me").header(bearer(&token)).dispatch().await;
    assert_eq!(me.status(), Status::Unauthorized);
}

#[tokio::test]
async fn test_signup_requires_email_and_password() {
    let (client, _dir) = test_client(false).await;

    let response = client
        .post("/api/auth/signup")
        .json(&json!({ "email": "", "password": "x", "name": "Nobody" }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["error_code"], "INVALID_SIGNUP");
}

#[tokio::test]
async fn test_analysis_lifecycle() {
    let (client, _dir) = test_client(false).await;
    let token = login_demo(&client).await;

    let response = client
        .post("/api/analyze")
        .header(bearer(&token))
        .json(&json!({ "content": "team project results" }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().await.unwrap();
    let data = &body["data"];
    assert_eq!(data["score"], 40);
    assert_eq!(data["matchScore"], 30.0);
    assert_eq!(data["readabilityScore"], 50);
    assert_eq!(data["formatScore"], 50);
    assert_eq!(data["issues"].as_array().unwrap().len(), 3);
    assert_eq!(data["missingKeywords"].as_array().unwrap().len(), 7);
    let id = data["id"].as_str().unwrap().to_string();

    let second = client
        .post("/api/analyze")
        .header(bearer(&token))
        .json(&json!({ "content": "Experience\n\nSkills | Rust", "fileName": "cv.txt" }))
        .dispatch()
        .await;
    assert_eq!(second.status(), Status::Ok);

    let list = client
        .get("/api/analyze")
        .header(bearer(&token))
        .dispatch()
        .await;
    assert_eq!(list.status(), Status::Ok);
    let body: Value = list.into_json().await.unwrap();
    let records = body["data"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["file_name"], "cv.txt");
    assert_eq!(records[1]["file_name"], "resume.txt");

    let single = client
        .get(format!("/api/analyze?id={}", id))
        .header(bearer(&token))
        .dispatch()
        .await;
    assert_eq!(single.status(), Status::Ok);
    let body: Value = single.into_json().await.unwrap();
    assert_eq!(body["data"]["report"]["score"], 40);
    assert_eq!(body["data"]["content"], "team project results");

    let deleted = client
        .delete(format!("/api/analyze?id={}", id))
        .header(bearer(&token))
        .dispatch()
        .await;
    assert_eq!(deleted.status(), Status::Ok);

    let gone = client
        .get(format!("/api/analyze?id={}", id))
        .header(bearer(&token))
        .dispatch()
        .await;
    assert_eq!(gone.status(), Status::NotFound);
}

#[tokio::test]
async fn test_analysis_validation() {
    let (client, _dir) = test_client(false).await;
    let token = login_demo(&client).await;

    let empty = client
        .post("/api/analyze")
        .header(bearer(&token))
        .json(&json!({ "content": "" }))
        .dispatch()
        .await;
    assert_eq!(empty.status(), Status::BadRequest);
    let body: Value = empty.into_json().await.unwrap();
    assert_eq!(body["error_code"], "CONTENT_REQUIRED");

    let no_id = client
        .delete("/api/analyze")
        .header(bearer(&token))
        .dispatch()
        .await;
    assert_eq!(no_id.status(), Status::BadRequest);
    let body: Value = no_id.into_json().await.unwrap();
    assert_eq!(body["error_code"], "ID_REQUIRED");

    let malformed = client
        .post("/api/analyze")
        .header(bearer(&token))
        .header(ContentType::JSON)
        .body("{not json")
        .dispatch()
        .await;
    assert_eq!(malformed.status(), Status::BadRequest);
}

#[tokio::test]
async fn test_analyses_are_private() {
    let (client, _dir) = test_client(false).await;
    let demo = login_demo(&client).await;
    let other = signup(&client, "other@example.com").await;

    let created = client
        .post("/api/analyze")
        .header(bearer(&demo))
        .json(&json!({ "content": "leadership" }))
        .dispatch()
        .await;
    let body: Value = created.into_json().await.unwrap();
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let peek = client
        .get(format!("/api/analyze?id={}", id))
        .header(bearer(&other))
        .dispatch()
        .await;
    assert_eq!(peek.status(), Status::NotFound);

    let list = client
        .get("/api/analyze")
        .header(bearer(&other))
        .dispatch()
        .await;
    let body: Value = list.into_json().await.unwrap();
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_generate_with_ai() {
    let (client, _dir) = test_client(false).await;
    let token = login_demo(&client).await;

    let response = client
        .post("/api/generate-with-ai")
        .header(bearer(&token))
        .json(&json!({
            "jobTitle": "Data Engineer",
            "company": "",
            "industry": "FinTech Solutions",
            "experience": "5 years"
        }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().await.unwrap();
    let data = &body["data"];
    assert!(data["professional_summary"]
        .as_str()
        .unwrap()
        .starts_with("Results-driven Data Engineer"));
    assert_eq!(data["key_skills"].as_array().unwrap().len(), 6);
    assert_eq!(data["key_skills"][0], "Full-stack Development");
    assert_eq!(data["experience_suggestions"][0]["company"], "Current Company");
    assert_eq!(
        data["experience_suggestions"][1]["title"],
        "Senior Data Professional"
    );

    let minimal = client
        .post("/api/generate-with-ai")
        .header(bearer(&token))
        .json(&json!({}))
        .dispatch()
        .await;
    assert_eq!(minimal.status(), Status::Ok);
}

#[tokio::test]
async fn test_resume_lifecycle() {
    let (client, _dir) = test_client(true).await;
    let token = login_demo(&client).await;

    let seeded = client
        .get("/api/resumes")
        .header(bearer(&token))
        .dispatch()
        .await;
    let body: Value = seeded.into_json().await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["title"], DEMO_RESUME_TITLE);

    let seeded_analyses = client
        .get("/api/analyze")
        .header(bearer(&token))
        .dispatch()
        .await;
    let body: Value = seeded_analyses.into_json().await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let created = client
        .post("/api/resumes")
        .header(bearer(&token))
        .json(&json!({
            "title": "Draft",
            "template": 2,
            "content": {
                "fullName": "Jane Doe",
                "email": "jane@example.com",
                "summary": "Engineer focused on results and team leadership.",
                "experiences": [{ "title": "Engineer", "company": "Acme", "description": "Implemented things" }],
                "skills": ["Rust", "SQL"]
            }
        }))
        .dispatch()
        .await;
    assert_eq!(created.status(), Status::Ok);
    let body: Value = created.into_json().await.unwrap();
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let updated = client
        .post("/api/resumes")
        .header(bearer(&token))
        .json(&json!({ "id": id, "title": "Final", "template": 10, "content": { "fullName": "Jane Doe" } }))
        .dispatch()
        .await;
    assert_eq!(updated.status(), Status::Ok);

    let fetched = client
        .get(format!("/api/resumes?id={}", id))
        .header(bearer(&token))
        .dispatch()
        .await;
    assert_eq!(fetched.status(), Status::Ok);
    let body: Value = fetched.into_json().await.unwrap();
    assert_eq!(body["data"]["title"], "Final");
    assert_eq!(body["data"]["template"], 10);
    assert_eq!(body["data"]["content"]["fullName"], "Jane Doe");

    let list = client
        .get("/api/resumes")
        .header(bearer(&token))
        .dispatch()
        .await;
    let body: Value = list.into_json().await.unwrap();
    assert_eq!(body["data"][0]["id"], id.as_str());

    let analyzed = client
        .post(format!("/api/resumes/analyze?id={}", id))
        .header(bearer(&token))
        .dispatch()
        .await;
    assert_eq!(analyzed.status(), Status::Ok);
    let body: Value = analyzed.into_json().await.unwrap();
    assert!(body["data"]["score"].as_u64().unwrap() <= 100);

    let history = client
        .get("/api/analyze")
        .header(bearer(&token))
        .dispatch()
        .await;
    let body: Value = history.into_json().await.unwrap();
    assert_eq!(body["data"][0]["file_name"], "Final.txt");

    let deleted = client
        .delete(format!("/api/resumes?id={}", id))
        .header(bearer(&token))
        .dispatch()
        .await;
    assert_eq!(deleted.status(), Status::Ok);
}

#[tokio::test]
async fn test_resume_validation_and_ownership() {
    let (client, _dir) = test_client(true).await;
    let demo = login_demo(&client).await;
    let other = signup(&client, "intruder@example.com").await;

    let bad_template = client
        .post("/api/resumes")
        .header(bearer(&demo))
        .json(&json!({ "title": "X", "template": 42, "content": {} }))
        .dispatch()
        .await;
    assert_eq!(bad_template.status(), Status::BadRequest);
    let body: Value = bad_template.into_json().await.unwrap();
    assert_eq!(body["error_code"], "INVALID_TEMPLATE");

    let list = client
        .get("/api/resumes")
        .header(bearer(&demo))
        .dispatch()
        .await;
    let body: Value = list.into_json().await.unwrap();
    let seeded_id = body["data"][0]["id"].as_str().unwrap().to_string();

    let hijack = client
        .post("/api/resumes")
        .header(bearer(&other))
        .json(&json!({ "id": seeded_id, "title": "Mine now", "template": 1, "content": {} }))
        .dispatch()
        .await;
    assert_eq!(hijack.status(), Status::NotFound);

    let delete = client
        .delete(format!("/api/resumes?id={}", seeded_id))
        .header(bearer(&other))
        .dispatch()
        .await;
    assert_eq!(delete.status(), Status::NotFound);

    let missing_id = client
        .post("/api/resumes/analyze")
        .header(bearer(&demo))
        .dispatch()
        .await;
    assert_eq!(missing_id.status(), Status::BadRequest);
}
