use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use ideation_composer::{build_router, AppState, ChatEngine, ReportBuilder, Workspace};
use ideation_engine::EngineConfig;
use serde_json::{json, Value};
use std::path::Path;
use tempfile::TempDir;
use tower::ServiceExt;

fn test_app(report_dir: &Path) -> Router {
    let config = EngineConfig {
        seed: Some(7),
        ..EngineConfig::default()
    };
    let state = AppState::new(
        Workspace::new(config),
        ChatEngine::new().unwrap(),
        ReportBuilder::new(None),
        report_dir.to_path_buf(),
    );
    build_router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_health_check() {
    let temp_dir = TempDir::new().unwrap();
    let app = test_app(temp_dir.path());

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_idea_lifecycle() {
    let temp_dir = TempDir::new().unwrap();
    let app = test_app(temp_dir.path());

    let (status, idea) = send(
        &app,
        "POST",
        "/v1/ideas",
        Some(json!({
            "description": "AI-powered solution to automate network security for improved reliability",
            "category": "technical",
            "feasibility": 0.7
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(idea["state"], "conceived");
    assert!((idea["impactPotential"].as_f64().unwrap() - 0.15).abs() < 1e-9);
    let id = idea["id"].as_str().unwrap().to_string();

    let (status, fetched) = send(&app, "GET", &format!("/v1/ideas/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["description"], idea["description"]);

    let (status, roadmap) = send(&app, "GET", &format!("/v1/ideas/{}/roadmap", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(roadmap["recommendedPath"].as_array().unwrap().len(), 4);

    let (status, advanced) = send(
        &app,
        "POST",
        &format!("/v1/ideas/{}/advance", id),
        Some(json!({ "state": "feasible" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(advanced["state"], "feasible");

    let (status, _) = send(
        &app,
        "POST",
        &format!("/v1/ideas/{}/advance", id),
        Some(json!({ "state": "bogus-state" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, enhanced) = send(
        &app,
        "POST",
        &format!("/v1/ideas/{}/pattern", id),
        Some(json!({ "pattern": "reverse" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(enhanced["description"]
        .as_str()
        .unwrap()
        .ends_with("(considering reverse/inverse approach)"));

    let (status, _) = send(
        &app,
        "POST",
        &format!("/v1/ideas/{}/pattern", id),
        Some(json!({ "pattern": "lateral" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_idea_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let app = test_app(temp_dir.path());

    let (status, _) = send(&app, "GET", "/v1/ideas/idea_missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "POST",
        "/v1/ideas/idea_missing/advance",
        Some(json!({ "state": "developing" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", "/v1/ideas/idea_missing/roadmap", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_brainstorm_rank_and_stats() {
    let temp_dir = TempDir::new().unwrap();
    let app = test_app(temp_dir.path());

    let (status, ideas) = send(
        &app,
        "POST",
        "/v1/brainstorm",
        Some(json!({ "focusArea": "business", "count": 4 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let ideas = ideas.as_array().unwrap();
    assert_eq!(ideas.len(), 4);
    assert!(ideas.iter().all(|idea| idea["category"] == "practical"));

    let (status, _) = send(
        &app,
        "POST",
        "/v1/brainstorm",
        Some(json!({ "focusArea": "business", "count": 500 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, ranked) = send(&app, "GET", "/v1/rank?criterion=low_risk", None).await;
    assert_eq!(status, StatusCode::OK);
    let risks: Vec<f64> = ranked
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["riskAssessment"].as_f64().unwrap())
        .collect();
    assert_eq!(risks.len(), 4);
    assert!(risks.windows(2).all(|pair| pair[0] <= pair[1]));

    let (status, synergies) = send(&app, "GET", "/v1/synergies", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(synergies.as_array().unwrap().len() <= 6);

    let (status, stats) = send(&app, "GET", "/v1/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["ideaCount"], 4);
    assert_eq!(stats["stats"]["categoryDistribution"]["practical"], 4);
    assert_eq!(stats["config"]["seed"], 7);
}

#[tokio::test]
async fn test_connect_ideas() {
    let temp_dir = TempDir::new().unwrap();
    let app = test_app(temp_dir.path());

    let (_, first) = send(
        &app,
        "POST",
        "/v1/ideas",
        Some(json!({ "description": "Tool library" })),
    )
    .await;
    let (_, second) = send(
        &app,
        "POST",
        "/v1/ideas",
        Some(json!({ "description": "Repair cafe" })),
    )
    .await;

    let (status, body) = send(
        &app,
        "POST",
        "/v1/ideas/connect",
        Some(json!({ "idea1": first["id"], "idea2": second["id"] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "similar");

    let uri = format!("/v1/ideas/{}", second["id"].as_str().unwrap());
    let (_, linked) = send(&app, "GET", &uri, None).await;
    assert_eq!(linked["connections"][0]["id"], first["id"]);
    assert_eq!(linked["connections"][0]["type"], "similar");

    let (status, _) = send(
        &app,
        "POST",
        "/v1/ideas/connect",
        Some(json!({ "idea1": first["id"], "idea2": "idea_missing" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_chat_respond() {
    let temp_dir = TempDir::new().unwrap();
    let app = test_app(temp_dir.path());

    let (status, body) = send(
        &app,
        "POST",
        "/v1/respond",
        Some(json!({ "text": "green energy" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["analysis"]["domain"], "sustainability");
    assert_eq!(body["mood"], "happy");
    assert_eq!(body["ideas"].as_array().unwrap().len(), 2);
    assert_eq!(body["followupQuestions"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_report_is_saved() {
    let temp_dir = TempDir::new().unwrap();
    let report_dir = temp_dir.path().join("reports");
    let app = test_app(&report_dir);

    let (_, idea) = send(
        &app,
        "POST",
        "/v1/ideas",
        Some(json!({ "description": "Shared garden planner", "category": "social" })),
    )
    .await;
    let id = idea["id"].as_str().unwrap();

    let (status, body) = send(&app, "POST", &format!("/v1/ideas/{}/report", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["savedTo"].is_null());
    assert!(body["report"]["visualization"].is_null());
    assert!(!body["report"]["recommendations"].as_array().unwrap().is_empty());

    let (status, body) = send(
        &app,
        "POST",
        &format!("/v1/ideas/{}/report?save=true", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let saved_to = body["savedTo"].as_str().unwrap();
    assert!(Path::new(saved_to).exists());
    assert!(Path::new(saved_to).starts_with(&report_dir));
}

#[tokio::test]
async fn test_report_save_failure_is_server_error() {
    let temp_dir = TempDir::new().unwrap();
    // a plain file where the report directory should be
    let blocked = temp_dir.path().join("not-a-dir");
    std::fs::write(&blocked, "occupied").unwrap();
    let app = test_app(&blocked);

    let (_, idea) = send(
        &app,
        "POST",
        "/v1/ideas",
        Some(json!({ "description": "Bike repair map" })),
    )
    .await;
    let id = idea["id"].as_str().unwrap();

    let (status, _) = send(&app, "POST", &format!("/v1/ideas/{}/report?save=true", id), None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    // without saving the same report still builds
    let (status, body) = send(&app, "POST", &format!("/v1/ideas/{}/report", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["savedTo"].is_null());
}
