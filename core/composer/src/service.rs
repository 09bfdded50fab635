use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use ideation_engine::{
    evaluate, find_synergies, generate_roadmap, rank, EngineConfig, IdeaError, IdeaGenerator,
    IdeaRegistry, RankCriterion, ThinkingPattern, DEFAULT_CONNECTION_TYPE,
};
use ideation_schemas::{
    AdvanceRequest, BrainstormRequest, CaptureRequest, ConnectRequest, IdeaId, PatternRequest,
    RespondRequest,
};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::chat::ChatEngine;
use crate::report::ReportBuilder;

pub const DEFAULT_ADDR: &str = "127.0.0.1:21956";
pub const DEFAULT_REPORT_DIR: &str = "./reports";
pub const DEFAULT_CATEGORY: &str = "creative";
pub const DEFAULT_FEASIBILITY: f64 = 0.5;
pub const DEFAULT_BRAINSTORM_COUNT: usize = 5;
pub const MAX_BRAINSTORM_COUNT: usize = 50;

type ApiResult<T> = Result<T, (StatusCode, String)>;

/// Service settings read from the environment
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub addr: String,
    pub report_dir: PathBuf,
    pub engine: EngineConfig,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self {
            addr: std::env::var("COMPOSER_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string()),
            report_dir: std::env::var("REPORT_DIR")
                .unwrap_or_else(|_| DEFAULT_REPORT_DIR.to_string())
                .into(),
            engine: EngineConfig::from_env(),
        }
    }
}

/// Registry and generator share one lock so every mutation is serialized
pub struct Workspace {
    pub registry: IdeaRegistry,
    pub generator: IdeaGenerator,
    pub config: EngineConfig,
}

impl Workspace {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            registry: IdeaRegistry::new(),
            generator: IdeaGenerator::from_config(&config),
            config,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub workspace: Arc<Mutex<Workspace>>,
    pub chat: Arc<ChatEngine>,
    pub reports: Arc<ReportBuilder>,
    pub report_dir: PathBuf,
}

impl AppState {
    pub fn new(
        workspace: Workspace,
        chat: ChatEngine,
        reports: ReportBuilder,
        report_dir: PathBuf,
    ) -> Self {
        Self {
            workspace: Arc::new(Mutex::new(workspace)),
            chat: Arc::new(chat),
            reports: Arc::new(reports),
            report_dir,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    // Open CORS for the browser front end
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/v1/respond", post(respond))
        .route("/v1/brainstorm", post(brainstorm))
        .route("/v1/ideas", post(capture_idea))
        .route("/v1/ideas/connect", post(connect_ideas))
        .route("/v1/ideas/:id", get(get_idea))
        .route("/v1/ideas/:id/advance", post(advance_idea))
        .route("/v1/ideas/:id/pattern", post(apply_pattern))
        .route("/v1/ideas/:id/roadmap", get(get_roadmap))
        .route("/v1/ideas/:id/report", post(build_report))
        .route("/v1/rank", get(rank_ideas))
        .route("/v1/synergies", get(list_synergies))
        .route("/v1/stats", get(get_stats))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn idea_error(err: IdeaError) -> (StatusCode, String) {
    let status = match &err {
        IdeaError::NotFound { .. } => StatusCode::NOT_FOUND,
        IdeaError::InvalidState { .. } | IdeaError::UnknownPattern { .. } => {
            StatusCode::BAD_REQUEST
        }
    };
    (status, err.to_string())
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "service": "ideation-composer",
        "status": "healthy",
        "version": "0.1.0"
    }))
}

async fn respond(
    State(state): State<AppState>,
    Json(request): Json<RespondRequest>,
) -> impl IntoResponse {
    Json(state.chat.generate_response(&request.text))
}

async fn brainstorm(
    State(state): State<AppState>,
    Json(request): Json<BrainstormRequest>,
) -> ApiResult<impl IntoResponse> {
    let focus_area = request.focus_area.unwrap_or_else(|| "general".to_string());
    let count = request.count.unwrap_or(DEFAULT_BRAINSTORM_COUNT);
    if count > MAX_BRAINSTORM_COUNT {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("count must be at most {}", MAX_BRAINSTORM_COUNT),
        ));
    }

    let mut workspace = state.workspace.lock().await;
    let Workspace {
        registry,
        generator,
        ..
    } = &mut *workspace;

    let ideas = generator
        .brainstorm(registry, &focus_area, count)
        .map_err(idea_error)?;
    Ok(Json(ideas))
}

async fn capture_idea(
    State(state): State<AppState>,
    Json(request): Json<CaptureRequest>,
) -> ApiResult<impl IntoResponse> {
    if request.description.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "description must not be empty".to_string(),
        ));
    }

    let mut workspace = state.workspace.lock().await;
    let idea = workspace.registry.capture(
        request.description,
        request
            .category
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        request.feasibility.unwrap_or(DEFAULT_FEASIBILITY),
    );
    Ok((StatusCode::CREATED, Json(idea)))
}

async fn get_idea(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let workspace = state.workspace.lock().await;
    let idea = workspace
        .registry
        .require(&IdeaId(id))
        .map_err(idea_error)?;
    Ok(Json(idea.clone()))
}

async fn advance_idea(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AdvanceRequest>,
) -> ApiResult<impl IntoResponse> {
    let mut workspace = state.workspace.lock().await;
    let idea = workspace
        .registry
        .advance(&IdeaId(id), &request.state)
        .map_err(idea_error)?;
    Ok(Json(idea))
}

async fn apply_pattern(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<PatternRequest>,
) -> ApiResult<impl IntoResponse> {
    let pattern: ThinkingPattern = request.pattern.parse().map_err(idea_error)?;

    let mut workspace = state.workspace.lock().await;
    let Workspace {
        registry,
        generator,
        ..
    } = &mut *workspace;

    let idea = generator
        .apply_thinking_pattern(registry, &IdeaId(id), pattern)
        .map_err(idea_error)?;
    Ok(Json(idea))
}

async fn connect_ideas(
    State(state): State<AppState>,
    Json(request): Json<ConnectRequest>,
) -> ApiResult<impl IntoResponse> {
    let connection_type = request
        .connection_type
        .unwrap_or_else(|| DEFAULT_CONNECTION_TYPE.to_string());

    let mut workspace = state.workspace.lock().await;
    workspace
        .registry
        .connect(&request.idea1, &request.idea2, &connection_type)
        .map_err(idea_error)?;

    Ok(Json(serde_json::json!({
        "connected": true,
        "idea1": request.idea1,
        "idea2": request.idea2,
        "type": connection_type,
    })))
}

#[derive(Debug, Deserialize)]
struct RankQuery {
    criterion: Option<String>,
}

async fn rank_ideas(
    State(state): State<AppState>,
    Query(query): Query<RankQuery>,
) -> impl IntoResponse {
    let criterion = query
        .criterion
        .as_deref()
        .map(RankCriterion::from_name)
        .unwrap_or_default();

    let workspace = state.workspace.lock().await;
    Json(rank(workspace.registry.iter(), criterion))
}

async fn list_synergies(State(state): State<AppState>) -> impl IntoResponse {
    let workspace = state.workspace.lock().await;
    Json(find_synergies(workspace.registry.iter()))
}

async fn get_roadmap(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let workspace = state.workspace.lock().await;
    let roadmap = generate_roadmap(&workspace.registry, &IdeaId(id)).map_err(idea_error)?;
    Ok(Json(roadmap))
}

#[derive(Debug, Deserialize)]
struct ReportQuery {
    #[serde(default)]
    save: bool,
}

async fn build_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ReportQuery>,
) -> ApiResult<impl IntoResponse> {
    let report = {
        let workspace = state.workspace.lock().await;
        let idea = workspace
            .registry
            .require(&IdeaId(id))
            .map_err(idea_error)?;
        state.reports.build(idea, &evaluate(idea))
    };

    let saved_to = if query.save {
        // File writes stay off the async workers
        let path = tokio::task::spawn_blocking({
            let reports = Arc::clone(&state.reports);
            let report = report.clone();
            let dir = state.report_dir.clone();
            move || reports.save(&report, &dir, None)
        })
        .await
        .map_err(|e| {
            error!("Report save task failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?
        .map_err(|e| {
            error!("Failed to save report: {:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;
        Some(path.display().to_string())
    } else {
        None
    };

    info!(
        "Report for {}: {} recommendations",
        report.idea.id,
        report.recommendations.len()
    );

    Ok(Json(serde_json::json!({
        "report": report,
        "savedTo": saved_to,
    })))
}

async fn get_stats(State(state): State<AppState>) -> impl IntoResponse {
    let workspace = state.workspace.lock().await;
    Json(workspace.registry.snapshot(&workspace.config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_mapping() {
        let (status, body) = idea_error(IdeaError::NotFound {
            id: IdeaId::from("idea_x"),
        });
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "idea not found: idea_x");

        let (status, _) = idea_error(IdeaError::InvalidState {
            state: "done".to_string(),
        });
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = idea_error(IdeaError::UnknownPattern {
            pattern: "lateral".to_string(),
        });
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_workspace_is_shared_between_clones() {
        let state = AppState::new(
            Workspace::new(EngineConfig::default()),
            ChatEngine::new().unwrap(),
            ReportBuilder::new(None),
            PathBuf::from(DEFAULT_REPORT_DIR),
        );
        let other = state.clone();

        state
            .workspace
            .lock()
            .await
            .registry
            .capture("Shared", "creative", 0.5);
        assert_eq!(other.workspace.lock().await.registry.len(), 1);
    }
}
