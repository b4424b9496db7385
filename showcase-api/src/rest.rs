use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use showcase_app::application::filter;
use showcase_app::domain::{IdeaSubmission, ShowcaseStats, StartupIdea};
use showcase_app::AppContext;
use showcase_errors::AppError;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    q: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpvoteResponse {
    pub id: u64,
    pub upvotes: u64,
}

/// JSON routes over the same store the page uses.
pub fn rest_routes<S>(ctx: AppContext) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/ideas", get(list_ideas).post(create_idea))
        .route("/ideas/{id}", get(get_idea))
        .route("/ideas/{id}/upvote", post(upvote_idea))
        .route("/stats", get(stats))
        .layer(Extension(ctx))
}

async fn list_ideas(
    Extension(ctx): Extension<AppContext>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<StartupIdea>>, AppError> {
    ctx.with_store(|store| {
        filter(store.list(), &query.q)
            .into_iter()
            .cloned()
            .collect()
    })
    .map(Json)
}

async fn get_idea(
    Extension(ctx): Extension<AppContext>,
    Path(id): Path<u64>,
) -> Result<Json<StartupIdea>, AppError> {
    ctx.with_store(|store| store.get_by_id(id).cloned())?
        .map(Json)
        .ok_or(AppError::NotFound(id))
}

async fn create_idea(
    Extension(ctx): Extension<AppContext>,
    Json(submission): Json<IdeaSubmission>,
) -> Result<(StatusCode, Json<StartupIdea>), AppError> {
    let idea = ctx.with_store(|store| store.create(submission))??;
    Ok((StatusCode::CREATED, Json(idea)))
}

async fn upvote_idea(
    Extension(ctx): Extension<AppContext>,
    Path(id): Path<u64>,
) -> Result<Json<UpvoteResponse>, AppError> {
    let upvotes = ctx.with_store(|store| store.upvote(id))??;
    Ok(Json(UpvoteResponse { id, upvotes }))
}

async fn stats(Extension(ctx): Extension<AppContext>) -> Result<Json<ShowcaseStats>, AppError> {
    ctx.with_store(|store| store.stats()).map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use showcase_app::application::IdeaStore;
    use showcase_app::infrastructure::storage::FileStorage;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn app(dir: &TempDir) -> Router {
        let storage = FileStorage::open(dir.path()).unwrap();
        rest_routes(AppContext::new(IdeaStore::initialize(storage)))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_list_and_upvote() {
        let dir = TempDir::new().unwrap();
        let app = app(&dir);

        let (status, created) = send(
            &app,
            post_json(
                "/ideas",
                serde_json::json!({
                    "startup_name": "EcoLearn",
                    "founder_name": "Jamie Chen",
                    "description": "Gamified sustainability",
                    "tags_raw": "education, environment, tech"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], 1);
        assert_eq!(created["tags"], serde_json::json!(["education", "environment", "tech"]));

        let (status, body) = send(&app, post_json("/ideas/1/upvote", serde_json::json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["upvotes"], 1);

        let (_, listed) = send(&app, Request::get("/ideas?q=ENVIRON").body(Body::empty()).unwrap()).await;
        assert_eq!(listed.as_array().map(Vec::len), Some(1));

        let (_, listed) = send(&app, Request::get("/ideas?q=fintech").body(Body::empty()).unwrap()).await;
        assert_eq!(listed, serde_json::json!([]));

        let (_, stats) = send(&app, Request::get("/stats").body(Body::empty()).unwrap()).await;
        assert_eq!(stats, serde_json::json!({ "startups": 1, "upvotes": 1 }));
    }

    #[tokio::test]
    async fn test_validation_error_is_bad_request() {
        let dir = TempDir::new().unwrap();
        let app = app(&dir);

        let (status, body) = send(
            &app,
            post_json(
                "/ideas",
                serde_json::json!({
                    "startup_name": "  ",
                    "founder_name": "Jamie Chen",
                    "description": "Gamified sustainability",
                    "tags_raw": "education"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "startup name is required");
    }

    #[tokio::test]
    async fn test_unknown_idea_is_not_found() {
        let dir = TempDir::new().unwrap();
        let app = app(&dir);

        let (status, _) = send(&app, post_json("/ideas/42/upvote", serde_json::json!({}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Request::get("/ideas/42").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
