//! In-memory implementation of the tasks REST contract.
//!
//! Backs local development and the integration tests. State lives in a
//! plain vector so list order is insertion order, and ids come from an
//! ascending counter the way the real backend assigns them. Timestamps are
//! server-owned: set on create, `updated_at` bumped on every update.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use chrono::Utc;
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::cors::CorsLayer;

use shared_types::Task;

#[derive(Debug, Default)]
pub struct Store {
    next_id: i64,
    tasks: Vec<Task>,
}

pub type Db = Arc<RwLock<Store>>;

/// Build the router with a fresh, empty store. The permissive CORS layer
/// lets the dev client call from another origin.
pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route("/api/tasks/{id}", put(update_task).delete(delete_task))
        .layer(CorsLayer::permissive())
        .with_state(db)
}

/// Serve the API on the given listener until the process exits.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_tasks(State(db): State<Db>) -> Json<Vec<Task>> {
    let store = db.read().await;
    Json(store.tasks.clone())
}

async fn create_task(
    State(db): State<Db>,
    Json(input): Json<Task>,
) -> Result<(StatusCode, Json<Task>), StatusCode> {
    if input.title.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let mut store = db.write().await;
    store.next_id += 1;
    let now = Utc::now();
    let task = Task {
        id: Some(store.next_id),
        created_at: Some(now),
        updated_at: Some(now),
        ..input
    };
    tracing::debug!(id = store.next_id, "task created");
    store.tasks.push(task.clone());
    Ok((StatusCode::CREATED, Json(task)))
}

async fn update_task(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<Task>,
) -> Result<Json<Task>, StatusCode> {
    let mut store = db.write().await;
    let slot = store
        .tasks
        .iter_mut()
        .find(|t| t.id == Some(id))
        .ok_or(StatusCode::NOT_FOUND)?;
    // Full replace, except the stored identity and creation time win over
    // whatever the payload carried.
    let updated = Task {
        id: Some(id),
        created_at: slot.created_at,
        updated_at: Some(Utc::now()),
        ..input
    };
    *slot = updated.clone();
    tracing::debug!(id, "task updated");
    Ok(Json(updated))
}

async fn delete_task(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    let before = store.tasks.len();
    store.tasks.retain(|t| t.id != Some(id));
    if store.tasks.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    tracing::debug!(id, "task deleted");
    Ok(StatusCode::NO_CONTENT)
}
