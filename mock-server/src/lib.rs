//! In-memory stand-in for the posts backend.
//!
//! Serves `/api/posts` and `/api/posts/{id}`. Ids are UUID v4 strings.
//! Errors carry `{"message": "..."}` bodies.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(skip)]
    seq: u64,
}

#[derive(Deserialize)]
pub struct PostInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Default)]
pub struct Store {
    posts: BTreeMap<Uuid, Post>,
    next_seq: u64,
}

pub type Db = Arc<RwLock<Store>>;

type ApiError = (StatusCode, Json<serde_json::Value>);

fn error(status: StatusCode, message: &str) -> ApiError {
    (status, Json(json!({ "message": message })))
}

fn not_found() -> ApiError {
    error(StatusCode::NOT_FOUND, "Post not found")
}

fn validate(input: &PostInput) -> Result<(), ApiError> {
    if input.title.trim().is_empty() {
        return Err(error(StatusCode::BAD_REQUEST, "Title is required"));
    }
    Ok(())
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/api/posts", get(list_posts).post(create_post))
        .route("/api/posts/{id}", put(update_post).delete(delete_post))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Posts in creation order.
async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    let store = db.read().await;
    let mut posts: Vec<Post> = store.posts.values().cloned().collect();
    posts.sort_by_key(|p| p.seq);
    Json(posts)
}

async fn create_post(
    State(db): State<Db>,
    Json(input): Json<PostInput>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    validate(&input)?;
    let mut store = db.write().await;
    store.next_seq += 1;
    let post = Post {
        id: Uuid::new_v4(),
        title: input.title,
        description: input.description,
        seq: store.next_seq,
    };
    store.posts.insert(post.id, post.clone());
    tracing::debug!(id = %post.id, "post created");
    Ok((StatusCode::CREATED, Json(post)))
}

async fn update_post(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<PostInput>,
) -> Result<Json<Post>, ApiError> {
    validate(&input)?;
    let mut store = db.write().await;
    let post = store.posts.get_mut(&id).ok_or_else(not_found)?;
    post.title = input.title;
    post.description = input.description;
    Ok(Json(post.clone()))
}

async fn delete_post(State(db): State<Db>, Path(id): Path<Uuid>) -> Result<StatusCode, ApiError> {
    let mut store = db.write().await;
    store
        .posts
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(not_found)
}
