use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Post};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

const MISSING: &str = "/api/posts/00000000-0000-0000-0000-000000000000";

// --- list ---

#[tokio::test]
async fn list_posts_empty() {
    let resp = app().oneshot(empty_request("GET", "/api/posts")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let posts: Vec<Post> = body_json(resp).await;
    assert!(posts.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_post_returns_201() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/posts",
            r#"{"title":"Hello","description":"First post"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let post: Post = body_json(resp).await;
    assert_eq!(post.title, "Hello");
    assert_eq!(post.description, "First post");
}

#[tokio::test]
async fn create_post_blank_title_returns_400_with_message() {
    let resp = app()
        .oneshot(json_request("POST", "/api/posts", r#"{"title":"   "}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["message"], "Title is required");
}

#[tokio::test]
async fn create_post_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/api/posts", r#"{"not_title":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- update ---

#[tokio::test]
async fn update_post_not_found_has_message() {
    let resp = app()
        .oneshot(json_request("PUT", MISSING, r#"{"title":"Nope"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["message"], "Post not found");
}

#[tokio::test]
async fn update_post_bad_uuid_returns_400() {
    let resp = app()
        .oneshot(json_request("PUT", "/api/posts/not-a-uuid", r#"{"title":"X"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- delete ---

#[tokio::test]
async fn delete_post_not_found() {
    let resp = app().oneshot(empty_request("DELETE", MISSING)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create two, to check ordering
    let mut ids = Vec::new();
    for title in ["One", "Two"] {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(json_request(
                "POST",
                "/api/posts",
                &format!(r#"{{"title":"{title}"}}"#),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Post = body_json(resp).await;
        assert_eq!(created.description, "");
        ids.push(created.id);
    }

    // list keeps creation order
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/api/posts"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let posts: Vec<Post> = body_json(resp).await;
    let listed: Vec<_> = posts.iter().map(|p| p.id).collect();
    assert_eq!(listed, ids);

    // update replaces both fields
    let id = ids[0];
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/api/posts/{id}"),
            r#"{"title":"One v2","description":"edited"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Post = body_json(resp).await;
    assert_eq!(updated.id, id);
    assert_eq!(updated.title, "One v2");
    assert_eq!(updated.description, "edited");

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", &format!("/api/posts/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());

    // second delete is a 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", &format!("/api/posts/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list after delete — only the second post
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/api/posts"))
        .await
        .unwrap();
    let posts: Vec<Post> = body_json(resp).await;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "Two");
}
