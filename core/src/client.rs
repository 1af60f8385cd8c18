//! Stateless HTTP request builder and response parser for the posts API.
//!
//! # Design
//! `PostClient` holds only a `base_url` and carries no mutable state between
//! calls. Each CRUD operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The round-trip itself belongs to a `Transport`, keeping this layer
//! deterministic and free of I/O.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Post, PostId, PostInput};

/// Synchronous, stateless client for the posts API.
#[derive(Debug, Clone)]
pub struct PostClient {
    base_url: String,
}

impl PostClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    fn item_url(&self, id: &PostId) -> String {
        format!("{}/posts/{id}", self.base_url)
    }

    pub fn build_list_posts(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_post(&self, input: &PostInput) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.collection_url(),
            headers: json_headers(),
            body: Some(encode(input)?),
        })
    }

    pub fn build_update_post(&self, id: &PostId, input: &PostInput) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.item_url(id),
            headers: json_headers(),
            body: Some(encode(input)?),
        })
    }

    pub fn build_delete_post(&self, id: &PostId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_posts(&self, response: HttpResponse) -> Result<Vec<Post>, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    /// The created post, or `None` when the body is not a post.
    ///
    /// Success is decided by the status alone: the record already exists on
    /// the server whatever the body says.
    pub fn parse_create_post(&self, response: HttpResponse) -> Result<Option<Post>, ApiError> {
        check_status(&response)?;
        Ok(decode_echo(&response.body))
    }

    /// The updated post, or `None` when the body is not a post.
    pub fn parse_update_post(&self, response: HttpResponse) -> Result<Option<Post>, ApiError> {
        check_status(&response)?;
        Ok(decode_echo(&response.body))
    }

    pub fn parse_delete_post(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn encode(input: &PostInput) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

fn decode_echo(body: &str) -> Option<Post> {
    if body.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(body) {
        Ok(post) => Some(post),
        Err(err) => {
            debug!(error = %err, "2xx body is not a post, ignoring it");
            None
        }
    }
}

/// Any 2xx is success; everything else becomes `ApiError::Server`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::from_response(response))
}
