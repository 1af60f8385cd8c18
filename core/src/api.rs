//! The four posts operations, executed through a `Transport`.

use tracing::{debug, warn};

use crate::client::PostClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::{Post, PostId, PostInput};

/// `PostClient` paired with the transport that runs its requests.
///
/// Holds no state of its own beyond the base URL.
#[derive(Debug, Clone)]
pub struct PostsApi<T> {
    client: PostClient,
    transport: T,
}

impl<T: Transport> PostsApi<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: PostClient::new(base_url),
            transport,
        }
    }

    pub fn list_all(&self) -> Result<Vec<Post>, ApiError> {
        let response = self.send(self.client.build_list_posts())?;
        self.client.parse_list_posts(response)
    }

    /// Does not validate `input`; callers check the title first.
    pub fn create(&self, input: &PostInput) -> Result<Option<Post>, ApiError> {
        let response = self.send(self.client.build_create_post(input)?)?;
        self.client.parse_create_post(response)
    }

    pub fn update(&self, id: &PostId, input: &PostInput) -> Result<(), ApiError> {
        let response = self.send(self.client.build_update_post(id, input)?)?;
        self.client.parse_update_post(response).map(|_| ())
    }

    pub fn delete(&self, id: &PostId) -> Result<(), ApiError> {
        let response = self.send(self.client.build_delete_post(id))?;
        self.client.parse_delete_post(response)
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = %request.method, url = %request.path, "sending request");
        match self.transport.execute(&request) {
            Ok(response) => {
                debug!(status = response.status, "received response");
                Ok(response)
            }
            Err(err) => {
                warn!(method = %request.method, url = %request.path, error = %err, "transport failure");
                Err(err.into())
            }
        }
    }
}
