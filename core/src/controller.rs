//! User actions mapped onto API calls and view-state updates.
//!
//! # Design
//! `PostsController` owns the `ViewState` for one session. Every action runs
//! its request to completion before returning, so state is mutated by at most
//! one action at a time. Actions report what the user should be told through
//! a returned `Notice` instead of writing anywhere themselves.
//!
//! Delete is two-phase: a successful call removes the post locally without a
//! refetch; a failed call is compensated by a full refetch rather than by
//! undoing anything locally.

use thiserror::Error;
use tracing::{info, warn};

use crate::api::PostsApi;
use crate::http::Transport;
use crate::state::ViewState;
use crate::types::PostId;

/// Asks the user to approve a destructive action.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Client-side rejection raised before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title must not be empty")]
    EmptyTitle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

pub struct PostsController<T, C> {
    api: PostsApi<T>,
    confirm: C,
    state: ViewState,
}

impl<T: Transport, C: Confirm> PostsController<T, C> {
    /// Creates the controller in the `Loading` state. Call `mount` to fetch.
    pub fn new(api: PostsApi<T>, confirm: C) -> Self {
        Self {
            api,
            confirm,
            state: ViewState::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Initial fetch.
    pub fn mount(&mut self) {
        self.fetch();
    }

    /// Manual reload of the list.
    pub fn refresh(&mut self) {
        self.fetch();
    }

    /// Repeats the fetch after a failed one. Does nothing otherwise.
    pub fn retry(&mut self) {
        if self.state.error().is_some() {
            self.fetch();
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.state.draft.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.state.draft.description = description.into();
    }

    /// Creates a post from the draft, or updates the post being edited.
    pub fn submit(&mut self) -> Notice {
        let Some(input) = self.state.draft.to_input() else {
            return Notice::error(ValidationError::EmptyTitle.to_string());
        };

        let target = self.state.editing().map(|post| post.id.clone());
        let (result, action) = match &target {
            Some(id) => (self.api.update(id, &input), "update"),
            None => (self.api.create(&input).map(|_| ()), "create"),
        };

        match result {
            Ok(()) => {
                info!(action, title = %input.title, "post saved");
                self.state.reset_form();
                self.fetch();
                if target.is_some() {
                    Notice::info("Post updated")
                } else {
                    Notice::info("Post created")
                }
            }
            Err(err) => {
                warn!(action, error = %err, "submit failed");
                Notice::error(format!("Failed to {action} post: {}", err.user_message()))
            }
        }
    }

    /// Loads a listed post into the draft and enters edit mode.
    pub fn start_edit(&mut self, id: &PostId) -> Option<Notice> {
        match self.state.find(id).cloned() {
            Some(post) => {
                self.state.start_edit(post);
                None
            }
            None => Some(Notice::error(format!("No post with ID {id} in the list"))),
        }
    }

    pub fn cancel_edit(&mut self) {
        self.state.reset_form();
    }

    /// Deletes after confirmation. `None` when the user declined.
    pub fn delete(&mut self, id: &PostId) -> Option<Notice> {
        let prompt = format!("Are you sure you want to delete post ID {id}?");
        if !self.confirm.confirm(&prompt) {
            return None;
        }

        match self.api.delete(id) {
            Ok(()) => {
                info!(%id, "post deleted");
                self.state.remove(id);
                Some(Notice::info("Post deleted"))
            }
            Err(err) => {
                warn!(%id, error = %err, "delete failed, reloading list");
                let notice = Notice::error(format!("Failed to delete post: {}", err.user_message()));
                self.fetch();
                Some(notice)
            }
        }
    }

    fn fetch(&mut self) {
        self.state.begin_fetch();
        match self.api.list_all() {
            Ok(posts) => self.state.fetch_succeeded(posts),
            Err(err) => {
                warn!(error = %err, "failed to load posts");
                self.state.fetch_failed(err.user_message());
            }
        }
    }
}
