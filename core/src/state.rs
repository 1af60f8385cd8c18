//! View-state for one posts session.
//!
//! The list is only ever replaced wholesale with a fetch result, except for
//! the optimistic removal after a successful delete.

use crate::types::{Draft, Post, PostId};

/// Which main view is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode<'a> {
    Loading,
    Error(&'a str),
    Ready(&'a [Post]),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    posts: Vec<Post>,
    loading: bool,
    error: Option<String>,
    pub draft: Draft,
    editing: Option<Post>,
}

impl ViewState {
    /// State right after mount: loading, nothing fetched yet.
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> Mode<'_> {
        if self.loading {
            Mode::Loading
        } else if let Some(message) = &self.error {
            Mode::Error(message)
        } else {
            Mode::Ready(&self.posts)
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn find(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|post| &post.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// The post captured when editing started.
    pub fn editing(&self) -> Option<&Post> {
        self.editing.as_ref()
    }

    pub(crate) fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub(crate) fn fetch_succeeded(&mut self, posts: Vec<Post>) {
        self.posts = posts;
        self.loading = false;
    }

    pub(crate) fn fetch_failed(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }

    pub(crate) fn start_edit(&mut self, post: Post) {
        self.draft = Draft::from_post(&post);
        self.editing = Some(post);
    }

    /// Clears the draft and leaves edit mode.
    pub(crate) fn reset_form(&mut self) {
        self.draft.clear();
        self.editing = None;
    }

    pub(crate) fn remove(&mut self, id: &PostId) {
        self.posts.retain(|post| &post.id != id);
    }
}
