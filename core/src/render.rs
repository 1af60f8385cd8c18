//! Plain-text rendering of the view-state.

use std::fmt::Write;

use crate::controller::{Notice, Severity};
use crate::state::{Mode, ViewState};

pub const LOADING_TEXT: &str = "Loading posts...";
pub const EMPTY_TEXT: &str = "No posts yet. Create one above!";

/// Full screen for the current state.
pub fn render(state: &ViewState) -> String {
    let mut out = String::new();
    match state.mode() {
        Mode::Loading => out.push_str(LOADING_TEXT),
        Mode::Error(message) => {
            let _ = write!(out, "Error: {message}\nType `retry` to try again.");
        }
        Mode::Ready(posts) => {
            render_form(&mut out, state);
            let _ = writeln!(out);
            let _ = writeln!(out, "== Posts ({}) ==", posts.len());
            if posts.is_empty() {
                out.push_str(EMPTY_TEXT);
            }
            for (i, post) in posts.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                let _ = write!(out, "* {} (ID: {})", post.title, post.id);
                if !post.description.is_empty() {
                    let _ = write!(out, "\n  {}", post.description);
                }
            }
        }
    }
    out
}

fn render_form(out: &mut String, state: &ViewState) {
    match state.editing() {
        Some(post) => {
            let _ = writeln!(out, "== Update post (ID: {}) ==", post.id);
        }
        None => {
            let _ = writeln!(out, "== New post ==");
        }
    }
    let _ = writeln!(out, "title: {}", state.draft.title);
    let _ = writeln!(out, "desc:  {}", state.draft.description);
    if state.is_editing() {
        let _ = writeln!(out, "`submit` to save changes, `cancel` to stop editing");
    } else {
        let _ = writeln!(out, "`submit` to create");
    }
}

pub fn render_notice(notice: &Notice) -> String {
    match notice.severity {
        Severity::Info => format!("[ok] {}", notice.message),
        Severity::Error => format!("[error] {}", notice.message),
    }
}
