//! Client core for a posts CRUD service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), runs them through an injected
//! `Transport`, and keeps the view-state of one interactive session.
//!
//! # Design
//! - `PostClient` is stateless: it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit. `PostsApi` joins the two halves through a
//!   `Transport`.
//! - `PostsController` owns the `ViewState` and maps user actions onto API
//!   calls. Delete confirmation comes from an injected `Confirm`.
//! - `render` derives the text view from the state.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod render;
pub mod state;
pub mod types;

pub use api::PostsApi;
pub use client::PostClient;
pub use controller::{Confirm, Notice, PostsController, Severity, ValidationError};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use state::{Mode, ViewState};
pub use types::{Draft, Post, PostId, PostInput};
