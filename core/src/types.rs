//! Domain DTOs for the posts API.
//!
//! # Design
//! The backend owns the schema. `Post` is received verbatim and never
//! mutated by the client; `PostInput` is the only payload the client sends.
//! These types are defined independently from the mock-server crate, and the
//! integration tests catch any schema drift between the two.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Server-assigned post identifier.
///
/// Opaque to the client. Backends disagree on whether ids are numbers or
/// strings, so both JSON forms are accepted and kept in their textual form.
/// The value is echoed back unchanged in request paths and in the view.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl Serialize for PostId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PostId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => PostId(s),
            Raw::Number(n) => PostId(n.to_string()),
        })
    }
}

/// A single post returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    #[serde(alias = "idPost")]
    pub id: PostId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

/// Missing and `null` descriptions both read as empty.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Request payload for both create and update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Client-side edit buffer. Never sent as-is; `submit` turns it into a
/// `PostInput` after validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub description: String,
}

impl Draft {
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            description: post.description.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty()
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
    }

    /// Payload for create/update, or `None` when the title is blank.
    ///
    /// Both fields are trimmed.
    pub fn to_input(&self) -> Option<PostInput> {
        let title = self.title.trim();
        if title.is_empty() {
            return None;
        }
        Some(PostInput {
            title: title.to_string(),
            description: self.description.trim().to_string(),
        })
    }
}
