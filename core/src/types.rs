//! Domain DTOs for the comments API.
//!
//! # Design
//! `Comment` mirrors one element of the `/comments` JSON array. The
//! mock-server crate defines its own copy of the schema; integration tests
//! catch drift between the two. Unknown fields are ignored on decode.

use serde::{Deserialize, Serialize};

/// A single comment returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub post_id: u64,
    pub id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}
