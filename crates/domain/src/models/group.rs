//! Student group models.

use serde::{Deserialize, Serialize};

/// A university student group such as `Б-101`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentGroup {
    pub id: i32,
    pub name: String,
}

/// Response for listing groups.
#[derive(Debug, Clone, Serialize)]
pub struct ListGroupsResponse {
    pub groups: Vec<String>,
}
