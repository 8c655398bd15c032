use serde::Serialize;

use crate::ops::view::{ProjectSummary, SharedRow, TaskRow};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct StatusJson {
    pub projects: Vec<ProjectSummary>,
}

#[derive(Serialize)]
pub struct ProjectListJson {
    pub key: String,
    pub name: String,
    pub tasks: Vec<TaskRow>,
}

#[derive(Serialize)]
pub struct ListJson {
    pub projects: Vec<ProjectListJson>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shared: Vec<SharedRow>,
}

#[derive(Serialize)]
pub struct ToggleJson {
    pub id: String,
    pub checked: bool,
}

#[derive(Serialize)]
pub struct ResetJson {
    /// Project key, or "all"
    pub scope: String,
}
