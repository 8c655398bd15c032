use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single checklist task owned by one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id across the whole catalog (used as the persistence key)
    pub id: String,
    /// Display text
    pub text: String,
    /// Phase label for grouping in the detail view (e.g. "Foundation")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    /// Suggested day number within the launch plan
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
}

impl Task {
    pub fn new(id: &str, text: &str) -> Self {
        Task {
            id: id.to_string(),
            text: text.to_string(),
            phase: None,
            day: None,
        }
    }

    pub fn with_phase(mut self, phase: &str) -> Self {
        self.phase = Some(phase.to_string());
        self
    }

    pub fn with_day(mut self, day: u32) -> Self {
        self.day = Some(day);
        self
    }
}

/// A task that applies to several projects at once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedTask {
    pub id: String,
    pub text: String,
    /// Keys of the projects this task applies to (display order)
    pub projects: Vec<String>,
}

impl SharedTask {
    pub fn new(id: &str, text: &str, projects: &[&str]) -> Self {
        SharedTask {
            id: id.to_string(),
            text: text.to_string(),
            projects: projects.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Whether this task applies to the given project key
    pub fn applies_to(&self, key: &str) -> bool {
        self.projects.iter().any(|p| p == key)
    }
}

/// A project and its ordered tasks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub key: String,
    pub name: String,
    /// Hex color like "#44DDFF", advisory only
    pub color: String,
    pub tasks: Vec<Task>,
}

/// The immutable catalog of all projects and shared tasks.
///
/// Constructed once at startup (see [`Catalog::builtin`]); never mutated.
/// Project iteration order is display order.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: IndexMap<String, Project>,
    shared: Vec<SharedTask>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>, shared: Vec<SharedTask>) -> Self {
        let projects = projects
            .into_iter()
            .map(|p| (p.key.clone(), p))
            .collect::<IndexMap<_, _>>();
        Catalog { projects, shared }
    }

    /// All projects in display order
    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.values()
    }

    /// Look up a project by key
    pub fn project(&self, key: &str) -> Option<&Project> {
        self.projects.get(key)
    }

    /// Whether the key names a project in this catalog
    pub fn contains(&self, key: &str) -> bool {
        self.projects.contains_key(key)
    }

    /// All shared tasks, in catalog order
    pub fn shared(&self) -> &[SharedTask] {
        &self.shared
    }

    /// Shared tasks that apply to the given project key
    pub fn shared_for(&self, key: &str) -> Vec<&SharedTask> {
        self.shared.iter().filter(|s| s.applies_to(key)).collect()
    }

    /// The full set of valid task ids (owned and shared)
    pub fn task_ids(&self) -> HashSet<&str> {
        let mut ids: HashSet<&str> = self
            .projects
            .values()
            .flat_map(|p| p.tasks.iter().map(|t| t.id.as_str()))
            .collect();
        ids.extend(self.shared.iter().map(|s| s.id.as_str()));
        ids
    }

    /// Resolve project keys to display names, skipping unknown keys
    pub fn project_names(&self, keys: &[String]) -> Vec<String> {
        keys.iter()
            .filter_map(|k| self.projects.get(k).map(|p| p.name.clone()))
            .collect()
    }
}
