//! View-model builders: pure projections from (catalog, store) to the
//! structures the TUI and the JSON CLI output render. No I/O happens
//! here; every call recomputes from current state.

use indexmap::IndexMap;
use serde::Serialize;

use crate::io::store::Store;
use crate::model::Catalog;

/// One checkbox row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    pub checked: bool,
}

/// Selection-screen entry for one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    pub key: String,
    pub name: String,
    pub color: String,
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
}

/// A detail-screen group of rows sharing a phase label. `label: None`
/// holds the project's unphased tasks, kept at their catalog position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub rows: Vec<TaskRow>,
}

/// A shared task row, annotated with the display names of every project
/// it applies to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharedRow {
    pub id: String,
    pub label: String,
    pub checked: bool,
    pub projects: Vec<String>,
}

/// Everything the detail screen shows for one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDetail {
    pub key: String,
    pub name: String,
    pub color: String,
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
    pub phases: Vec<PhaseGroup>,
    pub shared: Vec<SharedRow>,
}

impl ProjectDetail {
    /// Ids of every toggleable row in display order (phase groups first,
    /// then shared tasks) — the TUI cursor walks this list.
    pub fn toggle_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .phases
            .iter()
            .flat_map(|g| g.rows.iter().map(|r| r.id.as_str()))
            .collect();
        ids.extend(self.shared.iter().map(|r| r.id.as_str()));
        ids
    }
}

/// Progress as a whole percentage. Zero-task projects are 0%, not a
/// division error; otherwise nearest-integer rounding.
pub fn percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((100 * completed + total / 2) / total) as u8
}

/// Flat mode: one project's tasks zipped against completion state, in
/// catalog order. No grouping.
pub fn flat_rows(catalog: &Catalog, store: &Store, key: &str) -> Vec<TaskRow> {
    let Some(project) = catalog.project(key) else {
        return Vec::new();
    };
    project
        .tasks
        .iter()
        .map(|t| TaskRow {
            id: t.id.clone(),
            label: t.text.clone(),
            day: t.day,
            checked: store.is_complete(&t.id),
        })
        .collect()
}

/// Selection screen: per-project completion summaries in catalog order
pub fn project_summaries(catalog: &Catalog, store: &Store) -> Vec<ProjectSummary> {
    catalog
        .projects()
        .map(|p| {
            let total = p.tasks.len();
            let completed = p.tasks.iter().filter(|t| store.is_complete(&t.id)).count();
            ProjectSummary {
                key: p.key.clone(),
                name: p.name.clone(),
                color: p.color.clone(),
                completed,
                total,
                percent: percent(completed, total),
            }
        })
        .collect()
}

/// Detail screen for one project: tasks grouped by phase (first-seen
/// order), shared tasks that apply to the project, and overall progress
/// over the project's own tasks. Returns None for an unknown key.
pub fn project_detail(catalog: &Catalog, store: &Store, key: &str) -> Option<ProjectDetail> {
    let project = catalog.project(key)?;

    let mut groups: IndexMap<Option<String>, Vec<TaskRow>> = IndexMap::new();
    for task in &project.tasks {
        groups.entry(task.phase.clone()).or_default().push(TaskRow {
            id: task.id.clone(),
            label: task.text.clone(),
            day: task.day,
            checked: store.is_complete(&task.id),
        });
    }
    let phases: Vec<PhaseGroup> = groups
        .into_iter()
        .map(|(label, rows)| PhaseGroup { label, rows })
        .collect();

    let shared: Vec<SharedRow> = catalog
        .shared_for(key)
        .into_iter()
        .map(|s| SharedRow {
            id: s.id.clone(),
            label: s.text.clone(),
            checked: store.is_complete(&s.id),
            projects: catalog.project_names(&s.projects),
        })
        .collect();

    let total = project.tasks.len();
    let completed = project
        .tasks
        .iter()
        .filter(|t| store.is_complete(&t.id))
        .count();

    Some(ProjectDetail {
        key: project.key.clone(),
        name: project.name.clone(),
        color: project.color.clone(),
        completed,
        total,
        percent: percent(completed, total),
        phases,
        shared,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Project, SharedTask, Task};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    /// Small fixture: p1 with t1/t2 in phase A, t3 in
    /// phase B, plus an empty project and a shared task.
    fn scenario_catalog() -> Catalog {
        Catalog::new(
            vec![
                Project {
                    key: "p1".into(),
                    name: "First".into(),
                    color: "#FB4196".into(),
                    tasks: vec![
                        Task::new("t1", "task one").with_phase("A"),
                        Task::new("t2", "task two").with_phase("A"),
                        Task::new("t3", "task three").with_phase("B"),
                    ],
                },
                Project {
                    key: "empty".into(),
                    name: "Empty".into(),
                    color: "#444444".into(),
                    tasks: vec![],
                },
            ],
            vec![SharedTask::new("s1", "shared task", &["p1", "empty"])],
        )
    }

    #[test]
    fn percent_is_rounded_and_guards_zero() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(0, 3), 0);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(3, 3), 100);
        assert_eq!(percent(1, 2), 50);
    }

    #[test]
    fn summaries_track_toggles() {
        let tmp = TempDir::new().unwrap();
        let catalog = scenario_catalog();
        let mut store = Store::load(tmp.path());

        let summaries = project_summaries(&catalog, &store);
        assert_eq!(summaries[0].completed, 0);
        assert_eq!(summaries[0].total, 3);
        assert_eq!(summaries[0].percent, 0);

        store.toggle("t1").unwrap();
        let summaries = project_summaries(&catalog, &store);
        assert_eq!(summaries[0].completed, 1);
        assert_eq!(summaries[0].percent, 33);

        store.toggle("t1").unwrap();
        let summaries = project_summaries(&catalog, &store);
        assert_eq!(summaries[0].completed, 0);
        assert_eq!(summaries[0].percent, 0);
    }

    #[test]
    fn empty_project_is_zero_of_zero() {
        let tmp = TempDir::new().unwrap();
        let catalog = scenario_catalog();
        let store = Store::load(tmp.path());

        let summaries = project_summaries(&catalog, &store);
        let empty = summaries.iter().find(|s| s.key == "empty").unwrap();
        assert_eq!((empty.completed, empty.total, empty.percent), (0, 0, 0));

        let detail = project_detail(&catalog, &store, "empty").unwrap();
        assert_eq!(detail.percent, 0);
        assert!(detail.phases.is_empty());
        assert_eq!(detail.shared.len(), 1);
    }

    #[test]
    fn detail_groups_by_phase_in_first_seen_order() {
        let tmp = TempDir::new().unwrap();
        let catalog = scenario_catalog();
        let mut store = Store::load(tmp.path());
        store.toggle("t1").unwrap();

        let detail = project_detail(&catalog, &store, "p1").unwrap();
        assert_eq!(detail.completed, 1);
        assert_eq!(detail.total, 3);
        assert_eq!(detail.percent, 33);

        let labels: Vec<Option<&str>> =
            detail.phases.iter().map(|g| g.label.as_deref()).collect();
        assert_eq!(labels, vec![Some("A"), Some("B")]);
        assert_eq!(detail.phases[0].rows.len(), 2);
        assert!(detail.phases[0].rows[0].checked);
        assert!(!detail.phases[0].rows[1].checked);
        assert!(!detail.phases[1].rows[0].checked);
    }

    #[test]
    fn unphased_tasks_keep_catalog_position() {
        let tmp = TempDir::new().unwrap();
        let catalog = Catalog::new(
            vec![Project {
                key: "p".into(),
                name: "P".into(),
                color: "#FFFFFF".into(),
                tasks: vec![
                    Task::new("a", "first").with_phase("X"),
                    Task::new("b", "loose"),
                    Task::new("c", "also loose"),
                    Task::new("d", "last").with_phase("Y"),
                ],
            }],
            vec![],
        );
        let store = Store::load(tmp.path());

        let detail = project_detail(&catalog, &store, "p").unwrap();
        let labels: Vec<Option<&str>> =
            detail.phases.iter().map(|g| g.label.as_deref()).collect();
        assert_eq!(labels, vec![Some("X"), None, Some("Y")]);
        let loose: Vec<&str> = detail.phases[1].rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(loose, vec!["b", "c"]);
    }

    #[test]
    fn shared_rows_carry_project_names() {
        let tmp = TempDir::new().unwrap();
        let catalog = scenario_catalog();
        let mut store = Store::load(tmp.path());
        store.toggle("s1").unwrap();

        let detail = project_detail(&catalog, &store, "p1").unwrap();
        assert_eq!(detail.shared.len(), 1);
        assert!(detail.shared[0].checked);
        assert_eq!(detail.shared[0].projects, vec!["First", "Empty"]);
        // Shared completion does not move the project's own counts
        assert_eq!(detail.completed, 0);
    }

    #[test]
    fn stale_state_ids_do_not_affect_rendering() {
        let tmp = TempDir::new().unwrap();
        let catalog = scenario_catalog();
        let mut store = Store::load(tmp.path());
        store.toggle("ghost-from-old-catalog").unwrap();

        let summaries = project_summaries(&catalog, &store);
        assert!(summaries.iter().all(|s| s.completed == 0));
        let detail = project_detail(&catalog, &store, "p1").unwrap();
        assert_eq!(detail.completed, 0);
        assert!(detail.phases.iter().all(|g| g.rows.iter().all(|r| !r.checked)));
    }

    #[test]
    fn flat_rows_are_a_plain_projection() {
        let tmp = TempDir::new().unwrap();
        let catalog = scenario_catalog();
        let mut store = Store::load(tmp.path());
        store.toggle("t2").unwrap();

        let rows = flat_rows(&catalog, &store, "p1");
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t2", "t3"]);
        assert!(!rows[0].checked);
        assert!(rows[1].checked);

        assert!(flat_rows(&catalog, &store, "nope").is_empty());
    }

    #[test]
    fn toggle_ids_walk_phases_then_shared() {
        let tmp = TempDir::new().unwrap();
        let catalog = scenario_catalog();
        let store = Store::load(tmp.path());

        let detail = project_detail(&catalog, &store, "p1").unwrap();
        assert_eq!(detail.toggle_ids(), vec!["t1", "t2", "t3", "s1"]);
    }

    #[test]
    fn counts_stay_consistent_on_the_builtin_catalog() {
        let tmp = TempDir::new().unwrap();
        let catalog = Catalog::builtin();
        let mut store = Store::load(tmp.path());

        // Complete every other task across the whole catalog
        for (i, id) in catalog.task_ids().into_iter().enumerate() {
            if i % 2 == 0 {
                let id = id.to_string();
                store.toggle(&id).unwrap();
            }
        }

        for summary in project_summaries(&catalog, &store) {
            assert!(summary.completed <= summary.total, "{}", summary.key);
            if summary.completed == summary.total && summary.total > 0 {
                assert_eq!(summary.percent, 100);
            }
            let detail = project_detail(&catalog, &store, &summary.key).unwrap();
            assert_eq!(detail.completed, summary.completed);
            assert_eq!(detail.total, summary.total);
            let grouped: usize = detail.phases.iter().map(|g| g.rows.len()).sum();
            assert_eq!(grouped, summary.total, "no task dropped by grouping");
        }
    }
}
