use std::path::PathBuf;

use unicode_width::UnicodeWidthStr;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::store::{self, Store};
use crate::model::Catalog;
use crate::ops::view;

/// Resolve the data directory from the -C flag, defaulting to ~/.playbook
pub fn data_dir(dir_flag: Option<&str>) -> PathBuf {
    match dir_flag {
        Some(dir) => PathBuf::from(dir),
        None => store::default_dir(),
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let dir = data_dir(cli.dir.as_deref());
    let catalog = Catalog::builtin();
    let store = Store::load(&dir);

    match cli.command {
        None => {
            // No subcommand launches the TUI; handled in main.rs
            Ok(())
        }
        Some(Commands::Status) => cmd_status(&catalog, &store, json),
        Some(Commands::List(args)) => cmd_list(args, &catalog, &store, json),
        Some(Commands::Toggle(args)) => cmd_toggle(args, &catalog, store, json),
        Some(Commands::Reset(args)) => cmd_reset(args, &catalog, store, json),
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_status(
    catalog: &Catalog,
    store: &Store,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let summaries = view::project_summaries(catalog, store);

    if json {
        let output = StatusJson {
            projects: summaries,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let name_width = summaries
        .iter()
        .map(|s| UnicodeWidthStr::width(s.name.as_str()))
        .max()
        .unwrap_or(0);
    for s in &summaries {
        let pad = name_width - UnicodeWidthStr::width(s.name.as_str());
        println!(
            "{}{}  {}/{}  {:>3}%",
            s.name,
            " ".repeat(pad),
            s.completed,
            s.total,
            s.percent
        );
    }
    Ok(())
}

fn cmd_list(
    args: ListArgs,
    catalog: &Catalog,
    store: &Store,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let keys: Vec<String> = match &args.project {
        Some(key) => {
            if !catalog.contains(key) {
                return Err(format!("unknown project: {}", key).into());
            }
            vec![key.clone()]
        }
        None => catalog.projects().map(|p| p.key.clone()).collect(),
    };

    let projects: Vec<ProjectListJson> = keys
        .iter()
        .map(|key| {
            // Keys came from the catalog, so the lookup cannot miss
            let name = catalog.project(key).map(|p| p.name.clone()).unwrap_or_default();
            ProjectListJson {
                key: key.clone(),
                name,
                tasks: view::flat_rows(catalog, store, key),
            }
        })
        .collect();

    // For a single project, only the shared tasks that apply to it
    let shared: Vec<_> = match &args.project {
        Some(key) => view::project_detail(catalog, store, key)
            .map(|d| d.shared)
            .unwrap_or_default(),
        None => catalog
            .shared()
            .iter()
            .map(|s| view::SharedRow {
                id: s.id.clone(),
                label: s.text.clone(),
                checked: store.is_complete(&s.id),
                projects: catalog.project_names(&s.projects),
            })
            .collect(),
    };

    if json {
        let output = ListJson { projects, shared };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for (i, p) in projects.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("# {}", p.name);
        for row in &p.tasks {
            println!("{} {}  {}", checkbox(row.checked), row.id, row.label);
        }
    }
    if !shared.is_empty() {
        if !projects.is_empty() {
            println!();
        }
        println!("# Shared Tasks");
        for row in &shared {
            println!(
                "{} {}  {}  ({})",
                checkbox(row.checked),
                row.id,
                row.label,
                row.projects.join(", ")
            );
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_toggle(
    args: ToggleArgs,
    catalog: &Catalog,
    mut store: Store,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !catalog.task_ids().contains(args.id.as_str()) {
        return Err(format!("unknown task id: {}", args.id).into());
    }
    let checked = store.toggle(&args.id)?;

    if json {
        let output = ToggleJson {
            id: args.id.clone(),
            checked,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{} {}", checkbox(checked), args.id);
    }
    Ok(())
}

fn cmd_reset(
    args: ResetArgs,
    catalog: &Catalog,
    mut store: Store,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let scope = match &args.project {
        Some(key) => {
            let project = catalog
                .project(key)
                .ok_or_else(|| format!("unknown project: {}", key))?;
            store.reset(Some(project))?;
            key.clone()
        }
        None => {
            store.reset(None)?;
            "all".to_string()
        }
    };

    if json {
        let output = ResetJson { scope };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("reset {}", scope);
    }
    Ok(())
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}
