use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tempfile::NamedTempFile;

/// Self-documenting header written at the top of a new diagnostics log.
const FILE_HEADER: &str = "\
<!-- playbook diagnostics log — append-only
     This file captures state that playbook couldn't load or save normally.
     If checkbox progress went missing, the old data is recorded here.
     Safe to delete if empty or stale. -->

---
";

/// Category of a diagnostics entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// The persisted state blob failed to deserialize
    Parse,
    /// A state write failed
    Write,
    /// Legacy state was migrated to the current schema
    Migrate,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Parse => write!(f, "parse"),
            Category::Write => write!(f, "write"),
            Category::Migrate => write!(f, "migrate"),
        }
    }
}

/// A single entry in the diagnostics log.
#[derive(Debug, Clone)]
pub struct Entry {
    pub timestamp: DateTime<Utc>,
    pub category: Category,
    pub description: String,
    pub fields: Vec<(String, String)>,
    /// Raw payload (e.g. the blob that failed to parse)
    pub body: String,
}

impl Entry {
    pub fn new(category: Category, description: &str) -> Self {
        Entry {
            timestamp: Utc::now(),
            category,
            description: description.to_string(),
            fields: Vec::new(),
            body: String::new(),
        }
    }

    pub fn field(mut self, key: &str, value: &str) -> Self {
        self.fields.push((key.to_string(), value.to_string()));
        self
    }

    pub fn body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    /// Format this entry as a markdown block for the log.
    fn to_markdown(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "## {} [{}] {}\n",
            self.timestamp
                .to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            self.category,
            self.description,
        ));
        out.push('\n');

        for (key, value) in &self.fields {
            out.push_str(&format!("{}: {}\n", key, value));
        }

        if !self.body.is_empty() {
            out.push('\n');
            out.push_str("```text\n");
            out.push_str(&self.body);
            if !self.body.ends_with('\n') {
                out.push('\n');
            }
            out.push_str("```\n");
        }

        out.push('\n');
        out.push_str("---\n");
        out
    }
}

/// Return the path to the diagnostics log file.
pub fn log_path(dir: &Path) -> PathBuf {
    dir.join("diagnostics.log")
}

/// Append an entry to the log. Errors are swallowed and printed to stderr,
/// since diagnostics must never make a failing operation fail harder.
pub fn log_event(dir: &Path, entry: Entry) {
    if let Err(e) = log_event_inner(dir, entry) {
        eprintln!("warning: could not write to diagnostics log: {}", e);
    }
}

fn log_event_inner(dir: &Path, entry: Entry) -> io::Result<()> {
    std::fs::create_dir_all(dir)?;
    let path = log_path(dir);

    let needs_header = !path.exists() || std::fs::metadata(&path).map_or(true, |m| m.len() == 0);

    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    if needs_header {
        file.write_all(FILE_HEADER.as_bytes())?;
    }
    file.write_all(entry.to_markdown().as_bytes())?;
    Ok(())
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
