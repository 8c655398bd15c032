use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pb", about = concat!("[x] playbook v", env!("CARGO_PKG_VERSION"), " - your launch checklist, remembered"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory (default: ~/.playbook)
    #[arg(short = 'C', long = "dir", global = true)]
    pub dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show per-project completion summaries
    Status,
    /// List tasks with their checkbox state
    List(ListArgs),
    /// Flip a task's completion state
    Toggle(ToggleArgs),
    /// Clear completion state
    Reset(ResetArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Project key to list (default: all projects)
    pub project: Option<String>,
}

#[derive(Args)]
pub struct ToggleArgs {
    /// Task id to flip
    pub id: String,
}

#[derive(Args)]
pub struct ResetArgs {
    /// Project key to reset (default: everything)
    pub project: Option<String>,
}
