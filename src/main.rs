use clap::Parser;
use playbook::cli::commands::Cli;
use playbook::cli::handlers;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            let dir = handlers::data_dir(cli.dir.as_deref());
            if let Err(e) = playbook::tui::run(Some(dir.as_path())) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
