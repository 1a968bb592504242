//! CLI command definitions and terminal rendering helpers.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use bcws::models::FileEntry;

/// Print a success line to stderr.
pub fn print_success(message: &str) {
    use colored::Colorize;
    eprintln!("  {} {}", "✔".green().bold(), message);
}

/// Render a file listing, one name per line with its path dimmed.
pub fn render_files(files: &[FileEntry]) -> String {
    use colored::Colorize;
    files
        .iter()
        .map(|f| format!("  {}  {}", f.name.bold(), f.path.display().to_string().dimmed()))
        .collect::<Vec<_>>()
        .join("\n")
}
