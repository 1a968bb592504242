//! Command-line entry point for bcws.
//!
//! Error handling boundary: library errors are wrapped with `anyhow`
//! context and printed once before exiting non-zero. Errors the library
//! already showed through its console are not printed a second time.

mod cli;

use bcws::config::defaults;
use bcws::constants;
use bcws::exercises::FileContent;
use bcws::{ConfigError, ExerciseError};
use bcws::workspace::Workspace;

use std::io::Write;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::args::{Cli, Command, FilesArgs};

fn main() {
    init_tracing();

    if let Err(err) = run() {
        if !already_reported(&err) {
            eprintln!("Error: {err:#}");
        }
        process::exit(1);
    }
}

/// Whether any error in the chain was printed by the terminal console.
fn already_reported(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<ConfigError>()
            .is_some_and(ConfigError::is_reported)
            || cause
                .downcast_ref::<ExerciseError>()
                .is_some_and(ExerciseError::is_reported)
    })
}

/// Install a stderr subscriber filtered by `BCWS_LOG` (default: `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env(constants::ENV_LOG)
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Version => return run_version(),
        Command::Languages => return run_languages(),
        _ => {}
    }

    let mut workspace = Workspace::resolve(&cli.path, cli.overrides())
        .context("failed to resolve workspace configuration")?;

    match cli.command {
        Command::Config => run_config(&workspace),
        Command::Index => run_index(&mut workspace),
        Command::Exercises => run_exercises(&workspace),
        Command::Files(args) => run_files(&workspace, &args),
        Command::Readme { slug } => run_readme(&workspace, slug.as_deref()),
        Command::Cat { slug, name } => run_cat(&workspace, &slug, &name),
        Command::Report { slug } => run_report(&workspace, &slug),
        Command::Version | Command::Languages => Ok(()),
    }
}

/// Print version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

/// List the language defaults table.
fn run_languages() -> Result<()> {
    for name in defaults::list_names() {
        println!("{name}");
    }
    Ok(())
}

fn run_config(workspace: &Workspace) -> Result<()> {
    let json = serde_json::to_string_pretty(workspace.config())
        .context("failed to serialize configuration")?;
    println!("{json}");
    Ok(())
}

fn run_index(workspace: &mut Workspace) -> Result<()> {
    workspace
        .build_index()
        .context("error building the exercise index")?;
    cli::print_success(&format!(
        "Indexed {} exercise(s) into {}",
        workspace.exercises().len(),
        workspace.config_path().display()
    ));
    Ok(())
}

fn run_exercises(workspace: &Workspace) -> Result<()> {
    use colored::Colorize;

    if workspace.exercises().is_empty() {
        println!("No exercises indexed. Run `{} index` first.", constants::APP_NAME);
        return Ok(());
    }
    for exercise in workspace.exercises() {
        println!(
            "  {}  {}",
            exercise.slug.bold(),
            exercise.path.display().to_string().dimmed()
        );
    }
    Ok(())
}

fn run_files(workspace: &Workspace, args: &FilesArgs) -> Result<()> {
    let files = if args.all {
        workspace.all_files(&args.slug)
    } else {
        workspace.visible_files(&args.slug)
    }
    .with_context(|| format!("failed to list files of {}", args.slug))?;

    if files.is_empty() {
        println!("No files to show.");
    } else {
        println!("{}", cli::render_files(&files));
    }
    Ok(())
}

fn run_readme(workspace: &Workspace, slug: Option<&str>) -> Result<()> {
    let readme = workspace.readme(slug)?;
    if !readme.attributes.is_empty() {
        let attributes = serde_json::to_string_pretty(&readme.attributes)
            .context("failed to serialize readme attributes")?;
        println!("{attributes}");
        println!();
    }
    print!("{}", readme.body);
    Ok(())
}

fn run_cat(workspace: &Workspace, slug: &str, name: &str) -> Result<()> {
    match workspace.file(slug, name)? {
        FileContent::File(bytes) => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes).context("failed to write to stdout")?;
            stdout.flush().context("failed to write to stdout")?;
        }
        FileContent::Directory { message, .. } => println!("Error: {message}"),
    }
    Ok(())
}

fn run_report(workspace: &Workspace, slug: &str) -> Result<()> {
    let report = workspace.test_report(slug)?;
    let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
    println!("{json}");
    Ok(())
}
