//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Resolve the data directory, load config, open the store
//! 3. **API Dispatch**: Call the appropriate `RosterApi` method
//! 4. **Output Formatting**: Convert `CmdResult` into terminal output
//! 5. **Error Handling**: Return errors to `main`, which prints them and exits non-zero

use super::render::{
    render_algorithms, render_messages, render_stats, render_student, render_students,
};
use super::setup::{Cli, Commands};
use anyhow::{anyhow, Result};
use clap::Parser;
use directories::ProjectDirs;
use rosterapp::api::RosterApi;
use rosterapp::commands::CmdResult;
use rosterapp::config::RosterConfig;
use rosterapp::store::fs_backend::FsBackend;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DATA_DIR_ENV: &str = "ROSTER_DATA_DIR";

struct AppContext {
    api: RosterApi<FsBackend>,
    cwd: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    if seeds_on_startup(cli.command.as_ref())
        && ctx.api.config().seed_sample_data
        && ctx.api.store().is_empty()
    {
        let result = ctx.api.seed_sample_data()?;
        debug!(count = result.affected_students.len(), "seeded empty roster");
    }

    match cli.command {
        Some(Commands::Add(args)) => {
            let result = ctx.api.add_student(&args.to_input())?;
            print_messages(&result);
        }
        Some(Commands::Update { id, fields }) => {
            let result = ctx.api.update_student(&id, &fields.to_patch())?;
            print_messages(&result);
        }
        Some(Commands::Remove { ids }) => {
            let result = ctx.api.remove_students(&ids)?;
            print_messages(&result);
        }
        Some(Commands::Show { id }) => {
            let result = ctx.api.get_student(&id)?;
            for student in &result.listed_students {
                print!("{}", render_student(student));
            }
        }
        Some(Commands::List) | None => print_listing(ctx.api.list_students()?),
        Some(Commands::Search { query, method, key }) => {
            print_listing(ctx.api.search_students(&query, method, key)?)
        }
        Some(Commands::Sort {
            method,
            key,
            order,
            preview,
        }) => print_listing(ctx.api.sort_students(method, key, order, preview)?),
        Some(Commands::Import { file }) => {
            let result = ctx.api.import_file(&file)?;
            print_messages(&result);
        }
        Some(Commands::Export { output }) => {
            let result = ctx.api.export(&ctx.cwd, output.as_deref())?;
            print_messages(&result);
        }
        Some(Commands::Clear) => {
            let result = ctx.api.clear()?;
            print_messages(&result);
        }
        Some(Commands::Stats) => {
            let result = ctx.api.stats()?;
            if let Some(stats) = &result.stats {
                print!("{}", render_stats(stats));
            }
        }
        Some(Commands::Seed) => {
            let result = ctx.api.seed_sample_data()?;
            print_messages(&result);
        }
        Some(Commands::Algorithms) => {
            print!("{}", render_algorithms(&ctx.api.algorithms().algorithms));
        }
    }
    Ok(())
}

/// Logs go to stderr so stdout stays clean for tables and messages.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A second init (e.g. in tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    let config = RosterConfig::load(&data_dir)?;
    debug!(data_dir = %data_dir.display(), storage_key = %config.storage_key, "opening roster");

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    Ok(AppContext {
        api: RosterApi::open(FsBackend::new(data_dir), config),
        cwd,
    })
}

/// `--data-dir`, then `ROSTER_DATA_DIR`, then the platform data directory.
fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("", "", "roster")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| anyhow!("could not determine a data directory, pass --data-dir"))
}

/// Commands that set the roster's contents themselves skip startup seeding.
fn seeds_on_startup(command: Option<&Commands>) -> bool {
    !matches!(
        command,
        Some(Commands::Clear) | Some(Commands::Import { .. }) | Some(Commands::Seed)
    )
}

fn print_messages(result: &CmdResult) {
    print!("{}", render_messages(&result.messages));
}

fn print_listing(result: CmdResult) {
    print!("{}", render_students(&result.listed_students));
    print_messages(&result);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_env() {
        let dir = resolve_data_dir(Some(PathBuf::from("/tmp/roster-flag"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/roster-flag"));
    }

    #[test]
    fn test_seeding_skipped_for_content_commands() {
        assert!(seeds_on_startup(None));
        assert!(seeds_on_startup(Some(&Commands::List)));
        assert!(seeds_on_startup(Some(&Commands::Stats)));
        assert!(!seeds_on_startup(Some(&Commands::Clear)));
        assert!(!seeds_on_startup(Some(&Commands::Seed)));
        assert!(!seeds_on_startup(Some(&Commands::Import {
            file: PathBuf::from("x.json")
        })));
    }
}
