use crate::{aggregate, args, error::Error, git, groups, readme};

use console::style;
use std::env;

/// Counts reported after a successful run, used for the console summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Authors who touched more than one distinct folder/group.
    pub multi: usize,
    /// All authors who touched the contributors path at all.
    pub total: usize,
}

/// Runs the full scan pipeline over the given positional arguments.
///
/// Sequences: argument validation → group-config load → commit log query →
/// aggregation → README update. Any stage failing aborts the rest; there
/// are no retries and no partial recovery.
///
/// # Parameters
///
/// * `raw_args` — Positional arguments, program name already stripped:
///   `<repoPath> [contributorsPath] [maxEntries] [groupsJsonFile]`.
///
/// # Returns
///
/// * `Ok(Summary)` once the README has been rewritten.
/// * `Err(Error)` from the first stage that failed.
pub fn run(raw_args: &[String]) -> Result<Summary, Error> {
    let options = args::validate_args(raw_args)?;
    let groups = groups::load(&options.groups_file)?;
    let entries = git::log_with_files(&options.repo_path, options.max_entries)?;
    let contributors = aggregate::aggregate(&entries, &options.contributors_path, &groups);
    readme::update(&options.repo_path, &contributors)?;

    let multi = contributors.values().filter(|set| set.len() > 1).count();
    Ok(Summary {
        multi,
        total: contributors.len(),
    })
}

/// Prints usage information to stdout.
fn print_help() {
    println!(
        "\
monorepo-contributors {}

Scan commit history for contributors spanning multiple monorepo packages
and write a summary block into the repository README.

USAGE:
    monorepo-contributors <repoPath> [contributorsPath] [maxEntries] [groupsJsonFile]

ARGS:
    <repoPath>           Path to the repository to scan (required)
    [contributorsPath]   Sub-path whose child folders are the projects (default: packages)
    [maxEntries]         Number of recent commits to examine (default: 200)
    [groupsJsonFile]     JSON file mapping folders to named groups
                         (default: <repoPath>/contributor-groups.json)

OPTIONS:
    -h, --help       Print help information
    -V, --version    Print version information

DESCRIPTION:
    The summary is written between `<!-- contributors:start -->` and
    `<!-- contributors:end -->` markers in README.md: one line per author
    who touched more than one package folder (or group), plus totals.
    Re-running replaces only the content between the markers.",
        env!("CARGO_PKG_VERSION")
    );
}

/// Main CLI entry point for `monorepo-contributors`.
///
/// This function:
/// 1. Handles `--help` / `--version` flags.
/// 2. Verifies that `git` is available on `PATH`.
/// 3. Runs the scan pipeline over the remaining positional arguments.
/// 4. Prints a styled success summary, or the error on failure.
///
/// Returns `Ok(exit_code)` on success, or `Err(())` on error; the binary
/// maps `Err` to a non-zero process exit. All error kinds share the same
/// exit status.
pub fn entry() -> Result<i32, ()> {
    let argv: Vec<String> = env::args().skip(1).collect();

    // Handle --help flag.
    if argv.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(0);
    }

    // Handle --version flag.
    if argv.iter().any(|a| a == "--version" || a == "-V") {
        println!("monorepo-contributors {}", env!("CARGO_PKG_VERSION"));
        return Ok(0);
    }

    // Ensure `git` is available before touching the repository.
    match which::which("git") {
        Ok(_) => {}
        Err(_) => {
            eprintln!("{}", style("Error: `git` not found in PATH.").red().bold());
            return Err(());
        }
    }

    match run(&argv) {
        Ok(summary) => {
            println!(
                "{}",
                style(format!(
                    "✅ README updated: {} multi-project contributor(s) out of {} total.",
                    summary.multi, summary.total
                ))
                .green()
                .bold()
            );
            Ok(0)
        }
        Err(e) => {
            eprintln!("{}", style(format!("❌ {}", e)).red().bold());
            Err(())
        }
    }
}
