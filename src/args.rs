use std::path::PathBuf;

use crate::error::Error;

/// Default sub-directory whose immediate child folders count as projects.
pub const DEFAULT_CONTRIBUTORS_PATH: &str = "packages";

/// Default number of log entries to examine.
pub const DEFAULT_MAX_ENTRIES: usize = 200;

/// Default group-config file name, resolved under the repo path.
pub const DEFAULT_GROUPS_FILE: &str = "contributor-groups.json";

/// Validated options for one scan run.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Root of the repository to scan.
    pub repo_path: PathBuf,
    /// Sub-path under the repo root containing the project folders.
    pub contributors_path: String,
    /// Upper bound on commit log entries to retrieve.
    pub max_entries: usize,
    /// Location of the optional group-config JSON file.
    pub groups_file: PathBuf,
}

/// Validates the positional CLI arguments and resolves defaults.
///
/// Expected form: `<repoPath> [contributorsPath] [maxEntries] [groupsJsonFile]`.
///
/// - `repoPath` is required, trimmed, and must exist on the filesystem.
/// - `contributorsPath` defaults to `packages` and must exist under the
///   repo path.
/// - `maxEntries` defaults to 200 and must parse as a positive integer.
/// - `groupsJsonFile` defaults to `contributor-groups.json` under the repo
///   path; the file itself is allowed to be missing (the loader treats a
///   missing file as an empty group list).
///
/// # Parameters
///
/// * `args` — Positional arguments, program name already stripped.
///
/// # Returns
///
/// * `Ok(Options)` with all paths resolved.
/// * `Err(Error)` describing the first validation failure.
///
/// # Examples
///
/// ```ignore
/// let opts = validate_args(&["/repos/mono".to_string()])?;
/// assert_eq!(opts.contributors_path, "packages");
/// assert_eq!(opts.max_entries, 200);
/// ```
pub fn validate_args(args: &[String]) -> Result<Options, Error> {
    let repo_arg = args.first().map(|s| s.trim()).unwrap_or("");
    if repo_arg.is_empty() {
        return Err(Error::MissingRepoPath);
    }

    let repo_path = PathBuf::from(repo_arg);
    if !repo_path.exists() {
        return Err(Error::RepoPathNotFound);
    }

    let contributors_path = match args.get(1) {
        Some(p) => p.clone(),
        None => String::from(DEFAULT_CONTRIBUTORS_PATH),
    };
    if !repo_path.join(&contributors_path).exists() {
        return Err(Error::ContributorsPathNotFound);
    }

    let max_entries = match args.get(2) {
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => return Err(Error::InvalidMaxEntries(raw.clone())),
        },
        None => DEFAULT_MAX_ENTRIES,
    };

    let groups_file = match args.get(3) {
        Some(p) => PathBuf::from(p),
        None => repo_path.join(DEFAULT_GROUPS_FILE),
    };

    Ok(Options {
        repo_path,
        contributors_path,
        max_entries,
        groups_file,
    })
}
