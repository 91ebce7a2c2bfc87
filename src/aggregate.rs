use std::collections::{BTreeMap, BTreeSet};

use crate::git::LogEntry;
use crate::groups::{self, Group};

/// Author name mapped to the set of distinct folder/group labels touched.
///
/// Ordered maps keep both iteration and rendering deterministic across
/// runs, which the README update relies on for idempotence.
pub type ContributorMap = BTreeMap<String, BTreeSet<String>>;

/// Extracts the project folder from a changed file path.
///
/// The rule: the folder is the path segment immediately after the
/// contributors root, and there must be at least one further segment (a
/// file directly inside the root belongs to no project).
///
/// # Parameters
///
/// * `contributors_path` — Root sub-path, e.g. `packages`. Leading and
///   trailing slashes are ignored.
/// * `file_path` — A changed file path relative to the repository root, as
///   git reports it (forward slashes).
///
/// # Returns
///
/// * `Some(folder)` when the path matches `<contributors_path>/<folder>/...`.
/// * `None` for paths outside the contributors root, for files directly
///   inside it, and for lookalike prefixes (`packagesfoo/...`).
///
/// # Examples
///
/// ```
/// use monorepo_contributors::aggregate::folder_for_path;
///
/// assert_eq!(folder_for_path("packages", "packages/a/file.ts"), Some("a"));
/// assert_eq!(folder_for_path("packages", "packages/readme.txt"), None);
/// assert_eq!(folder_for_path("packages", "docs/guide.md"), None);
/// ```
pub fn folder_for_path<'a>(contributors_path: &str, file_path: &'a str) -> Option<&'a str> {
    let root = contributors_path.trim_matches('/');
    let rest = file_path.strip_prefix(root)?.strip_prefix('/')?;

    let mut segments = rest.splitn(2, '/');
    let folder = segments.next()?;
    // Require a segment below the folder, otherwise `rest` is a plain file.
    segments.next()?;

    if folder.is_empty() { None } else { Some(folder) }
}

/// Builds the author → distinct-labels mapping from commit log entries.
///
/// Entries that touched no file under the contributors path are skipped.
/// For each qualifying entry, every matching file contributes its folder
/// name, mapped through `groups` to a coarser label where one claims it; a
/// folder in no group keeps its own name. The result covers all qualifying
/// authors; callers apply the multi-project (more than one label) filter
/// at render time.
pub fn aggregate(
    entries: &[LogEntry],
    contributors_path: &str,
    groups: &[Group],
) -> ContributorMap {
    let mut contributors = ContributorMap::new();

    for entry in entries {
        let labels: BTreeSet<&str> = entry
            .files
            .iter()
            .filter_map(|file| folder_for_path(contributors_path, file))
            .map(|folder| groups::label_for(groups, folder))
            .collect();

        if labels.is_empty() {
            continue;
        }

        let set = contributors.entry(entry.author.clone()).or_default();
        for label in labels {
            set.insert(label.to_string());
        }
    }

    contributors
}
