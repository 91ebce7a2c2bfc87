use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Error;

/// A user-defined label aggregating one or more project folders.
///
/// Deserialized from the optional group-config JSON file, which holds a
/// top-level array of these entries:
///
/// ```json
/// [
///   { "name": "web", "folders": ["site", "admin"] },
///   { "name": "infra", "folders": ["deploy"] }
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Group {
    /// Display name for the group.
    pub name: String,
    /// Folder names the group aggregates.
    pub folders: Vec<String>,
}

/// Loads the group list from `path`.
///
/// A missing file or a file containing only whitespace yields an empty
/// list. Anything else must be a JSON array of `{name, folders[]}` objects;
/// a malformed or mis-shaped file is rejected with a parse error rather
/// than silently producing unnamed labels.
///
/// # Parameters
///
/// * `path` — Location of the group-config file.
///
/// # Returns
///
/// * `Ok(Vec<Group>)` with the parsed groups (possibly empty).
/// * `Err(Error)` if the file exists but cannot be read or parsed.
pub fn load(path: &Path) -> Result<Vec<Group>, Error> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let body = fs::read_to_string(path)?;
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let groups: Vec<Group> = serde_json::from_str(&body)?;
    Ok(groups)
}

/// Maps a raw folder name to its display label.
///
/// Returns the name of the first group whose `folders` list contains
/// `folder`, or the folder name itself when no group claims it.
pub fn label_for<'a>(groups: &'a [Group], folder: &'a str) -> &'a str {
    groups
        .iter()
        .find(|g| g.folders.iter().any(|f| f == folder))
        .map(|g| g.name.as_str())
        .unwrap_or(folder)
}
