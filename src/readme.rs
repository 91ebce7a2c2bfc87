use std::fs;
use std::path::Path;

use crate::aggregate::ContributorMap;
use crate::error::Error;

/// Sentinel opening the generated block in the README.
pub const START_MARKER: &str = "<!-- contributors:start -->";

/// Sentinel closing the generated block in the README.
pub const END_MARKER: &str = "<!-- contributors:end -->";

/// Renders the contributor summary block, markers included.
///
/// Lists every author whose label set holds more than one entry, with the
/// count of distinct folders/groups touched, followed by the two totals.
/// Authors come out in map order, so the block is stable for a given
/// aggregate.
///
/// # Examples
///
/// ```
/// use std::collections::{BTreeMap, BTreeSet};
/// use monorepo_contributors::readme::render_block;
///
/// let mut contributors = BTreeMap::new();
/// contributors.insert(
///     "Alice".to_string(),
///     BTreeSet::from(["a".to_string(), "b".to_string()]),
/// );
/// contributors.insert("Bob".to_string(), BTreeSet::from(["a".to_string()]));
///
/// let block = render_block(&contributors);
/// assert!(block.contains("- Alice (2)"));
/// assert!(!block.contains("Bob"));
/// assert!(block.contains("Total Multi Contributors: 1"));
/// assert!(block.contains("Total Contributors: 2"));
/// ```
pub fn render_block(contributors: &ContributorMap) -> String {
    let multi: Vec<(&str, usize)> = contributors
        .iter()
        .filter(|(_, labels)| labels.len() > 1)
        .map(|(name, labels)| (name.as_str(), labels.len()))
        .collect();

    let mut block = String::from(START_MARKER);
    block.push('\n');
    for (name, count) in &multi {
        block.push_str(&format!("- {} ({})\n", name, count));
    }
    block.push_str(&format!("Total Multi Contributors: {}\n", multi.len()));
    block.push_str(&format!("Total Contributors: {}\n", contributors.len()));
    block.push_str(END_MARKER);
    block
}

/// Inserts `block` into `readme` text.
///
/// Without a start marker the block is appended after a blank line. With
/// one, the region from the start marker through the end marker is
/// replaced and everything outside it is preserved byte-for-byte. A start
/// marker without an end marker is rejected rather than silently left in
/// place.
pub(crate) fn splice(readme: &str, block: &str) -> Result<String, Error> {
    match readme.find(START_MARKER) {
        None => Ok(format!("{}\n\n{}", readme, block)),
        Some(start) => match readme[start..].find(END_MARKER) {
            Some(rel_end) => {
                let end = start + rel_end + END_MARKER.len();
                Ok(format!("{}{}{}", &readme[..start], block, &readme[end..]))
            }
            None => Err(Error::UnterminatedMarkerBlock(START_MARKER)),
        },
    }
}

/// Rewrites `README.md` under `repo_path` with the current summary block.
///
/// Reads the file, splices the rendered block in, and writes the result
/// back to the same path. Running twice with an identical aggregate
/// produces an identical file.
///
/// # Parameters
///
/// * `repo_path` — Repository root containing `README.md`.
/// * `contributors` — Full author → labels aggregate; the multi-project
///   filter is applied here, at render time.
///
/// # Returns
///
/// * `Ok(())` once the file is written.
/// * `Err(Error)` if the README cannot be read, has an unterminated marker
///   block, or cannot be written back.
pub fn update(repo_path: &Path, contributors: &ContributorMap) -> Result<(), Error> {
    let readme_path = repo_path.join("README.md");
    let readme = fs::read_to_string(&readme_path)?;

    let updated = splice(&readme, &render_block(contributors))?;
    fs::write(&readme_path, updated)?;
    Ok(())
}
