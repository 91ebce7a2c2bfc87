/// Errors surfaced by the contributor scan pipeline.
///
/// Every stage returns this type directly instead of printing to the
/// console, so the caller (normally the binary) decides how to report a
/// failure and which exit code to use.
///
/// # Examples
///
/// ```
/// use monorepo_contributors::error::Error;
///
/// let err = Error::MissingRepoPath;
/// assert_eq!(err.to_string(), "No repo path provided");
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No repository path was given on the command line.
    #[error("No repo path provided")]
    MissingRepoPath,

    /// The repository path does not exist on the filesystem.
    #[error("Repo path does not exist, or it was not provided as an absolute path")]
    RepoPathNotFound,

    /// The contributors sub-path does not exist under the repository path.
    #[error("Contributors path does not exist, or it was not provided as an absolute path")]
    ContributorsPathNotFound,

    /// The max-entries argument is not a positive integer.
    #[error("invalid max entries value `{0}` (expected a positive integer)")]
    InvalidMaxEntries(String),

    /// The group file exists but does not match the expected
    /// `[{{name, folders[]}}]` JSON shape.
    #[error("group file is not valid: {0}")]
    GroupFile(#[from] serde_json::Error),

    /// A `git` invocation failed or exited non-zero.
    #[error("git log query failed: {0}")]
    Git(String),

    /// The README contains a start marker but no matching end marker.
    #[error("README has a `{0}` marker but no matching end marker")]
    UnterminatedMarkerBlock(&'static str),

    /// Filesystem read or write failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
