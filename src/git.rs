use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::Error;

/// ASCII record separator; prefixes each commit so the log output can be
/// split without guessing at blank-line boundaries.
const RECORD_SEPARATOR: char = '\x1e';

/// One commit as reported by the log query: author name plus the list of
/// changed file paths, relative to the repository root.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Author name.
    pub author: String,
    /// Paths changed in this commit. Empty for merge commits, which list
    /// no files under `--name-only`.
    pub files: Vec<String>,
}

/// Runs a command and returns its trimmed standard output on success,
/// or its standard error wrapped in [`Error::Git`] on failure.
///
/// - If the command exits with a zero status, its `stdout` is captured,
///   converted to UTF-8 (lossy), trimmed, and returned as `Ok(String)`.
/// - If the command exits non-zero, its `stderr` is captured, converted,
///   trimmed, and returned as an error.
/// - If the process fails to spawn, the I/O error message is returned as
///   an error.
///
/// # Parameters
///
/// * `cmd` — A fully configured [`std::process::Command`] ready to execute.
///
/// # Returns
///
/// * `Ok(String)` containing trimmed `stdout` if the command succeeded.
/// * `Err(Error::Git)` containing trimmed `stderr` or an I/O error message
///   otherwise.
fn run_output(mut cmd: Command) -> Result<String, Error> {
    let out_res = cmd.output();
    match out_res {
        Ok(out) => {
            if out.status.success() {
                Ok(String::from_utf8_lossy(&out.stdout).trim().to_string())
            } else {
                Err(Error::Git(
                    String::from_utf8_lossy(&out.stderr).trim().to_string(),
                ))
            }
        }
        Err(e) => Err(Error::Git(format!("{}", e))),
    }
}

/// Retrieves up to `max_entries` recent commits with their changed files.
///
/// Internally, this executes:
///
/// ```text
/// git -C <repo_path> log -n <max_entries> --name-only --pretty=format:<RS>%an
/// ```
///
/// where `<RS>` is an ASCII record separator marking the start of each
/// commit. The output is parsed into [`LogEntry`] records by
/// [`parse_log`].
///
/// # Parameters
///
/// * `repo_path` — Path to the repository to query.
/// * `max_entries` — Upper bound on the number of commits returned.
///
/// # Returns
///
/// * `Ok(Vec<LogEntry>)` in most-recent-first order.
/// * `Err(Error::Git)` if the query fails (for example, a path that is not
///   a git repository, or a repository with no commits yet).
pub fn log_with_files(repo_path: &Path, max_entries: usize) -> Result<Vec<LogEntry>, Error> {
    let mut cmd = Command::new("git");
    cmd.arg("-C")
        .arg(repo_path)
        .arg("log")
        .arg("-n")
        .arg(max_entries.to_string())
        .arg("--name-only")
        .arg(format!("--pretty=format:{}%an", RECORD_SEPARATOR));
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let raw = run_output(cmd)?;
    Ok(parse_log(&raw))
}

/// Parses raw `git log --name-only` output into [`LogEntry`] records.
///
/// Each record starts at a record separator; its first line is the author
/// name and every following non-blank line is a changed file path. Records
/// with a blank author line are skipped.
pub(crate) fn parse_log(raw: &str) -> Vec<LogEntry> {
    raw.split(RECORD_SEPARATOR)
        .filter_map(|record| {
            let mut lines = record.lines();
            let author = lines.next()?.trim().to_string();
            if author.is_empty() {
                return None;
            }

            let files = lines
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect();

            Some(LogEntry { author, files })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{LogEntry, log_with_files, parse_log};
    use std::fs;
    use std::path::Path;
    use std::process::Command;

    #[test]
    fn parse_log_splits_records() {
        let raw =
            "\x1eAlice\n\npackages/a/file.ts\npackages/b/file.ts\n\x1eBob\n\npackages/a/file.ts\n";
        let entries = parse_log(raw);

        assert_eq!(
            entries,
            vec![
                LogEntry {
                    author: "Alice".to_string(),
                    files: vec![
                        "packages/a/file.ts".to_string(),
                        "packages/b/file.ts".to_string(),
                    ],
                },
                LogEntry {
                    author: "Bob".to_string(),
                    files: vec!["packages/a/file.ts".to_string()],
                },
            ]
        );
    }

    #[test]
    fn parse_log_merge_commit_has_no_files() {
        let raw = "\x1eAlice\n\x1eBob\n\nREADME.md\n";
        let entries = parse_log(raw);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].author, "Alice");
        assert!(entries[0].files.is_empty());
        assert_eq!(entries[1].files, vec!["README.md"]);
    }

    #[test]
    fn parse_log_empty_input_is_empty() {
        assert!(parse_log("").is_empty());
    }

    #[test]
    fn parse_log_skips_blank_author_records() {
        let raw = "\x1e\n\nfile.txt\n\x1eCarol\n\nfile.txt\n";
        let entries = parse_log(raw);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].author, "Carol");
    }

    fn git(dir: &Path, args: &[&str]) {
        let status = Command::new("git")
            .arg("-C")
            .arg(dir)
            .args(args)
            .status()
            .expect("failed to run git");
        assert!(status.success(), "git {:?} failed", args);
    }

    fn commit_all(dir: &Path, author: &str, email: &str, message: &str) {
        git(dir, &["add", "-A"]);
        git(
            dir,
            &[
                "-c",
                &format!("user.name={}", author),
                "-c",
                &format!("user.email={}", email),
                "commit",
                "-q",
                "-m",
                message,
            ],
        );
    }

    #[test]
    fn log_with_files_reads_real_history() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let repo = dir.path();
        git(repo, &["init", "-q"]);

        fs::create_dir_all(repo.join("packages/a")).expect("failed to create dir");
        fs::write(repo.join("packages/a/lib.rs"), "fn a() {}\n").expect("failed to write");
        commit_all(repo, "Alice", "alice@example.com", "add a");

        fs::write(repo.join("packages/a/util.rs"), "fn u() {}\n").expect("failed to write");
        commit_all(repo, "Bob", "bob@example.com", "add util");

        let entries = log_with_files(repo, 200).expect("log query failed");

        assert_eq!(entries.len(), 2);
        // Most recent first.
        assert_eq!(entries[0].author, "Bob");
        assert_eq!(entries[0].files, vec!["packages/a/util.rs"]);
        assert_eq!(entries[1].author, "Alice");
        assert_eq!(entries[1].files, vec!["packages/a/lib.rs"]);
    }

    #[test]
    fn log_with_files_respects_max_entries() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let repo = dir.path();
        git(repo, &["init", "-q"]);

        for i in 0..3 {
            fs::write(repo.join(format!("f{}.txt", i)), "x\n").expect("failed to write");
            commit_all(repo, "Alice", "alice@example.com", &format!("commit {}", i));
        }

        let entries = log_with_files(repo, 2).expect("log query failed");
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn log_with_files_fails_outside_a_repo() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let result = log_with_files(dir.path(), 10);
        assert!(result.is_err());
    }
}
