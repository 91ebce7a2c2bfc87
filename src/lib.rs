//! # monorepo-contributors
//!
//! A CLI tool that scans a repository's commit history for contributors
//! who committed to more than one sub-project under a monorepo-style
//! `packages` directory, then writes a summary into the README between
//! sentinel comments.
//!
//! This crate provides functionality to:
//! - Validate positional arguments and resolve defaults
//! - Load an optional JSON mapping of folders to named groups
//! - Query recent commit history (author + changed files) via `git log`
//! - Aggregate authors to the set of distinct folders/groups they touched
//! - Replace or append the summary block in `README.md` idempotently
//!
//! ## Usage
//!
//! ```bash
//! monorepo-contributors /path/to/repo
//!
//! # Custom project root, log depth, and group config
//! monorepo-contributors /path/to/repo crates 500 teams.json
//! ```
//!
//! ## Modules
//!
//! - [`cli`] - Command-line interface and main entry point
//! - [`args`] - Positional argument validation
//! - [`groups`] - Group-config loading and folder → label mapping
//! - [`git`] - Git command wrapper and log parsing
//! - [`aggregate`] - Author → distinct-folders aggregation
//! - [`readme`] - Summary rendering and marker-block replacement
//! - [`error`] - Error type shared across the pipeline

pub mod aggregate;
pub mod args;
pub mod cli;
pub mod error;
pub mod git;
pub mod groups;
pub mod readme;
