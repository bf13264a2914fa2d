//! Utility modules for file system operations and progress reporting.
//!
//! The [`fs`] module covers the file operations every command leans on:
//! atomic writes, recursive copies, and directory sizing. The [`progress`]
//! module wraps `indicatif` with consistent styling and a kill switch for
//! non-interactive environments.

pub mod fs;
pub mod progress;

pub use fs::{atomic_write, copy_dir, ensure_dir, remove_dir_all, safe_write};
pub use progress::{ProgressBar, ProgressStyle};
