//! Progress indicators for long-running banner operations.
//!
//! Wraps the `indicatif` crate with consistent styling for generation and
//! packaging runs. Indicators disable themselves when the
//! `BANNERFORGE_NO_PROGRESS` environment variable is set or when the
//! `--no-progress` flag has been passed, so scripted and CI invocations get
//! clean line-oriented output.
//!
//! # Examples
//!
//! ```rust
//! use bannerforge::utils::progress::ProgressBar;
//!
//! let progress = ProgressBar::new(10);
//! progress.set_message("Generating banners");
//! for _ in 0..10 {
//!     progress.inc(1);
//! }
//! progress.finish_with_message("All banners generated");
//! ```

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle as IndicatifStyle};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Process-wide switch flipped by the `--no-progress` CLI flag.
///
/// Mutating the environment after the async runtime has started is unsound
/// on recent editions, so the flag is tracked here instead.
static PROGRESS_SUPPRESSED: AtomicBool = AtomicBool::new(false);

/// Disables all progress indicators for the remainder of the process.
pub fn disable_progress() {
    PROGRESS_SUPPRESSED.store(true, Ordering::Relaxed);
}

/// Checks whether progress bars should be hidden.
///
/// Returns `true` when `BANNERFORGE_NO_PROGRESS` is set to any value or when
/// [`disable_progress`] has been called.
fn is_progress_disabled() -> bool {
    PROGRESS_SUPPRESSED.load(Ordering::Relaxed)
        || std::env::var("BANNERFORGE_NO_PROGRESS").is_ok()
}

/// A progress bar with consistent styling across banner operations.
///
/// Wraps an `indicatif` bar so every command renders progress the same way.
/// When indicators are disabled the bar is created hidden and all updates
/// become no-ops, which keeps call sites free of conditionals.
///
/// The underlying bar is thread-safe; clones share state, so a clone can be
/// moved into each spawned task of a parallel operation.
#[derive(Clone)]
pub struct ProgressBar {
    inner: IndicatifBar,
}

impl ProgressBar {
    /// Creates a progress bar tracking `len` units of work.
    pub fn new(len: u64) -> Self {
        let bar = if is_progress_disabled() {
            IndicatifBar::hidden()
        } else {
            let bar = IndicatifBar::new(len);
            bar.set_style(default_style());
            bar
        };
        Self { inner: bar }
    }

    /// Creates a spinner for work without a known total, ticking every 100ms.
    pub fn new_spinner() -> Self {
        let bar = if is_progress_disabled() {
            IndicatifBar::hidden()
        } else {
            let bar = IndicatifBar::new_spinner();
            bar.set_style(spinner_style());
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        };
        Self { inner: bar }
    }

    /// Sets the message displayed alongside the bar.
    pub fn set_message(&self, msg: impl Into<String>) {
        self.inner.set_message(msg.into());
    }

    /// Sets the prefix displayed before the bar.
    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.inner.set_prefix(prefix.into());
    }

    /// Advances the bar by `delta` units.
    pub fn inc(&self, delta: u64) {
        self.inner.inc(delta);
    }

    /// Sets the absolute position.
    pub fn set_position(&self, pos: u64) {
        self.inner.set_position(pos);
    }

    /// Completes the bar, replacing it with `msg`.
    pub fn finish_with_message(&self, msg: impl Into<String>) {
        self.inner.finish_with_message(msg.into());
    }

    /// Completes the bar and removes it from the terminal.
    pub fn finish_and_clear(&self) {
        self.inner.finish_and_clear();
    }
}

/// Pre-configured styles shared by all progress indicators.
pub struct ProgressStyle;

impl ProgressStyle {
    /// The default bar style: position, total, and ETA with a 40-column bar.
    pub fn default_style() -> IndicatifStyle {
        default_style()
    }

    /// The spinner style used for indeterminate work.
    pub fn spinner() -> IndicatifStyle {
        spinner_style()
    }
}

fn default_style() -> IndicatifStyle {
    IndicatifStyle::default_bar()
        .template("{prefix:.bold} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
        .unwrap()
        .progress_chars("━╸━")
}

fn spinner_style() -> IndicatifStyle {
    IndicatifStyle::default_spinner()
        .template("{prefix:.bold} {spinner:.cyan} {msg}")
        .unwrap()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
}

/// Creates a spinner with an initial message already set.
pub fn spinner_with_message(msg: impl Into<String>) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(msg);
    spinner
}
