//! Configuration of a metering session.

use crate::format::DEFAULT_BAR_WIDTH;
use compact_str::CompactString;
use std::time::Duration;
use terminal_size::{terminal_size, Width};

/// Settings for a [`Session`](crate::Session), fixed once the session is built.
///
/// Start from [`Options::new`] (or `Default`) and override what you need:
///
/// ```
/// use std::time::Duration;
/// use tallybar::Options;
///
/// let opts = Options::new()
///     .desc("Indexing")
///     .total(250)
///     .leave(true)
///     .min_interval(Duration::from_millis(100));
///
/// assert_eq!(opts.get_total(), Some(250));
/// assert_eq!(opts.get_min_iters(), 1);
/// ```
///
/// The output stream is not part of `Options`; it is handed to the session
/// directly, and defaults to standard error in the convenience constructors.
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    total: Option<u64>,
    desc: CompactString,
    leave: bool,
    min_iters: u64,
    min_interval: Duration,
    bar_width: usize,
    initial_line: bool,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            total: None,
            desc: CompactString::default(),
            leave: false,
            min_iters: 1,
            min_interval: Duration::from_millis(500),
            bar_width: DEFAULT_BAR_WIDTH,
            initial_line: false,
        }
    }
}

impl Options {
    /// The default settings.
    pub fn new() -> Options {
        Options::default()
    }

    /// The expected number of iterations. `None` means unknown.
    pub fn total(mut self, total: impl Into<Option<u64>>) -> Options {
        self.total = total.into();
        self
    }

    /// Like [`Options::total`], for collections that report their length as
    /// a signed number. Negative lengths mean the total is unknown.
    pub fn total_hint(mut self, len: i64) -> Options {
        self.total = u64::try_from(len).ok();
        self
    }

    /// A short description printed before the meter, as `"<desc>: "`.
    pub fn desc(mut self, desc: impl Into<CompactString>) -> Options {
        self.desc = desc.into();
        self
    }

    /// Keep the final line on screen once the session finishes.
    pub fn leave(mut self, leave: bool) -> Options {
        self.leave = leave;
        self
    }

    /// Redraw only once at least this many iterations have passed since the
    /// last redraw. Zero is treated as one.
    pub fn min_iters(mut self, n: u64) -> Options {
        self.min_iters = n.max(1);
        self
    }

    /// Redraw only once at least this much time has passed since the last
    /// redraw.
    pub fn min_interval(mut self, interval: Duration) -> Options {
        self.min_interval = interval;
        self
    }

    /// [`Options::min_interval`] in seconds. Negative or NaN means zero.
    pub fn min_interval_secs(self, secs: f64) -> Options {
        let interval = Duration::try_from_secs_f64(secs.max(0.0)).unwrap_or(Duration::MAX);
        self.min_interval(interval)
    }

    /// Number of character cells in the bar. Zero is treated as one.
    pub fn bar_width(mut self, width: usize) -> Options {
        self.bar_width = width.max(1);
        self
    }

    /// Size the bar to the attached terminal.
    ///
    /// The bar takes half the terminal width, less what the rest of the meter
    /// and the description need, but never shrinks below the default width.
    /// Has no effect when not running in a terminal.
    ///
    /// The width is fixed when this is called, so set [`Options::desc`] first.
    pub fn bar_width_from_terminal(mut self) -> Options {
        if let Some((Width(w), _)) = terminal_size() {
            self.bar_width = fit_bar(w as usize, &self.desc);
        }
        self
    }

    /// Print the zero-count line as soon as the session starts, rather than
    /// waiting for the first redraw.
    pub fn initial_line(mut self, show: bool) -> Options {
        self.initial_line = show;
        self
    }

    /// The expected number of iterations, if known.
    pub fn get_total(&self) -> Option<u64> {
        self.total
    }

    /// The description.
    pub fn get_desc(&self) -> &str {
        &self.desc
    }

    /// Whether the final line stays on screen.
    pub fn get_leave(&self) -> bool {
        self.leave
    }

    /// Minimum iterations between redraws.
    pub fn get_min_iters(&self) -> u64 {
        self.min_iters
    }

    /// Minimum time between redraws.
    pub fn get_min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Number of cells in the bar.
    pub fn get_bar_width(&self) -> usize {
        self.bar_width
    }

    /// Whether `start` prints the zero-count line.
    pub fn get_initial_line(&self) -> bool {
        self.initial_line
    }

    /// Fill in the total from an iterator's size hint, unless already set.
    ///
    /// Only an exact hint (equal lower and upper bounds) counts.
    pub(crate) fn or_size_hint(mut self, hint: (usize, Option<usize>)) -> Options {
        if self.total.is_none() {
            self.total = match hint {
                (lower, Some(upper)) if lower == upper => Some(upper as u64),
                _ => None,
            };
        }
        self
    }
}

/// Bar width for a terminal `columns` wide, leaving room for `desc`.
fn fit_bar(columns: usize, desc: &str) -> usize {
    let room = (columns / 2).saturating_sub(desc.chars().count() + 7);
    room.max(DEFAULT_BAR_WIDTH)
}
