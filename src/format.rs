//! Rendering of status lines.
//!
//! Everything here is pure: the same count, total and elapsed time always
//! produce the same text. A line for a known total looks like
//!
//! ```text
//! desc: |####------| 4/10  40% [elapsed: 00:04 left: 00:06,  1.00 iters/sec]
//! ```
//!
//! and a line for an unknown total drops the bar, percentage and estimate:
//!
//! ```text
//! desc: 4 [elapsed: 00:04,  1.00 iters/sec]
//! ```

use compact_str::CompactString;

/// Width of the bar, in character cells, unless configured otherwise.
pub const DEFAULT_BAR_WIDTH: usize = 10;

const PROGRESS: char = '#';
const SPACE: char = '-';

/// Formats a number of seconds as `MM:SS`, or `H:MM:SS` past the first hour.
///
/// Fractional seconds are truncated. Negative or non-finite input is treated
/// as zero.
///
/// ```
/// use tallybar::format::interval;
///
/// assert_eq!(interval(59.9), "00:59");
/// assert_eq!(interval(3725.0), "1:02:05");
/// ```
pub fn interval(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    let (m, s) = (total / 60, total % 60);
    let (h, m) = (m / 60, m % 60);

    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{:02}:{:02}", m, s)
    }
}

/// Formats `n` finished iterations out of `total` after `elapsed` seconds.
///
/// A total of zero, or one that `n` has overshot, is treated as unknown for
/// this call.
pub fn meter(n: u64, total: Option<u64>, elapsed: f64, bar_width: usize) -> String {
    let total = total.filter(|&t| t > 0 && n <= t);

    let elapsed_str = interval(elapsed);
    let rate = if elapsed > 0.0 {
        format!("{:5.2}", n as f64 / elapsed)
    } else {
        "?".to_string()
    };

    match total {
        Some(total) => {
            let frac = n as f64 / total as f64;

            let filled = ((frac * bar_width as f64) as usize).min(bar_width);
            let bar: String = std::iter::repeat(PROGRESS)
                .take(filled)
                .chain(std::iter::repeat(SPACE).take(bar_width - filled))
                .collect();

            let percentage = (frac * 100.0) as u64;

            let left = if n > 0 {
                interval(elapsed / n as f64 * (total - n) as f64)
            } else {
                "?".to_string()
            };

            format!(
                "|{}| {}/{} {:>3}% [elapsed: {} left: {}, {} iters/sec]",
                bar, n, total, percentage, elapsed_str, left, rate
            )
        }
        None => format!("{} [elapsed: {}, {} iters/sec]", n, elapsed_str, rate),
    }
}

/// The fixed parts of a session's status line: its prefix and bar width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineFormat {
    prefix: CompactString,
    bar_width: usize,
}

impl LineFormat {
    /// A format with the given description and bar width.
    ///
    /// An empty description yields no prefix at all; otherwise the line starts
    /// with `"<desc>: "`. A zero bar width is bumped to one cell.
    pub fn new(desc: &str, bar_width: usize) -> LineFormat {
        let prefix = if desc.is_empty() {
            CompactString::default()
        } else {
            let mut p = CompactString::new(desc);
            p.push_str(": ");
            p
        };

        LineFormat {
            prefix,
            bar_width: bar_width.max(1),
        }
    }

    /// The text placed before every meter.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The number of cells in the bar.
    pub fn bar_width(&self) -> usize {
        self.bar_width
    }

    /// Render a complete status line.
    pub fn line(&self, n: u64, total: Option<u64>, elapsed: f64) -> String {
        let meter = meter(n, total, elapsed, self.bar_width);
        let mut line = String::with_capacity(self.prefix.len() + meter.len());
        line.push_str(&self.prefix);
        line.push_str(&meter);
        line
    }
}

impl Default for LineFormat {
    fn default() -> LineFormat {
        LineFormat::new("", DEFAULT_BAR_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn bar_of(line: &str) -> &str {
        let start = line.find('|').unwrap() + 1;
        let end = start + line[start..].find('|').unwrap();
        &line[start..end]
    }

    fn percent_of(line: &str) -> u64 {
        let end = line.find('%').unwrap();
        let start = line[..end].rfind(' ').unwrap() + 1;
        line[start..end].parse().unwrap()
    }

    #[test]
    fn intervals() {
        assert_eq!(interval(0.0), "00:00");
        assert_eq!(interval(1.999), "00:01");
        assert_eq!(interval(61.0), "01:01");
        assert_eq!(interval(3599.0), "59:59");
        assert_eq!(interval(3600.0), "1:00:00");
        assert_eq!(interval(36_000.0 * 3.0), "30:00:00");
        assert_eq!(interval(-5.0), "00:00");
        assert_eq!(interval(f64::NAN), "00:00");
    }

    #[test]
    fn known_total_lines() {
        assert_eq!(
            meter(1, Some(5), 1.0, DEFAULT_BAR_WIDTH),
            "|##--------| 1/5  20% [elapsed: 00:01 left: 00:04,  1.00 iters/sec]"
        );
        assert_eq!(
            meter(3, Some(5), 3.0, DEFAULT_BAR_WIDTH),
            "|######----| 3/5  60% [elapsed: 00:03 left: 00:02,  1.00 iters/sec]"
        );
        assert_eq!(
            meter(4, Some(6), 4.0, DEFAULT_BAR_WIDTH),
            "|######----| 4/6  66% [elapsed: 00:04 left: 00:02,  1.00 iters/sec]"
        );
        assert_eq!(
            meter(1, Some(1), 1.0, DEFAULT_BAR_WIDTH),
            "|##########| 1/1 100% [elapsed: 00:01 left: 00:00,  1.00 iters/sec]"
        );
    }

    #[test]
    fn nothing_done_yet() {
        assert_eq!(
            meter(0, Some(5), 0.0, DEFAULT_BAR_WIDTH),
            "|----------| 0/5   0% [elapsed: 00:00 left: ?, ? iters/sec]"
        );
    }

    #[test]
    fn unknown_total_lines() {
        assert_eq!(
            meter(7, None, 2.0, DEFAULT_BAR_WIDTH),
            "7 [elapsed: 00:02,  3.50 iters/sec]"
        );
        assert_eq!(meter(0, None, 0.0, DEFAULT_BAR_WIDTH), "0 [elapsed: 00:00, ? iters/sec]");
    }

    #[test]
    fn degenerate_totals_render_as_unknown() {
        // Zero total, with and without progress.
        assert_eq!(meter(0, Some(0), 0.0, 10), "0 [elapsed: 00:00, ? iters/sec]");
        assert_eq!(meter(2, Some(0), 1.0, 10), "2 [elapsed: 00:01,  2.00 iters/sec]");
        // Overshoot.
        let line = meter(6, Some(5), 6.0, 10);
        assert_eq!(line, "6 [elapsed: 00:06,  1.00 iters/sec]");
        assert!(!line.contains('%'));
    }

    #[test]
    fn long_runs_show_hours() {
        assert_eq!(
            meter(1, Some(2), 3661.0, 4),
            "|##--| 1/2  50% [elapsed: 1:01:01 left: 1:01:01,  0.00 iters/sec]"
        );
    }

    #[test]
    fn bar_width_is_always_respected() {
        let mut rng = rand::thread_rng();

        for _ in 0..50 {
            let total: u64 = rng.gen_range(1..=500);
            let width: usize = rng.gen_range(1..=80);

            for n in 0..=total {
                let line = meter(n, Some(total), 1.0, width);
                let bar = bar_of(&line);
                assert_eq!(bar.chars().count(), width, "{}", line);
                assert!(bar.chars().all(|c| c == PROGRESS || c == SPACE));
                assert!(percent_of(&line) <= 100, "{}", line);
            }
        }
    }

    #[test]
    fn prefixes() {
        let plain = LineFormat::default();
        assert_eq!(plain.prefix(), "");
        assert_eq!(plain.line(0, None, 0.0), "0 [elapsed: 00:00, ? iters/sec]");

        let described = LineFormat::new("Loading", 10);
        assert_eq!(
            described.line(0, None, 0.0),
            "Loading: 0 [elapsed: 00:00, ? iters/sec]"
        );
    }

    #[test]
    fn zero_width_is_bumped() {
        let fmt = LineFormat::new("", 0);
        assert_eq!(fmt.bar_width(), 1);
        assert!(fmt.line(1, Some(1), 1.0).starts_with("|#|"));
    }
}
