//! Single-line progress meters for iterators.
//!
//! # Features
//!
//! - Drop-in: wrap any iterator with `.meter()` and iterate as usual.
//! - Bar, percentage, elapsed time, time left and rate on one line.
//! - Redraws throttled by iteration count and by wall-clock time.
//! - The line is always resolved when iteration ends, even on `break`.
//! - Injectable output stream and clock, for byte-exact testing.
//!
//! # Usage
//!
//! ## Iterators
//!
//! The simplest use is through [`MeterIteratorExt`], which is implemented for
//! every [`Iterator`]:
//!
//! ```no_run
//! use tallybar::MeterIteratorExt;
//!
//! for _ in (0..500).meter_desc("Downloading") {
//!     // ... Your logic ...
//! }
//! ```
//!
//! While the loop runs, standard error shows a line like:
//!
//! ```text
//! Downloading: |####------| 214/500  42% [elapsed: 00:21 left: 00:28, 10.02 iters/sec]
//! ```
//!
//! If the iterator knows its exact length (see [`Iterator::size_hint`]), that
//! is the total. Otherwise, or if the total is overshot, the bar, percentage and
//! estimate are dropped:
//!
//! ```text
//! Downloading: 214 [elapsed: 00:21, 10.02 iters/sec]
//! ```
//!
//! By default the line is erased once iteration ends. Set [`Options::leave`] to
//! keep it, followed by a newline:
//!
//! ```no_run
//! use tallybar::{MeterIteratorExt, Options};
//!
//! let opts = Options::new().desc("Parsing").leave(true);
//! let words = ["alpha", "beta", "gamma"];
//! let lens: Vec<usize> = words.iter().meter_with(opts).map(|w| w.len()).collect();
//! ```
//!
//! ## Sessions
//!
//! [`Session`] is the engine underneath, and can be driven by hand when no
//! iterator is at hand:
//!
//! ```
//! use tallybar::{clock::ManualClock, Options, Session};
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//! let mut out = Vec::new();
//! let mut session = Session::new(Options::new().total(2).leave(true), &mut out, clock.clone());
//!
//! session.start()?;
//! clock.advance(Duration::from_secs(1));
//! session.tick()?;
//! clock.advance(Duration::from_secs(1));
//! session.tick()?;
//! session.finish()?;
//! drop(session);
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "\r|#####-----| 1/2  50% [elapsed: 00:01 left: 00:01,  1.00 iters/sec]\
//!      \r|##########| 2/2 100% [elapsed: 00:02 left: 00:00,  1.00 iters/sec]\n"
//! );
//! # Ok::<(), tallybar::Error>(())
//! ```
//!
//! ## Throttling
//!
//! A redraw happens only once at least [`Options::min_iters`] iterations (1 by
//! default) *and* [`Options::min_interval`] (half a second by default) have
//! passed since the last one.
//!
//! # Caveats
//!
//! - One meter per session, drawn on the iterating thread. No multi-bars.
//! - Your terminal must honour carriage returns.
//! - Log output from this crate goes through [`log`]; install a logger to see it.

#![doc(html_root_url = "https://docs.rs/tallybar/0.1.0")]

pub mod clock;
pub mod error;
pub mod format;
pub mod iter;
pub mod options;
pub mod printer;
pub mod session;

pub use error::{Error, Result};
pub use iter::{MeterIter, MeterIteratorExt, Metered};
pub use options::Options;
pub use session::{Phase, Session};
