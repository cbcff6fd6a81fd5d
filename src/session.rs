//! The metering session: timing, throttling and lifecycle.

use crate::clock::{Clock, SystemClock};
use crate::error::{Error, Result};
use crate::format::LineFormat;
use crate::options::Options;
use crate::printer::Printer;
use log::{debug, trace, warn};
use std::io::{self, Stderr, Write};
use std::time::Duration;

/// Where a [`Session`] is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Built, but `start` has not been called.
    Created,
    /// Accepting ticks.
    Running,
    /// Done. No further calls are accepted.
    Finished,
}

/// One metering pass over one iteration.
///
/// Call [`Session::start`] before the first item, [`Session::tick`] after each
/// item, and [`Session::finish`] once iteration ends:
///
/// ```
/// use tallybar::{clock::SystemClock, Options, Session};
///
/// let mut out = Vec::new();
/// let mut session = Session::new(Options::new().total(3), &mut out, SystemClock::new());
///
/// session.start()?;
/// for _ in 0..3 {
///     // ... work ...
///     session.tick()?;
/// }
/// session.finish()?;
/// # Ok::<(), tallybar::Error>(())
/// ```
///
/// A session that is dropped while still running finishes itself, so the
/// line is never abandoned half-drawn.
pub struct Session<W: Write = Stderr, K: Clock = SystemClock> {
    options: Options,
    format: LineFormat,
    printer: Printer<W>,
    clock: K,
    phase: Phase,
    /// Iterations ticked so far.
    n: u64,
    /// The count shown by the last redraw.
    last_print_n: u64,
    start_t: Duration,
    last_print_t: Duration,
}

impl Session<Stderr, SystemClock> {
    /// A session that draws to standard error.
    pub fn stderr(options: Options) -> Session<Stderr, SystemClock> {
        Session::new(options, io::stderr(), SystemClock::new())
    }
}

impl<W: Write, K: Clock> Session<W, K> {
    /// A new session, not yet started.
    pub fn new(options: Options, output: W, clock: K) -> Session<W, K> {
        let format = LineFormat::new(options.get_desc(), options.get_bar_width());

        Session {
            options,
            format,
            printer: Printer::new(output),
            clock,
            phase: Phase::Created,
            n: 0,
            last_print_n: 0,
            start_t: Duration::ZERO,
            last_print_t: Duration::ZERO,
        }
    }

    /// Begin timing.
    pub fn start(&mut self) -> Result<()> {
        if self.phase != Phase::Created {
            return Err(Error::AlreadyStarted);
        }

        let now = self.clock.now();
        self.start_t = now;
        self.last_print_t = now;
        self.n = 0;
        self.last_print_n = 0;
        self.phase = Phase::Running;

        debug!(
            "start: desc={:?} total={:?} leave={}",
            self.options.get_desc(),
            self.options.get_total(),
            self.options.get_leave()
        );

        if self.options.get_initial_line() {
            self.draw(now)?;
        }

        Ok(())
    }

    /// Record one finished iteration, redrawing if enough iterations and time
    /// have passed since the last redraw.
    pub fn tick(&mut self) -> Result<()> {
        match self.phase {
            Phase::Created => return Err(Error::NotStarted),
            Phase::Finished => return Err(Error::Finished),
            Phase::Running => {}
        }

        self.n += 1;

        // The counter is checked first, to spare a clock read.
        if self.n - self.last_print_n < self.options.get_min_iters() {
            return Ok(());
        }

        let now = self.clock.now();
        if now.saturating_sub(self.last_print_t) < self.options.get_min_interval() {
            return Ok(());
        }

        // The final line is left to `finish`, which is about to erase it anyway.
        if Some(self.n) == self.options.get_total() && !self.options.get_leave() {
            return Ok(());
        }

        self.draw(now)
    }

    /// End the session, either erasing the line or leaving it with a newline.
    pub fn finish(&mut self) -> Result<()> {
        match self.phase {
            Phase::Created => return Err(Error::NotStarted),
            Phase::Finished => return Err(Error::Finished),
            Phase::Running => {}
        }

        self.phase = Phase::Finished;
        debug!("finish: n={} last_print_n={}", self.n, self.last_print_n);

        if !self.options.get_leave() {
            return Ok(self.printer.clear()?);
        }

        if self.last_print_n < self.n {
            let now = self.clock.now();
            self.draw(now)?;
        }

        Ok(self.printer.newline()?)
    }

    /// Render and print the line for the current count.
    ///
    /// Counters move before the write, so a failed write never desynchronises
    /// them from what was rendered.
    fn draw(&mut self, now: Duration) -> Result<()> {
        let elapsed = now.saturating_sub(self.start_t).as_secs_f64();
        let line = self.format.line(self.n, self.options.get_total(), elapsed);

        trace!("draw: n={} elapsed={:.3}", self.n, elapsed);
        self.last_print_n = self.n;
        self.last_print_t = now;

        Ok(self.printer.print_status(&line)?)
    }

    /// Iterations ticked so far.
    pub fn count(&self) -> u64 {
        self.n
    }

    /// The count shown by the most recent redraw.
    pub fn last_printed_count(&self) -> u64 {
        self.last_print_n
    }

    /// Where the session is in its lifecycle.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The settings this session was built with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The output stream.
    pub fn get_ref(&self) -> &W {
        self.printer.get_ref()
    }
}

impl<W: Write, K: Clock> Drop for Session<W, K> {
    fn drop(&mut self) {
        if self.phase == Phase::Running {
            if let Err(e) = self.finish() {
                warn!("Failed to finish progress line: {}", e);
            }
        }
    }
}
