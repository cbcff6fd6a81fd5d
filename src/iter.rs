//! Metering for iterators and collections.
//!
//! [`MeterIteratorExt`] attaches a session to any [`Iterator`]:
//!
//! ```no_run
//! use tallybar::MeterIteratorExt;
//!
//! for _ in (0..1000).meter_desc("Crunching") {
//!     // ...
//! }
//! ```
//!
//! When no total is configured, the iterator's [`Iterator::size_hint`] supplies
//! one if it is exact. Otherwise the total is unknown and no bar is drawn.
//!
//! [`Metered`] does the same for a collection that can be iterated more than
//! once, starting a fresh session on every pass.

use crate::clock::{Clock, SystemClock};
use crate::error::Error;
use crate::options::Options;
use crate::session::{Phase, Session};
use compact_str::CompactString;
use log::warn;
use std::io::{self, Stderr, Write};

/// An iterator that meters the items it yields.
///
/// The session starts on the first call to `next`. An item is counted once
/// the consumer asks for the one after it, so the time spent processing it is
/// included. The session finishes when the inner iterator runs dry, or when
/// this adapter is dropped early, in which case the item in flight is not
/// counted.
///
/// `next` cannot report errors, so a failed write is kept aside and metering
/// carries on. Check [`MeterIter::take_error`] afterwards if it matters,
/// iterating through [`Iterator::by_ref`] to keep hold of the adapter.
pub struct MeterIter<I, W: Write = Stderr, K: Clock = SystemClock> {
    iter: I,
    session: Session<W, K>,
    /// The last item handed out has yet to be counted.
    pending: bool,
    error: Option<Error>,
}

impl<I, W: Write, K: Clock> MeterIter<I, W, K> {
    /// Wrap `iter`, metering it with `session`.
    ///
    /// Note: This is usually constructed via [`MeterIteratorExt`] methods.
    pub fn new(iter: I, session: Session<W, K>) -> MeterIter<I, W, K> {
        MeterIter {
            iter,
            session,
            pending: false,
            error: None,
        }
    }

    /// The session doing the metering.
    pub fn session(&self) -> &Session<W, K> {
        &self.session
    }

    /// The first write error met so far, if any.
    pub fn take_error(&mut self) -> Option<Error> {
        self.error.take()
    }

    fn keep(&mut self, result: crate::Result<()>) {
        if let Err(e) = result {
            warn!("Progress line not updated: {}", e);
            self.error.get_or_insert(e);
        }
    }
}

impl<I: Iterator, W: Write, K: Clock> Iterator for MeterIter<I, W, K> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.session.phase() {
            Phase::Finished => return None,
            Phase::Created => {
                let started = self.session.start();
                self.keep(started);
            }
            Phase::Running => {}
        }

        if self.pending {
            self.pending = false;
            let ticked = self.session.tick();
            self.keep(ticked);
        }

        match self.iter.next() {
            Some(item) => {
                self.pending = true;
                Some(item)
            }
            None => {
                let finished = self.session.finish();
                self.keep(finished);
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.session.phase() {
            Phase::Finished => (0, Some(0)),
            _ => self.iter.size_hint(),
        }
    }
}

/// Extension trait to meter any [`Iterator`].
///
/// Items are counted when the next one is requested, so adapters that stop
/// early, such as [`Iterator::take`], [`Iterator::find`], [`Iterator::any`]
/// or [`Iterator::position`], leave the last item they looked at uncounted.
/// Place them before the meter to have every item counted:
///
/// ```no_run
/// use tallybar::MeterIteratorExt;
///
/// let firsts: Vec<_> = (0..100).take(3).meter().collect();
/// ```
pub trait MeterIteratorExt: Sized {
    /// Meter to standard error with default settings.
    fn meter(self) -> MeterIter<Self>;

    /// Meter to standard error, with a description before the meter.
    fn meter_desc(self, desc: impl Into<CompactString>) -> MeterIter<Self>;

    /// Meter to standard error with the given settings.
    fn meter_with(self, options: Options) -> MeterIter<Self>;

    /// Meter to any stream, against any clock.
    fn meter_to<W: Write, K: Clock>(
        self,
        options: Options,
        output: W,
        clock: K,
    ) -> MeterIter<Self, W, K>;
}

impl<I: Iterator> MeterIteratorExt for I {
    fn meter(self) -> MeterIter<Self> {
        self.meter_with(Options::new())
    }

    fn meter_desc(self, desc: impl Into<CompactString>) -> MeterIter<Self> {
        self.meter_with(Options::new().desc(desc))
    }

    fn meter_with(self, options: Options) -> MeterIter<Self> {
        self.meter_to(options, io::stderr(), SystemClock::new())
    }

    fn meter_to<W: Write, K: Clock>(
        self,
        options: Options,
        output: W,
        clock: K,
    ) -> MeterIter<Self, W, K> {
        let options = options.or_size_hint(self.size_hint());
        MeterIter::new(self, Session::new(options, output, clock))
    }
}

/// A collection whose every pass is metered.
///
/// The collection itself is never modified; `Metered` only holds it alongside
/// the settings for each pass.
///
/// ```no_run
/// use tallybar::{Metered, Options};
///
/// let files = Metered::new(vec!["a.txt", "b.txt"], Options::new().leave(true));
///
/// for _file in &files {
///     // ...
/// }
/// // A second pass draws a second meter.
/// for _file in &files {
///     // ...
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Metered<C> {
    inner: C,
    options: Options,
}

impl<C> Metered<C> {
    /// Pair a collection with the settings for its passes.
    pub fn new(inner: C, options: Options) -> Metered<C> {
        Metered { inner, options }
    }

    /// The settings used on every pass.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The wrapped collection.
    pub fn get_ref(&self) -> &C {
        &self.inner
    }

    /// Give back the wrapped collection.
    pub fn into_inner(self) -> C {
        self.inner
    }

    /// A metered pass over the collection, drawn to standard error.
    pub fn iter<'a>(&'a self) -> MeterIter<<&'a C as IntoIterator>::IntoIter>
    where
        &'a C: IntoIterator,
    {
        self.iter_to(io::stderr(), SystemClock::new())
    }

    /// A metered pass over the collection, drawn to `output`.
    pub fn iter_to<'a, W: Write, K: Clock>(
        &'a self,
        output: W,
        clock: K,
    ) -> MeterIter<<&'a C as IntoIterator>::IntoIter, W, K>
    where
        &'a C: IntoIterator,
    {
        (&self.inner)
            .into_iter()
            .meter_to(self.options.clone(), output, clock)
    }
}

impl<'a, C> IntoIterator for &'a Metered<C>
where
    &'a C: IntoIterator,
{
    type Item = <&'a C as IntoIterator>::Item;
    type IntoIter = MeterIter<<&'a C as IntoIterator>::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<C: IntoIterator> IntoIterator for Metered<C> {
    type Item = C::Item;
    type IntoIter = MeterIter<C::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter().meter_with(self.options)
    }
}
