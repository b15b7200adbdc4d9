//! Windows over a pull-based source of unknown length.
//!
//! The engine state (buffer, cursor, finished flag) lives in [`WindowState`]
//! and moves through three transitions:
//! - `pull_one`: grow the buffer by one element or discover exhaustion
//! - `fill_window`: assemble the window starting at the cursor
//! - `advance_cursor`: move to the next window start
//!
//! While the source is still producing, wrap-around windows index the
//! buffer directly (it is growing). Once exhaustion is discovered the buffer
//! length becomes the fixed modulus for every later index.

use crate::buffer::PullBuffer;
use crate::cursor;
use crate::error::WindowError;
use crate::pull::Pull;
use crate::source::Source;
use crate::window_spec::WindowSpec;
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// Buffer and cursor of a lazy engine.
#[derive(Debug, Clone)]
pub struct WindowState<T> {
    buffer: PullBuffer<T>,
    cursor: usize,
    finished: bool,
}

impl<T: Clone> WindowState<T> {
    pub fn new() -> Self {
        WindowState {
            buffer: PullBuffer::new(),
            cursor: 0,
            finished: false,
        }
    }

    pub fn buffer(&self) -> &PullBuffer<T> {
        &self.buffer
    }

    /// Start of the next window.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether a non-wrapping engine has emitted its last window.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Pulls one element from `source` into the buffer.
    pub fn pull_one<S>(&mut self, source: &mut S) -> Result<bool, WindowError<S::Error>>
    where
        S: Source<Item = T>,
    {
        self.buffer.pull_one(source).map_err(WindowError::Source)
    }

    /// Assembles the window starting at the cursor, pulling from `source`
    /// only as far as the window reaches.
    ///
    /// Without wrap-around the window is cut short at the end of the source
    /// and may be empty. With wrap-around it is always full.
    ///
    /// # Errors
    /// - [`WindowError::Source`] when a pull fails; the cursor is unchanged.
    /// - [`WindowError::WrapWithoutElements`] when wrapping over an empty
    ///   source.
    pub fn fill_window<S>(
        &mut self,
        spec: &WindowSpec,
        source: &mut S,
    ) -> Result<Vec<T>, WindowError<S::Error>>
    where
        S: Source<Item = T>,
    {
        let mut window = Vec::with_capacity(spec.window_size());

        for offset in 0..spec.window_size() {
            let index = self.cursor + offset;
            let available = self
                .buffer
                .ensure(index, source)
                .map_err(WindowError::Source)?;

            let index = if available {
                index
            } else if spec.wrap() {
                match self.buffer.modulus() {
                    Some(len) => cursor::wrap_index(self.cursor, offset, len),
                    None => return Err(WindowError::WrapWithoutElements),
                }
            } else {
                break;
            };

            if let Some(item) = self.buffer.get(index) {
                window.push(item.clone());
            }
        }

        Ok(window)
    }

    /// Moves the cursor to the start of the next window.
    ///
    /// Wrapping cursors are reduced modulo the source length once it is
    /// known. Non-wrapping engines drop the elements no later window can
    /// reach.
    pub fn advance_cursor(&mut self, spec: &WindowSpec) {
        if spec.wrap() {
            self.cursor = cursor::advance(self.cursor, spec.step_size(), self.buffer.modulus());
        } else {
            self.cursor = cursor::advance(self.cursor, spec.step_size(), None);
            self.buffer.release_before(self.cursor);
        }
    }

    /// Runs one full pull: fill, then advance or finish.
    pub fn next_window<S>(
        &mut self,
        spec: &WindowSpec,
        source: &mut S,
    ) -> Result<Pull<T>, WindowError<S::Error>>
    where
        S: Source<Item = T>,
    {
        if self.finished {
            return Ok(Pull::Finished);
        }

        let was_exhausted = self.buffer.is_exhausted();
        let window = self.fill_window(spec, source)?;

        if window.is_empty() {
            debug!(cursor = self.cursor, "no elements left, finished");
            self.finished = true;
            return Ok(Pull::Finished);
        }

        if spec.wrap() && !was_exhausted && self.buffer.is_exhausted() {
            debug!(len = self.buffer.pulled(), "source length known, wrapping");
        }

        trace!(cursor = self.cursor, size = window.len(), "emitting window");
        self.advance_cursor(spec);
        Ok(Pull::Window(window))
    }
}

impl<T: Clone> Default for WindowState<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Window engine over a [`Source`].
///
/// # Example
/// ```
/// use windowing::lazy::LazyWindows;
/// use windowing::source::IterSource;
/// use windowing::{Pull, WindowSpec};
///
/// let spec = WindowSpec::tumbling(2).unwrap();
/// let mut windows = LazyWindows::new(IterSource::new(1..=3), spec);
///
/// assert_eq!(windows.next_window(), Ok(Pull::Window(vec![1, 2])));
/// assert_eq!(windows.next_window(), Ok(Pull::Window(vec![3])));
/// assert_eq!(windows.next_window(), Ok(Pull::Finished));
/// ```
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct LazyWindows<S: Source> {
    source: S,
    spec: WindowSpec,
    state: WindowState<S::Item>,
    failed: bool,
}

impl<S> LazyWindows<S>
where
    S: Source,
    S::Item: Clone,
{
    /// Creates an engine over `source`. Nothing is pulled until the first
    /// window is requested.
    pub fn new(source: S, spec: WindowSpec) -> Self {
        debug!(%spec, "created source window engine");
        LazyWindows {
            source,
            spec,
            state: WindowState::new(),
            failed: false,
        }
    }

    pub fn spec(&self) -> WindowSpec {
        self.spec
    }

    pub fn state(&self) -> &WindowState<S::Item> {
        &self.state
    }

    /// Number of elements pulled from the source so far.
    pub fn pulled(&self) -> usize {
        self.state.buffer().pulled()
    }

    /// Number of pulled elements still held in memory.
    pub fn buffered(&self) -> usize {
        self.state.buffer().retained()
    }

    pub fn is_exhausted(&self) -> bool {
        self.state.buffer().is_exhausted()
    }

    /// Produces the next window.
    ///
    /// # Errors
    /// Source failures are returned unchanged inside [`WindowError::Source`].
    /// The engine should not be used after one.
    pub fn next_window(&mut self) -> Result<Pull<S::Item>, WindowError<S::Error>> {
        self.state.next_window(&self.spec, &mut self.source)
    }

    /// Gives back the source, positioned after the last element pulled.
    pub fn into_source(self) -> S {
        self.source
    }
}

/// Yields windows until the engine finishes. An error is yielded once, after
/// which iteration stops.
impl<S> Iterator for LazyWindows<S>
where
    S: Source,
    S::Item: Clone,
{
    type Item = Result<Vec<S::Item>, WindowError<S::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.next_window() {
            Ok(pull) => pull.into_window().map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed || self.state.is_finished() {
            (0, Some(0))
        } else {
            (0, None)
        }
    }
}

impl<S> FusedIterator for LazyWindows<S>
where
    S: Source,
    S::Item: Clone,
{
}
