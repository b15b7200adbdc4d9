//! Buffer of elements pulled from a lazy source.

use crate::source::Source;
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Cache of every element pulled from a [`Source`], addressed by the
/// element's position in the source.
///
/// The logical length (`pulled()`) only ever grows, and is frozen once the
/// source reports exhaustion. Non-wrapping engines may release elements that
/// no future window can reach; wrapping engines never do, since the whole
/// source is revisited.
///
/// # Example
/// ```
/// use windowing::buffer::PullBuffer;
/// use windowing::source::IterSource;
///
/// let mut source = IterSource::new(vec![1, 2]);
/// let mut buffer = PullBuffer::new();
///
/// assert_eq!(buffer.ensure(1, &mut source), Ok(true));
/// assert_eq!(buffer.get(1), Some(&2));
/// assert_eq!(buffer.ensure(2, &mut source), Ok(false));
/// assert!(buffer.is_exhausted());
/// ```
#[derive(Debug, Clone)]
pub struct PullBuffer<T> {
    data: VecDeque<T>,
    /// Source position of `data[0]`
    base: usize,
    exhausted: bool,
}

impl<T> PullBuffer<T> {
    pub fn new() -> Self {
        PullBuffer {
            data: VecDeque::new(),
            base: 0,
            exhausted: false,
        }
    }

    /// Number of elements pulled from the source so far.
    pub fn pulled(&self) -> usize {
        self.base + self.data.len()
    }

    /// Number of elements currently held in memory.
    pub fn retained(&self) -> usize {
        self.data.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// The fixed wrap modulus: the source length, once it is known and
    /// non-zero.
    pub fn modulus(&self) -> Option<usize> {
        match self.pulled() {
            0 => None,
            len if self.exhausted => Some(len),
            _ => None,
        }
    }

    /// Returns the element at source position `index`, if it is held.
    pub fn get(&self, index: usize) -> Option<&T> {
        index
            .checked_sub(self.base)
            .and_then(|offset| self.data.get(offset))
    }

    /// Pulls one element and appends it.
    ///
    /// # Returns
    /// `Ok(true)` when an element was appended, `Ok(false)` when the source
    /// is (or was already) exhausted.
    ///
    /// # Errors
    /// Propagates the source error. The buffer is left as it was.
    pub fn pull_one<S>(&mut self, source: &mut S) -> Result<bool, S::Error>
    where
        S: Source<Item = T>,
    {
        if self.exhausted {
            return Ok(false);
        }

        match source.pull()? {
            Some(item) => {
                self.data.push_back(item);
                trace!(pulled = self.pulled(), "pulled element");
                Ok(true)
            }
            None => {
                self.exhausted = true;
                debug!(len = self.pulled(), "source exhausted");
                Ok(false)
            }
        }
    }

    /// Pulls until `index` has been reached or the source is exhausted.
    ///
    /// # Returns
    /// Whether source position `index` exists.
    pub fn ensure<S>(&mut self, index: usize, source: &mut S) -> Result<bool, S::Error>
    where
        S: Source<Item = T>,
    {
        while index >= self.pulled() {
            if !self.pull_one(source)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Drops every held element before source position `index`.
    pub fn release_before(&mut self, index: usize) {
        let count = index.saturating_sub(self.base).min(self.data.len());
        if count > 0 {
            self.data.drain(..count);
            self.base += count;
        }
    }
}

impl<T> Default for PullBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}
