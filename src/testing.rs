#![allow(dead_code)]

use crate::source::Source;
use std::convert::Infallible;

/// Test helper: infallible source that counts how often it was pulled.
pub(crate) struct CountingSource<I> {
    iter: I,
    pulls: usize,
}

impl<I: Iterator> CountingSource<I> {
    pub(crate) fn new<T: IntoIterator<IntoIter = I>>(iter: T) -> Self {
        CountingSource {
            iter: iter.into_iter(),
            pulls: 0,
        }
    }

    /// Number of successful pulls, not counting the one reporting exhaustion.
    pub(crate) fn pulls(&self) -> usize {
        self.pulls
    }
}

impl<I: Iterator> Source for CountingSource<I> {
    type Item = I::Item;
    type Error = Infallible;

    fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        let item = self.iter.next();
        if item.is_some() {
            self.pulls += 1;
        }
        Ok(item)
    }
}

/// Test helper: yields `ok_count` ascending integers, then fails every pull.
pub(crate) struct FailingSource {
    next: usize,
    ok_count: usize,
}

impl FailingSource {
    pub(crate) fn new(ok_count: usize) -> Self {
        FailingSource { next: 0, ok_count }
    }
}

impl Source for FailingSource {
    type Item = usize;
    type Error = std::io::Error;

    fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        if self.next >= self.ok_count {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "producer went away",
            ));
        }
        self.next += 1;
        Ok(Some(self.next - 1))
    }
}

/// Test helper: every non-wrapping window a slice of `data` should produce,
/// computed by plain slicing.
pub(crate) fn expected_windows<T: Clone>(data: &[T], window_size: usize, step_size: usize) -> Vec<Vec<T>> {
    (0..data.len())
        .step_by(step_size)
        .map(|start| data[start..(start + window_size).min(data.len())].to_vec())
        .collect()
}

/// Test helper: the wrapping window starting at `start`, computed by
/// cycling the data.
pub(crate) fn expected_wrapped_window<T: Clone>(data: &[T], start: usize, window_size: usize) -> Vec<T> {
    data.iter()
        .cycle()
        .skip(start % data.len())
        .take(window_size)
        .cloned()
        .collect()
}
