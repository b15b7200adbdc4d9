//! Windows over an in-memory slice.

use crate::cursor;
use crate::pull::Pull;
use crate::window_spec::{ConfigError, WindowSpec};
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// Window engine over a slice of known length.
///
/// No buffering is needed: every window is copied straight out of the
/// slice.
///
/// # Example
/// ```
/// use windowing::eager::EagerWindows;
/// use windowing::WindowSpec;
///
/// let data = [1, 2, 3, 4, 5];
/// let spec = WindowSpec::hopping(3, 2).unwrap();
/// let windows: Vec<Vec<i32>> = EagerWindows::new(&data, spec).unwrap().collect();
///
/// assert_eq!(windows, vec![vec![1, 2, 3], vec![3, 4, 5], vec![5]]);
/// ```
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct EagerWindows<'a, T> {
    source: &'a [T],
    spec: WindowSpec,
    cursor: usize,
}

impl<'a, T: Clone> EagerWindows<'a, T> {
    /// Creates an engine over `source`.
    ///
    /// # Errors
    /// Returns [`ConfigError::WindowExceedsSource`] when the window is larger
    /// than the slice (which includes every empty slice).
    pub fn new(source: &'a [T], spec: WindowSpec) -> Result<Self, ConfigError> {
        spec.check_source_len(source.len())?;
        debug!(len = source.len(), %spec, "created slice window engine");

        Ok(EagerWindows {
            source,
            spec,
            cursor: 0,
        })
    }

    pub fn spec(&self) -> WindowSpec {
        self.spec
    }

    /// Start of the next window.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Produces the next window.
    ///
    /// Without wrap-around the last window may be shorter than the window
    /// size; after it every call returns [`Pull::Finished`]. With wrap-around
    /// this never finishes.
    pub fn next_window(&mut self) -> Pull<T> {
        let len = self.source.len();

        if self.spec.wrap() {
            let window: Vec<T> = (0..self.spec.window_size())
                .map(|offset| self.source[cursor::wrap_index(self.cursor, offset, len)].clone())
                .collect();
            trace!(cursor = self.cursor, "emitting wrapped window");
            self.cursor = cursor::advance(self.cursor, self.spec.step_size(), Some(len));
            return Pull::Window(window);
        }

        let size = cursor::clipped_len(len, self.cursor, self.spec.window_size());
        if size == 0 {
            return Pull::Finished;
        }

        let window = self.source[self.cursor..self.cursor + size].to_vec();
        trace!(cursor = self.cursor, size, "emitting window");
        self.cursor = cursor::advance(self.cursor, self.spec.step_size(), None);
        Pull::Window(window)
    }

    /// Number of windows left, or `None` when wrapping (unbounded).
    pub fn remaining(&self) -> Option<usize> {
        if self.spec.wrap() {
            return None;
        }
        Some(cursor::window_count(
            self.source.len().saturating_sub(self.cursor),
            self.spec.step_size(),
        ))
    }
}

impl<'a, T: Clone> Iterator for EagerWindows<'a, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_window().into_window()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl<'a, T: Clone> FusedIterator for EagerWindows<'a, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(data: &[i32], window_size: usize, step_size: usize, wrap: bool) -> EagerWindows<'_, i32> {
        EagerWindows::new(data, WindowSpec::new(window_size, step_size, wrap).unwrap()).unwrap()
    }

    #[test]
    fn rejects_window_larger_than_source() {
        let data = [1, 2];
        let result = EagerWindows::new(&data, WindowSpec::sliding(3).unwrap());
        assert_eq!(
            result.unwrap_err(),
            ConfigError::WindowExceedsSource {
                window_size: 3,
                source_len: 2
            }
        );

        let empty: [i32; 0] = [];
        assert!(EagerWindows::new(&empty, WindowSpec::sliding(1).unwrap()).is_err());
    }

    #[test]
    fn hopping_emits_partial_tail_then_finishes() {
        let data = [1, 2, 3, 4, 5];
        let mut windows = engine(&data, 3, 2, false);

        assert_eq!(windows.next_window(), Pull::Window(vec![1, 2, 3]));
        assert_eq!(windows.next_window(), Pull::Window(vec![3, 4, 5]));
        assert_eq!(windows.next_window(), Pull::Window(vec![5]));
        assert_eq!(windows.next_window(), Pull::Finished);
        assert_eq!(windows.next_window(), Pull::Finished);
    }

    #[test]
    fn tumbling_exact_fit_has_no_empty_tail() {
        let data = [1, 2, 3, 4, 5, 6];
        let mut windows = engine(&data, 3, 3, false);

        assert_eq!(windows.next_window(), Pull::Window(vec![1, 2, 3]));
        assert_eq!(windows.next_window(), Pull::Window(vec![4, 5, 6]));
        assert_eq!(windows.next_window(), Pull::Finished);
    }

    #[test]
    fn wrap_cycles_over_source() {
        let data = [1, 2, 3, 4, 5];
        let mut windows = engine(&data, 3, 2, true);

        let emitted: Vec<Vec<i32>> = (0..6).map(|_| windows.next_window().into_window().unwrap()).collect();
        assert_eq!(
            emitted,
            vec![
                vec![1, 2, 3],
                vec![3, 4, 5],
                vec![5, 1, 2],
                vec![2, 3, 4],
                vec![4, 5, 1],
                vec![1, 2, 3],
            ]
        );
        assert!(windows.cursor() < data.len());
    }

    #[test]
    fn wrap_with_window_equal_to_source() {
        let data = [1, 2, 3];
        let mut windows = engine(&data, 3, 1, true);
        assert_eq!(windows.next(), Some(vec![1, 2, 3]));
        assert_eq!(windows.next(), Some(vec![2, 3, 1]));
        assert_eq!(windows.next(), Some(vec![3, 1, 2]));
        assert_eq!(windows.next(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn remaining_tracks_progress() {
        let data = [1, 2, 3, 4, 5];
        let mut windows = engine(&data, 3, 2, false);
        assert_eq!(windows.remaining(), Some(3));
        assert_eq!(windows.size_hint(), (3, Some(3)));
        windows.next();
        windows.next();
        assert_eq!(windows.remaining(), Some(1));
        windows.next();
        assert_eq!(windows.remaining(), Some(0));
        assert_eq!(windows.next(), None);

        let wrapping = engine(&data, 3, 2, true);
        assert_eq!(wrapping.remaining(), None);
        assert_eq!(wrapping.size_hint(), (usize::MAX, None));
    }

    #[test]
    fn sliding_yields_overlapping_windows() {
        let data = [1, 2, 3, 4];
        let windows: Vec<Vec<i32>> = engine(&data, 2, 1, false).collect();
        assert_eq!(windows, vec![vec![1, 2], vec![2, 3], vec![3, 4], vec![4]]);
    }
}
