//! Entry points for building window engines.
//!
//! [`WindowEngine`] takes the raw `(window_size, step_size, wrap)` triple and
//! picks the engine for the kind of source. The [`Windowed`] and
//! [`WindowedIter`] extension traits offer the same from a slice or an
//! iterator with a prepared [`WindowSpec`].

use crate::eager::EagerWindows;
use crate::lazy::LazyWindows;
use crate::source::{IterSource, Source};
use crate::window_spec::{ConfigError, WindowSpec};

/// Constructors for both window engines.
///
/// # Example
/// ```
/// use windowing::WindowEngine;
///
/// let data = [1, 2, 3, 4, 5, 6, 7];
/// let windows: Vec<Vec<i32>> = WindowEngine::over_slice(&data, 3, 3, true)
///     .unwrap()
///     .take(3)
///     .collect();
///
/// assert_eq!(windows, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 1, 2]]);
/// ```
pub struct WindowEngine;

impl WindowEngine {
    /// Windows over a slice.
    ///
    /// # Errors
    /// Fails when the step or window bounds are violated, or when the window
    /// is larger than the slice.
    pub fn over_slice<T: Clone>(
        source: &[T],
        window_size: usize,
        step_size: usize,
        wrap: bool,
    ) -> Result<EagerWindows<'_, T>, ConfigError> {
        let spec = WindowSpec::new(window_size, step_size, wrap)?;
        EagerWindows::new(source, spec)
    }

    /// Windows over a pull-based source.
    ///
    /// # Errors
    /// Fails when the step or window bounds are violated. The source length
    /// is unknown, so the window may be larger than the source.
    pub fn over_source<S>(
        source: S,
        window_size: usize,
        step_size: usize,
        wrap: bool,
    ) -> Result<LazyWindows<S>, ConfigError>
    where
        S: Source,
        S::Item: Clone,
    {
        let spec = WindowSpec::new(window_size, step_size, wrap)?;
        Ok(LazyWindows::new(source, spec))
    }

    /// Windows over any iterator, pulled lazily.
    pub fn over_iter<I>(
        iter: I,
        window_size: usize,
        step_size: usize,
        wrap: bool,
    ) -> Result<LazyWindows<IterSource<I::IntoIter>>, ConfigError>
    where
        I: IntoIterator,
        I::Item: Clone,
    {
        Self::over_source(IterSource::new(iter), window_size, step_size, wrap)
    }
}

/// Windowing for slices.
pub trait Windowed<T> {
    /// Windows over `self` with `spec`.
    ///
    /// # Errors
    /// Fails when the window is larger than `self`.
    fn windowed(&self, spec: WindowSpec) -> Result<EagerWindows<'_, T>, ConfigError>;
}

impl<T: Clone> Windowed<T> for [T] {
    fn windowed(&self, spec: WindowSpec) -> Result<EagerWindows<'_, T>, ConfigError> {
        EagerWindows::new(self, spec)
    }
}

/// Windowing for iterators.
pub trait WindowedIter: Iterator + Sized {
    fn windowed(self, spec: WindowSpec) -> LazyWindows<IterSource<Self>>
    where
        Self::Item: Clone,
    {
        LazyWindows::new(IterSource::new(self), spec)
    }
}

impl<I: Iterator> WindowedIter for I {}
