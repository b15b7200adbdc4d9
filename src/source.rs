//! Pull-based element sources.
//!
//! The lazy window engine is not coupled to any particular producer. It only
//! needs something that hands over the next element, reports exhaustion, or
//! fails. Implementations can be:
//! - any in-memory iterator (via [`IterSource`])
//! - an iterator of `Result`s such as `BufRead::lines` (via [`FallibleSource`])
//! - a channel receiver, socket reader or any other hand-written producer

use std::convert::Infallible;

/// A pull-based producer of elements.
pub trait Source {
    type Item;
    type Error;

    /// Pulls the next element.
    ///
    /// # Returns
    /// `Ok(Some(item))` for the next element, `Ok(None)` once the producer is
    /// exhausted.
    ///
    /// # Errors
    /// Returns the producer's own error when a pull fails. Sources should not
    /// have consumed an element when they fail.
    fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error>;
}

impl<S: Source + ?Sized> Source for &mut S {
    type Item = S::Item;
    type Error = S::Error;

    fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        (**self).pull()
    }
}

impl<S: Source + ?Sized> Source for Box<S> {
    type Item = S::Item;
    type Error = S::Error;

    fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        (**self).pull()
    }
}

/// Infallible source over any iterator.
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    iter: I,
}

impl<I: Iterator> IterSource<I> {
    pub fn new<T>(iter: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        IterSource {
            iter: iter.into_iter(),
        }
    }

    /// Gives back the underlying iterator, positioned after the last pull.
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I: Iterator> Source for IterSource<I> {
    type Item = I::Item;
    type Error = Infallible;

    fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        Ok(self.iter.next())
    }
}

/// Source over an iterator of results, surfacing each `Err` as a pull failure.
#[derive(Debug, Clone)]
pub struct FallibleSource<I> {
    iter: I,
}

impl<I> FallibleSource<I> {
    pub fn new<T>(iter: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        FallibleSource {
            iter: iter.into_iter(),
        }
    }
}

impl<I, T, E> Source for FallibleSource<I>
where
    I: Iterator<Item = Result<T, E>>,
{
    type Item = T;
    type Error = E;

    fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        self.iter.next().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iter_source_pulls_in_order_then_exhausts() {
        let mut source = IterSource::new(vec![1, 2]);
        assert_eq!(source.pull(), Ok(Some(1)));
        assert_eq!(source.pull(), Ok(Some(2)));
        assert_eq!(source.pull(), Ok(None));
        assert_eq!(source.pull(), Ok(None));
    }

    #[test]
    fn fallible_source_surfaces_errors() {
        let items: Vec<Result<i32, String>> = vec![Ok(1), Err("broken".to_string()), Ok(3)];
        let mut source = FallibleSource::new(items);
        assert_eq!(source.pull(), Ok(Some(1)));
        assert_eq!(source.pull(), Err("broken".to_string()));
        assert_eq!(source.pull(), Ok(Some(3)));
        assert_eq!(source.pull(), Ok(None));
    }

    #[test]
    fn borrowed_source_advances_owner() {
        let mut source = IterSource::new(1..=3);
        {
            let mut borrowed = &mut source;
            assert_eq!(Source::pull(&mut borrowed), Ok(Some(1)));
        }
        assert_eq!(source.pull(), Ok(Some(2)));
        assert_eq!(source.into_inner().next(), Some(3));
    }
}
