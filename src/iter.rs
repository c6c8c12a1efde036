use core::fmt::{Debug, Formatter};
use core::iter::FusedIterator;
use core::slice;

/// Lazy view over the elements of a slice that satisfy a predicate.
///
/// The predicate runs only when `next` is called, and only on as many
/// elements as it takes to produce the next match.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Filtered<'a, T, F> {
    inner: slice::Iter<'a, T>,
    matches: F,
}

impl<'a, T, F> Filtered<'a, T, F>
where
    F: FnMut(&T) -> bool,
{
    pub(crate) fn new(slice: &'a [T], matches: F) -> Self {
        Self {
            inner: slice.iter(),
            matches,
        }
    }
}

impl<T: Debug, F> Debug for Filtered<'_, T, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Filtered")
            .field("remaining", &self.inner.as_slice())
            .finish_non_exhaustive()
    }
}

impl<'a, T, F> Iterator for Filtered<'a, T, F>
where
    F: FnMut(&T) -> bool,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        for value in self.inner.by_ref() {
            if (self.matches)(value) {
                return Some(value);
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.inner.len()))
    }
}

impl<T, F> FusedIterator for Filtered<'_, T, F> where F: FnMut(&T) -> bool {}

/// Lazy one-to-one conversion of every element of a slice.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Converted<'a, T, F> {
    inner: slice::Iter<'a, T>,
    convert: F,
}

impl<'a, T, F> Converted<'a, T, F> {
    pub(crate) fn new<P>(slice: &'a [T], convert: F) -> Self
    where
        F: FnMut(&T) -> P,
    {
        Self {
            inner: slice.iter(),
            convert,
        }
    }
}

impl<T: Debug, F> Debug for Converted<'_, T, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Converted")
            .field("remaining", &self.inner.as_slice())
            .finish_non_exhaustive()
    }
}

impl<T, P, F> Iterator for Converted<'_, T, F>
where
    F: FnMut(&T) -> P,
{
    type Item = P;

    #[inline]
    fn next(&mut self) -> Option<P> {
        self.inner.next().map(&mut self.convert)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, P, F> ExactSizeIterator for Converted<'_, T, F> where F: FnMut(&T) -> P {}

impl<T, P, F> FusedIterator for Converted<'_, T, F> where F: FnMut(&T) -> P {}
