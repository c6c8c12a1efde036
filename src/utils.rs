use alloc::vec::Vec;

use crate::error::Result;
use crate::iter::{Converted, Filtered};

/// Method-call form of the crate's free functions, for anything that
/// derefs to a slice.
pub trait SeqExt<T> {
    fn has_value(&self, to_check: &T) -> bool
    where
        T: PartialEq;

    fn index_of(&self, to_check: &T) -> Option<usize>
    where
        T: PartialEq;

    fn find_value(&self, to_find: &T) -> Result<&T>
    where
        T: PartialEq;

    fn find_by<F>(&self, matches: F) -> Result<&T>
    where
        F: FnMut(&T) -> bool;

    fn filter_by<F>(&self, matches: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool;

    fn filtered<F>(&self, matches: F) -> Filtered<'_, T, F>
    where
        F: FnMut(&T) -> bool;

    fn convert<P, F>(&self, convert: F) -> Vec<P>
    where
        F: FnMut(&T) -> P;

    fn converted<P, F>(&self, convert: F) -> Converted<'_, T, F>
    where
        F: FnMut(&T) -> P;
}

impl<T> SeqExt<T> for [T] {
    fn has_value(&self, value_to_check: &T) -> bool
    where
        T: PartialEq,
    {
        crate::has_value(self, value_to_check)
    }

    fn index_of(&self, value_to_check: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        crate::index_of(self, value_to_check)
    }

    fn find_value(&self, to_find: &T) -> Result<&T>
    where
        T: PartialEq,
    {
        crate::find(self, to_find)
    }

    fn find_by<F>(&self, matches: F) -> Result<&T>
    where
        F: FnMut(&T) -> bool,
    {
        crate::find_func(self, matches)
    }

    fn filter_by<F>(&self, matches: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        crate::filter(self, matches)
    }

    fn filtered<F>(&self, matches: F) -> Filtered<'_, T, F>
    where
        F: FnMut(&T) -> bool,
    {
        crate::filtered(self, matches)
    }

    fn convert<P, F>(&self, convert: F) -> Vec<P>
    where
        F: FnMut(&T) -> P,
    {
        crate::convert(self, convert)
    }

    fn converted<P, F>(&self, convert: F) -> Converted<'_, T, F>
    where
        F: FnMut(&T) -> P,
    {
        crate::converted(self, convert)
    }
}
