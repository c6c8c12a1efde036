#![no_std]

//! Find, filter and convert helpers over slices.
//!
//! Every function takes a borrowed slice, scans it front to back, and never
//! mutates it. `filtered` and `converted` are the lazy building blocks that
//! `filter` and `convert` collect into a fresh `Vec`.

extern crate alloc;

mod error;
mod iter;
mod utils;

use alloc::vec::Vec;

pub use crate::error::{NotFound, Result};
pub use crate::iter::{Converted, Filtered};
pub use crate::utils::SeqExt;

#[inline]
pub fn index_of<T: PartialEq>(slice: &[T], value: &T) -> Option<usize> {
    slice.iter().position(|candidate| candidate == value)
}

#[inline]
pub fn index_of_func<T, F>(slice: &[T], matches: F) -> Option<usize>
where
    F: FnMut(&T) -> bool,
{
    slice.iter().position(matches)
}

#[inline]
pub fn has_value<T: PartialEq>(slice: &[T], value: &T) -> bool {
    index_of(slice, value).is_some()
}

/// Returns the first element equal to `value`.
///
/// # Errors
///
/// [`NotFound`] if no element compares equal, including on an empty slice.
pub fn find<'a, T: PartialEq>(slice: &'a [T], value: &T) -> Result<&'a T> {
    match index_of(slice, value) {
        Some(idx) => Ok(&slice[idx]),
        None => {
            log::trace!("find: no match among {} elements", slice.len());
            Err(NotFound)
        }
    }
}

/// Returns the first element for which `matches` is true. The predicate is
/// not called on anything after that element.
///
/// # Errors
///
/// [`NotFound`] if no element satisfies `matches`, including on an empty slice.
pub fn find_func<T, F>(slice: &[T], matches: F) -> Result<&T>
where
    F: FnMut(&T) -> bool,
{
    match index_of_func(slice, matches) {
        Some(idx) => Ok(&slice[idx]),
        None => {
            log::trace!("find_func: no match among {} elements", slice.len());
            Err(NotFound)
        }
    }
}

/// Lazily yields the elements of `slice` that satisfy `matches`, in order.
pub fn filtered<T, F>(slice: &[T], matches: F) -> Filtered<'_, T, F>
where
    F: FnMut(&T) -> bool,
{
    Filtered::new(slice, matches)
}

/// Returns a new `Vec` holding clones of the elements that satisfy `matches`.
pub fn filter<T, F>(slice: &[T], matches: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let mut out = Vec::with_capacity(slice.len());
    out.extend(filtered(slice, matches).cloned());
    out
}

/// Lazily yields `convert(element)` for every element, in order.
pub fn converted<T, P, F>(slice: &[T], convert: F) -> Converted<'_, T, F>
where
    F: FnMut(&T) -> P,
{
    Converted::new(slice, convert)
}

pub fn convert<T, P, F>(slice: &[T], convert: F) -> Vec<P>
where
    F: FnMut(&T) -> P,
{
    let mut out = Vec::with_capacity(slice.len());
    out.extend(converted(slice, convert));
    out
}
