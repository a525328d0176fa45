//! Core traits and types for lexsift sorting.
//!
//! This module defines:
//! - [`ElementAccessor`]: The trait collections implement so the index-based
//!   sorts can reorder references to their elements without moving the data.
//! - [`default_cmp`]: The default numeric ordering used by the non-generic
//!   sort entry points.

use std::cmp::Ordering;
use std::collections::VecDeque;

/// A trait for read-only, indexed access to the elements of a collection.
///
/// The index-based sorts ([`sort_indices`](crate::algo::sort_indices)) never
/// move or clone elements; they only permute indices. Ownership of the
/// underlying data stays with the caller for the whole sort. Any collection
/// with O(1) random access is a suitable implementor.
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use lexsift::core::ElementAccessor;
///
/// struct Scores {
///     data: Vec<f32>,
/// }
///
/// impl ElementAccessor for Scores {
///     type Elem = f32;
///
///     fn get(&self, index: usize) -> &f32 {
///         &self.data[index]
///     }
///
///     fn len(&self) -> usize {
///         self.data.len()
///     }
/// }
/// ```
pub trait ElementAccessor {
    /// The element type the comparator receives.
    type Elem: ?Sized;

    /// Returns a reference to the element at the given index.
    fn get(&self, index: usize) -> &Self::Elem;

    /// Returns the number of elements in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> ElementAccessor for [T] {
    type Elem = T;

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_slice()).
impl<T> ElementAccessor for Vec<T> {
    type Elem = T;

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// VecDeque provides O(1) random access, so it is suitable as well.
impl<T> ElementAccessor for VecDeque<T> {
    type Elem = T;

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn len(&self) -> usize {
        self.len()
    }
}

/// Default ordering for the non-generic sort entry points.
///
/// Uses [`PartialOrd`] so that float slices sort without wrapper types;
/// incomparable pairs (NaN) are treated as equal, which keeps the sort
/// total but leaves NaN positions unspecified.
#[inline]
pub fn default_cmp<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}
