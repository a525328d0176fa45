//! In-place sorting algorithms (comparator-driven quicksort and selection sort).
//!
//! Two families of entry points:
//! - Slice sorts ([`sort_by`], [`quick_sort`], [`selection_sort`]) that reorder
//!   a `&mut [T]` directly.
//! - An index sort ([`sort_indices`]) that leaves the collection untouched and
//!   returns the permutation that would order it, for callers that must not
//!   move their data.
//!
//! The quicksort is the classic first-element-pivot partition exchange. No
//! pivot randomization or depth limiting is applied: an already-sorted or
//! reverse-sorted input degrades to O(n) recursion depth and O(n²)
//! comparisons. Neither sort is stable, and comparators must describe a
//! total order for the result to be defined.

use crate::core::{ElementAccessor, default_cmp};
use std::cmp::Ordering;

/// Sorts a slice in place with a caller-supplied comparator.
///
/// Partition-exchange sort using the first element of each partition as the
/// pivot: the left cursor advances while elements compare `<=` pivot, the
/// right cursor retreats while elements compare `>` pivot, out-of-order
/// pairs are swapped, and once the cursors cross the pivot is swapped into
/// the partition boundary. Both sides are then sorted recursively, excluding
/// the pivot position.
///
/// Slices with fewer than two elements are left untouched.
///
/// # Examples
///
/// ```
/// use lexsift::sort_by;
///
/// let mut data = vec![3, 1, 4, 1, 5, 9, 2, 6];
/// sort_by(&mut data, |a, b| b.cmp(a)); // descending
///
/// assert_eq!(data, vec![9, 6, 5, 4, 3, 2, 1, 1]);
/// ```
pub fn sort_by<T, F>(data: &mut [T], cmp: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    if data.len() < 2 {
        return;
    }
    quick_sort_range(data, 0, data.len() - 1, &cmp);
}

/// Sorts a slice in place in increasing order of the default numeric
/// ordering ([`default_cmp`]).
///
/// Convenience wrapper around [`sort_by`].
///
/// # Examples
///
/// ```
/// use lexsift::quick_sort;
///
/// let mut data = vec![2.5f32, 0.5, 1.5];
/// quick_sort(&mut data);
///
/// assert_eq!(data, vec![0.5, 1.5, 2.5]);
/// ```
pub fn quick_sort<T: PartialOrd>(data: &mut [T]) {
    sort_by(data, default_cmp);
}

/// Sorts a slice in place by repeated minimum selection.
///
/// Reference implementation: scans the unsorted tail for its minimum (under
/// [`default_cmp`]) and swaps it into position. O(n²) comparisons, at most
/// n - 1 swaps, no extra storage. Slices with fewer than two elements are
/// left untouched.
///
/// # Examples
///
/// ```
/// use lexsift::selection_sort;
///
/// let mut data = vec![3, 1, 2];
/// selection_sort(&mut data);
///
/// assert_eq!(data, vec![1, 2, 3]);
/// ```
pub fn selection_sort<T: PartialOrd>(data: &mut [T]) {
    if data.len() < 2 {
        return;
    }
    for i in 0..data.len() - 1 {
        let mut min = i;
        for j in i + 1..data.len() {
            if default_cmp(&data[j], &data[min]) == Ordering::Less {
                min = j;
            }
        }
        if min != i {
            data.swap(i, min);
        }
    }
}

/// Performs an index-based sort on the provided collection.
///
/// This function does not modify the collection. Instead, it returns a
/// `Vec<usize>` of indices such that visiting the elements in index order
/// yields the order defined by `cmp`. The collection must implement
/// [`ElementAccessor`], which abstracts indexed element access.
///
/// Internally runs the same first-pivot quicksort as [`sort_by`] over the
/// index array, so the degenerate-input caveat from the module docs applies
/// here too.
///
/// # Examples
///
/// ```
/// use lexsift::sort_indices;
///
/// let data = vec!["banana", "apple", "cherry"];
/// let indices = sort_indices(&data, |a, b| a.cmp(b));
///
/// assert_eq!(indices, vec![1, 0, 2]); // apple, banana, cherry
/// ```
pub fn sort_indices<C, F>(provider: &C, cmp: F) -> Vec<usize>
where
    C: ElementAccessor + ?Sized,
    F: Fn(&C::Elem, &C::Elem) -> Ordering,
{
    let len = provider.len();
    let mut indices: Vec<usize> = (0..len).collect();
    if len > 1 {
        quick_sort_range(&mut indices, 0, len - 1, &|a: &usize, b: &usize| {
            cmp(provider.get(*a), provider.get(*b))
        });
    }
    indices
}

/// Recursive partition step over the inclusive range `[left, right]`.
///
/// Invariant on exit of the scan loop: `j` is the last position holding an
/// element `<=` pivot, so swapping the pivot to `j` finalizes its position.
fn quick_sort_range<T, F>(data: &mut [T], left: usize, right: usize, cmp: &F)
where
    F: Fn(&T, &T) -> Ordering,
{
    if left >= right {
        return;
    }

    let mut i = left + 1;
    let mut j = right;

    while i <= j {
        while i <= right && cmp(&data[i], &data[left]) != Ordering::Greater {
            i += 1;
        }
        while j > left && cmp(&data[j], &data[left]) == Ordering::Greater {
            j -= 1;
        }
        if i < j {
            data.swap(i, j);
        }
    }
    data.swap(left, j);

    if j > left + 1 {
        quick_sort_range(data, left, j - 1, cmp);
    }
    if j + 1 < right {
        quick_sort_range(data, j + 1, right, cmp);
    }
}
