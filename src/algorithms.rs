//! Classical comparison sorts
//!
//! Every algorithm reorders a caller-supplied slice in place and takes an
//! explicit comparison function. Callers wanting the element's natural
//! ordering go through [`SortAlgorithm::sort`], which passes `Ord::cmp`.

use crate::error::ShapeSortError;
use itertools::Itertools;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
    Heap,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 6] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Insertion,
        SortAlgorithm::Selection,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
    ];

    /// Sort `data` in place with the given comparison
    pub fn sort_by<T, F>(self, data: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            SortAlgorithm::Bubble => bubble_sort_by(data, compare),
            SortAlgorithm::Insertion => insertion_sort_by(data, compare),
            SortAlgorithm::Selection => selection_sort_by(data, compare),
            SortAlgorithm::Merge => merge_sort_by(data, compare),
            SortAlgorithm::Quick => quick_sort_by(data, compare),
            SortAlgorithm::Heap => heap_sort_by(data, compare),
        }
    }

    /// Sort `data` in place by its natural ordering
    pub fn sort<T: Ord + Clone>(self, data: &mut [T]) {
        self.sort_by(data, T::cmp)
    }

    /// Whether equal elements keep their input order
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            SortAlgorithm::Bubble | SortAlgorithm::Insertion | SortAlgorithm::Merge
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble",
            SortAlgorithm::Insertion => "Insertion",
            SortAlgorithm::Selection => "Selection",
            SortAlgorithm::Merge => "Merge",
            SortAlgorithm::Quick => "Quick",
            SortAlgorithm::Heap => "Heap",
        }
    }
}

impl FromStr for SortAlgorithm {
    type Err = ShapeSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "b" | "bubble" => Ok(SortAlgorithm::Bubble),
            "i" | "insertion" => Ok(SortAlgorithm::Insertion),
            "s" | "selection" => Ok(SortAlgorithm::Selection),
            "m" | "merge" => Ok(SortAlgorithm::Merge),
            "q" | "quick" => Ok(SortAlgorithm::Quick),
            "h" | "heap" => Ok(SortAlgorithm::Heap),
            _ => Err(ShapeSortError::unknown_algorithm(s)),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Check that every adjacent pair is in order under `compare`
pub fn is_sorted_by<T, F>(data: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    data.iter()
        .tuple_windows()
        .all(|(a, b)| compare(a, b) != Ordering::Greater)
}

/// Bubble sort with early exit when a pass makes no swap (O(n) on sorted input)
pub fn bubble_sort_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = data.len();
    for pass in 0..len.saturating_sub(1) {
        let mut swapped = false;
        // The last `pass` slots already hold the largest elements
        for j in 0..len - pass - 1 {
            if compare(&data[j], &data[j + 1]) == Ordering::Greater {
                data.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Insertion sort: grows a sorted prefix, shifting greater elements right (stable)
pub fn insertion_sort_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && compare(&data[j - 1], &data[i]) == Ordering::Greater {
            j -= 1;
        }
        if j < i {
            data[j..=i].rotate_right(1);
        }
    }
}

/// Selection sort: swaps the minimum of the unsorted suffix into place
pub fn selection_sort_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = data.len();
    for i in 0..len.saturating_sub(1) {
        let mut min_index = i;
        for j in i + 1..len {
            if compare(&data[j], &data[min_index]) == Ordering::Less {
                min_index = j;
            }
        }
        if min_index != i {
            data.swap(i, min_index);
        }
    }
}

/// Top-down merge sort; ties take the left element first (stable)
pub fn merge_sort_by<T, F>(data: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort_recursive(data, &mut compare);
}

fn merge_sort_recursive<T, F>(data: &mut [T], compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = data.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;
    merge_sort_recursive(&mut data[..mid], compare);
    merge_sort_recursive(&mut data[mid..], compare);
    merge_halves(data, mid, compare);
}

/// Merge the sorted runs `data[..mid]` and `data[mid..]`
fn merge_halves<T, F>(data: &mut [T], mid: usize, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    // Already in order, nothing to merge
    if compare(&data[mid - 1], &data[mid]) != Ordering::Greater {
        return;
    }

    let mut merged = Vec::with_capacity(data.len());
    {
        let (left, right) = data.split_at(mid);
        let mut i = 0;
        let mut j = 0;

        while i < left.len() && j < right.len() {
            if compare(&left[i], &right[j]) != Ordering::Greater {
                merged.push(left[i].clone());
                i += 1;
            } else {
                merged.push(right[j].clone());
                j += 1;
            }
        }

        merged.extend_from_slice(&left[i..]);
        merged.extend_from_slice(&right[j..]);
    }

    for (slot, value) in data.iter_mut().zip(merged) {
        *slot = value;
    }
}

/// Quick sort with Lomuto partitioning around the last element
pub fn quick_sort_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quick_sort_recursive(data, &mut compare);
}

fn quick_sort_recursive<T, F>(mut data: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    // Recurse into the smaller side and loop over the larger one, so stack
    // depth stays logarithmic even when every pivot is an extreme.
    while data.len() > 1 {
        let pivot = lomuto_partition(data, compare);
        let (left, rest) = std::mem::take(&mut data).split_at_mut(pivot);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            quick_sort_recursive(left, compare);
            data = right;
        } else {
            quick_sort_recursive(right, compare);
            data = left;
        }
    }
}

/// Partition `data` around its last element and return the pivot's final index
fn lomuto_partition<T, F>(data: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let high = data.len() - 1;
    let mut boundary = 0;

    for j in 0..high {
        if compare(&data[j], &data[high]) == Ordering::Less {
            data.swap(boundary, j);
            boundary += 1;
        }
    }

    data.swap(boundary, high);
    boundary
}

/// Heap sort: bottom-up max-heap construction, then repeated root extraction
pub fn heap_sort_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = data.len();
    if len < 2 {
        return;
    }

    for root in (0..len / 2).rev() {
        sift_down(data, root, len, &mut compare);
    }

    for end in (1..len).rev() {
        data.swap(0, end);
        sift_down(data, 0, end, &mut compare);
    }
}

/// Restore the max-heap property for the subtree at `root` within `data[..end]`
fn sift_down<T, F>(data: &mut [T], mut root: usize, end: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let left = 2 * root + 1;
        if left >= end {
            break;
        }

        let mut largest = root;
        if compare(&data[left], &data[largest]) == Ordering::Greater {
            largest = left;
        }
        let right = left + 1;
        if right < end && compare(&data[right], &data[largest]) == Ordering::Greater {
            largest = right;
        }

        if largest == root {
            break;
        }
        data.swap(root, largest);
        root = largest;
    }
}
