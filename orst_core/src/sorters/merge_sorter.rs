use std::cmp::Ordering;

use crate::algorithm::{AlgorithmInfo, Complexity, Value};
use crate::probe::Probe;
use crate::registry::AlgorithmId;
use crate::Sorter;

static INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::Merge,
    name: "Merge Sort",
    summary: "Sorts both halves recursively, then merges them",
    best: Complexity::Linearithmic,
    average: Complexity::Linearithmic,
    worst: Complexity::Linearithmic,
    space: Complexity::Linear,
    stable: true,
    in_place: false,
};

/// An implementation of top-down [Merge Sort](https://en.wikipedia.org/wiki/Merge_sort)
///
/// # Usage
///```
/// use orst_core::{MergeSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// MergeSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Algorithm
///
/// The slice is split in half until every run holds a single element. Neighbouring runs are then
/// merged: both are copied out and the smaller head is written back until one run is used up.
/// Whatever remains of the right run is already in place. On ties the left element wins, which
/// makes the sort stable.
#[derive(Debug, Default, Clone, Copy)]
pub struct MergeSorter;

pub(crate) fn merge_sort<T: Ord + Clone>(probe: &mut Probe<'_, T>) {
    let len = probe.len();
    merge_sort_range(probe, 0, len);
}

fn merge_sort_range<T: Ord + Clone>(probe: &mut Probe<'_, T>, low: usize, high: usize) {
    if high - low <= 1 {
        return;
    }

    let mid = low + (high - low) / 2;
    merge_sort_range(probe, low, mid);
    merge_sort_range(probe, mid, high);
    merge(probe, low, mid, high);
}

fn merge<T: Ord + Clone>(probe: &mut Probe<'_, T>, low: usize, mid: usize, high: usize) {
    let left: Vec<T> = (low..mid).map(|i| probe.get(i).clone()).collect();
    let right: Vec<T> = (mid..high).map(|i| probe.get(i).clone()).collect();

    let (mut l, mut r) = (0, 0);
    let mut write = low;

    while l < left.len() && r < right.len() {
        let next = match probe.compare_values(low + l, &left[l], mid + r, &right[r]) {
            Ordering::Greater => {
                r += 1;
                right[r - 1].clone()
            }
            _ => {
                l += 1;
                left[l - 1].clone()
            }
        };
        probe.set(write, next);
        write += 1;
    }

    for value in &left[l..] {
        probe.set(write, value.clone());
        write += 1;
    }
}

impl<T> Sorter<T> for MergeSorter
where
    T: Ord + Clone,
{
    fn sort(&self, slice: &mut [T]) {
        merge_sort(&mut Probe::new(slice))
    }
}

impl crate::SortingAlgorithm for MergeSorter {
    fn info(&self) -> &'static AlgorithmInfo {
        &INFO
    }

    fn sort_probed(&self, probe: &mut Probe<'_, Value>) {
        merge_sort(probe)
    }
}
