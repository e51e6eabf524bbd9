use std::cmp::Ordering;

use crate::algorithm::{AlgorithmInfo, Complexity, Value};
use crate::probe::Probe;
use crate::registry::AlgorithmId;
use crate::Sorter;

static INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::DutchFlag,
    name: "Dutch National Flag Sort",
    summary: "Three-way partitioning into less, equal and greater bands",
    best: Complexity::Linear,
    average: Complexity::Linearithmic,
    worst: Complexity::Quadratic,
    space: Complexity::Logarithmic,
    stable: false,
    in_place: true,
};

/// A sort built on Dijkstra's [Dutch national flag](https://en.wikipedia.org/wiki/Dutch_national_flag_problem)
/// partitioning.
///
/// # Usage
///```
/// use orst_core::{DutchFlagSorter, Sorter};
///
/// let mut slice = [2, 0, 1, 2, 1, 0, 0];
/// DutchFlagSorter.sort(&mut slice);
/// assert_eq!(slice, [0, 0, 0, 1, 1, 2, 2]);
///```
///
/// # Algorithm
///
/// One pass splits the slice into three bands: elements less than the pivot, equal to it and
/// greater than it. With only three distinct values that single pass already sorts the slice,
/// which is the original flag problem. For arbitrary input the outer bands are partitioned again
/// until they are empty, giving a quicksort that does not degrade on many duplicates.
#[derive(Debug, Default, Clone, Copy)]
pub struct DutchFlagSorter;

pub(crate) fn dutch_flag_sort<T: Ord>(probe: &mut Probe<'_, T>) {
    let len = probe.len();
    dutch_flag_range(probe, 0, len);
}

fn dutch_flag_range<T: Ord>(probe: &mut Probe<'_, T>, mut low: usize, mut high: usize) {
    while high - low > 1 {
        let (less, greater) = partition(probe, low, high);
        if less - low < high - greater {
            dutch_flag_range(probe, low, less);
            low = greater;
        } else {
            dutch_flag_range(probe, greater, high);
            high = less;
        }
    }
}

// Partitions `low..high` around its middle element. Afterwards `low..less` is smaller than the
// pivot, `less..greater` equal to it and `greater..high` larger.
fn partition<T: Ord>(probe: &mut Probe<'_, T>, low: usize, high: usize) -> (usize, usize) {
    let mid = low + (high - low) / 2;
    if mid != low {
        probe.swap(low, mid);
    }

    // `less` always points at an element equal to the pivot.
    let (mut less, mut i, mut greater) = (low, low + 1, high);
    while i < greater {
        match probe.compare(i, less) {
            Ordering::Less => {
                probe.swap(less, i);
                less += 1;
                i += 1;
            }
            Ordering::Greater => {
                greater -= 1;
                probe.swap(i, greater);
            }
            Ordering::Equal => i += 1,
        }
    }

    (less, greater)
}

impl<T> Sorter<T> for DutchFlagSorter
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]) {
        dutch_flag_sort(&mut Probe::new(slice))
    }
}

impl crate::SortingAlgorithm for DutchFlagSorter {
    fn info(&self) -> &'static AlgorithmInfo {
        &INFO
    }

    fn sort_probed(&self, probe: &mut Probe<'_, Value>) {
        dutch_flag_sort(probe)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn arbitrary_array() {
        let mut slice = [1, 5, 4, 2, 3];
        DutchFlagSorter.sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        DutchFlagSorter.sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn simple_edge_cases() {
        let mut one = vec![1];
        DutchFlagSorter.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![2, 1];
        DutchFlagSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        DutchFlagSorter.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }

    #[test]
    fn three_colours_in_one_pass() {
        let mut slice = [2, 0, 1, 2, 1, 0, 1, 2, 0];
        let mut probe = Probe::new(&mut slice);
        let (less, greater) = partition(&mut probe, 0, 9);

        assert_eq!((less, greater), (3, 6));
        assert_eq!(slice, [0, 0, 0, 1, 1, 1, 2, 2, 2]);
    }

    #[test]
    fn all_equal_is_linear() {
        let mut slice = vec![4; 100];
        let mut probe = Probe::new(&mut slice);
        dutch_flag_sort(&mut probe);
        assert_eq!(probe.stats().comparisons, 99);
    }
}
