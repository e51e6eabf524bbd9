use crate::algorithm::{AlgorithmInfo, Complexity, Value};
use crate::probe::Probe;
use crate::registry::AlgorithmId;
use crate::Sorter;

static INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::Insertion,
    name: "Insertion Sort",
    summary: "Grows a sorted prefix by inserting each new element into place",
    best: Complexity::Linear,
    average: Complexity::Quadratic,
    worst: Complexity::Quadratic,
    space: Complexity::Constant,
    stable: true,
    in_place: true,
};

/// An implementation of [Insertion Sort](https://en.wikipedia.org/wiki/Insertion_sort)
///
/// # Explanation
///
/// Insertion sort is a simple sorting algorithm that builds the final sorted array (or list) one
/// item at a time
///
/// Insertion sort iterates, consuming one input element each repetition, and grows a sorted output
/// list. At each iteration, insertion sort removes one element from the input data, finds the
/// location it belongs within the sorted list, and inserts it there. It repeats until no input
/// elements remain.
///
/// With `smart` set, the insertion point is found with a binary search over the sorted prefix.
/// That cuts comparisons down to `O(n log n)` but the element still has to be moved into place one
/// position at a time. The search looks for the position after any equal elements, so both modes
/// are stable.
///
/// # Usage
///```
/// use orst_core::{InsertionSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// InsertionSorter{ smart: true }.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
#[derive(Debug, Default, Clone, Copy)]
pub struct InsertionSorter {
    pub smart: bool,
}

pub(crate) fn insertion_sort<T: Ord>(probe: &mut Probe<'_, T>, smart: bool) {
    for unsorted in 1..probe.len() {
        if !smart {
            let mut i = unsorted;
            while i > 0 && probe.less(i, i - 1) {
                probe.swap(i - 1, i);
                i -= 1;
            }
        } else {
            let (mut low, mut high) = (0, unsorted);
            while low < high {
                let mid = low + (high - low) / 2;
                if probe.less(unsorted, mid) {
                    high = mid;
                } else {
                    low = mid + 1;
                }
            }
            for i in ((low + 1)..=unsorted).rev() {
                probe.swap(i - 1, i);
            }
        }
    }
}

impl<T> Sorter<T> for InsertionSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        insertion_sort(&mut Probe::new(slice), self.smart);
    }
}

impl crate::SortingAlgorithm for InsertionSorter {
    fn info(&self) -> &'static AlgorithmInfo {
        &INFO
    }

    fn sort_probed(&self, probe: &mut Probe<'_, Value>) {
        insertion_sort(probe, self.smart)
    }
}
