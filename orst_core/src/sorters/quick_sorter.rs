use crate::algorithm::{AlgorithmInfo, Complexity, Value};
use crate::probe::Probe;
use crate::registry::AlgorithmId;
use crate::Sorter;

static INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::Quick,
    name: "Quick Sort",
    summary: "Partitions around a pivot and sorts both sides recursively",
    best: Complexity::Linearithmic,
    average: Complexity::Linearithmic,
    worst: Complexity::Quadratic,
    space: Complexity::Logarithmic,
    stable: false,
    in_place: true,
};

/// An implementation of [Quick Sort](https://en.wikipedia.org/wiki/Quicksort)
///
/// # Usage
///```
/// use orst_core::{QuickSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// QuickSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Algorithm
///
/// Quicksort is a divide-and-conquer algorithm.
/// It works by selecting a 'pivot' element from
/// the array and partitioning the other elements into two sub
/// -arrays, according to whether they are less than
/// or greater than the pivot. For this reason,
/// it is sometimes called partition-exchange sort.
/// The sub-arrays are then sorted recursively.
///
/// The pivot is the median of the first, middle and last elements, which keeps sorted and
/// reversed input at `O(n log n)`. Pivot choice is deterministic, so the same input always
/// produces the same trace. Only the smaller side is recursed into; the larger one is handled by
/// the loop, bounding the stack depth to `O(log n)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuickSorter;

pub(crate) fn quick_sort<T: Ord>(probe: &mut Probe<'_, T>) {
    let len = probe.len();
    quick_sort_range(probe, 0, len);
}

fn quick_sort_range<T: Ord>(probe: &mut Probe<'_, T>, mut low: usize, mut high: usize) {
    while high - low > 1 {
        let pivot = partition(probe, low, high);
        if pivot - low < high - (pivot + 1) {
            quick_sort_range(probe, low, pivot);
            low = pivot + 1;
        } else {
            quick_sort_range(probe, pivot + 1, high);
            high = pivot;
        }
    }
}

// Lomuto partition of `low..high`. Returns the final index of the pivot.
fn partition<T: Ord>(probe: &mut Probe<'_, T>, low: usize, high: usize) -> usize {
    let last = high - 1;

    if high - low >= 3 {
        let mid = low + (high - low) / 2;
        if probe.less(mid, low) {
            probe.swap(mid, low);
        }
        if probe.less(last, low) {
            probe.swap(last, low);
        }
        // `low` now holds the smallest of the three; move the median to `last`.
        if probe.less(mid, last) {
            probe.swap(mid, last);
        }
    }

    let mut store = low;
    for i in low..last {
        if probe.less(i, last) {
            if i != store {
                probe.swap(i, store);
            }
            store += 1;
        }
    }
    if store != last {
        probe.swap(store, last);
    }
    store
}

impl<T> Sorter<T> for QuickSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        quick_sort(&mut Probe::new(slice))
    }
}

impl crate::SortingAlgorithm for QuickSorter {
    fn info(&self) -> &'static AlgorithmInfo {
        &INFO
    }

    fn sort_probed(&self, probe: &mut Probe<'_, Value>) {
        quick_sort(probe)
    }
}
