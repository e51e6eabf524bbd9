use crate::algorithm::{AlgorithmInfo, Complexity, Value};
use crate::probe::Probe;
use crate::registry::AlgorithmId;
use crate::Sorter;

static INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::Bubble,
    name: "Bubble Sort",
    summary: "Repeatedly swaps adjacent elements that are out of order",
    best: Complexity::Linear,
    average: Complexity::Quadratic,
    worst: Complexity::Quadratic,
    space: Complexity::Constant,
    stable: true,
    in_place: true,
};

/// An implementation of [Bubble Sort](https://en.wikipedia.org/wiki/Bubble_sort)
///
/// # Usage
///```
/// use orst_core::{BubbleSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// BubbleSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Bubble sort, sometimes referred to as sinking sort,
/// is a simple sorting algorithm that repeatedly steps
/// through the list, compares adjacent elements and swaps
/// them if they are in the wrong order. The pass through
/// the list is repeated until the list is sorted. The
/// algorithm, which is a comparison sort, is named for the
/// way smaller or larger elements "bubble" to the top of the list.
///
/// After every pass the largest remaining element has reached its final position, so each pass
/// stops one element earlier than the previous one.
#[derive(Debug, Default, Clone, Copy)]
pub struct BubbleSorter;

pub(crate) fn bubble_sort<T: Ord>(probe: &mut Probe<'_, T>) {
    let mut end = probe.len();
    let mut swapped = true;

    while swapped && end > 1 {
        swapped = false;
        for i in 1..end {
            if probe.less(i, i - 1) {
                probe.swap(i - 1, i);
                swapped = true;
            }
        }
        end -= 1;
    }
}

impl<T> Sorter<T> for BubbleSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        bubble_sort(&mut Probe::new(slice));
    }
}

impl crate::SortingAlgorithm for BubbleSorter {
    fn info(&self) -> &'static AlgorithmInfo {
        &INFO
    }

    fn sort_probed(&self, probe: &mut Probe<'_, Value>) {
        bubble_sort(probe)
    }
}
