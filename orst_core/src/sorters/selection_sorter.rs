use crate::algorithm::{AlgorithmInfo, Complexity, Value};
use crate::probe::Probe;
use crate::registry::AlgorithmId;
use crate::Sorter;

static INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::Selection,
    name: "Selection Sort",
    summary: "Moves the smallest element of the unsorted tail to its front",
    best: Complexity::Quadratic,
    average: Complexity::Quadratic,
    worst: Complexity::Quadratic,
    space: Complexity::Constant,
    stable: false,
    in_place: true,
};

/// An implementation of [Selection Sort](https://en.wikipedia.org/wiki/Selection_sort)
///
/// # Usage
///```
/// use orst_core::{SelectionSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// SelectionSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Algorithm
///
/// The algorithm divides the input list into two parts:
/// a sorted sublist of items which is built
/// up from left to right at the front of the list and a sublist of
/// the remaining unsorted items that occupy the rest of
/// the list. It repeatedly finds the smallest element in the unsorted
/// sublist, swaps it with the leftmost unsorted element and moves the
/// sublist boundary one element to the right.
///
/// It always makes the same number of comparisons regardless of the input, but never more than
/// `n - 1` swaps.
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectionSorter;

pub(crate) fn selection_sort<T: Ord>(probe: &mut Probe<'_, T>) {
    let len = probe.len();
    for unsorted in 0..len {
        let mut smallest_in_rest = unsorted;
        for i in (unsorted + 1)..len {
            if probe.less(i, smallest_in_rest) {
                smallest_in_rest = i;
            }
        }
        if unsorted != smallest_in_rest {
            probe.swap(unsorted, smallest_in_rest);
        }
    }
}

impl<T> Sorter<T> for SelectionSorter
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]) {
        selection_sort(&mut Probe::new(slice));
    }
}

impl crate::SortingAlgorithm for SelectionSorter {
    fn info(&self) -> &'static AlgorithmInfo {
        &INFO
    }

    fn sort_probed(&self, probe: &mut Probe<'_, Value>) {
        selection_sort(probe)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn arbitrary_array() {
        let mut slice = [1, 5, 4, 2, 3];
        SelectionSorter.sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let mut slice = (1..10).collect::<Vec<_>>();
        SelectionSorter.sort(&mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        SelectionSorter.sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn simple_edge_cases() {
        let mut one = vec![1];
        SelectionSorter.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![1, 2];
        SelectionSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut two = vec![2, 1];
        SelectionSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        SelectionSorter.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }

    #[test]
    fn comparisons_do_not_depend_on_input() {
        let mut sorted = [1, 2, 3, 4, 5, 6];
        let mut reversed = [6, 5, 4, 3, 2, 1];

        let mut probe = Probe::new(&mut sorted);
        selection_sort(&mut probe);
        let sorted_stats = probe.stats();

        let mut probe = Probe::new(&mut reversed);
        selection_sort(&mut probe);
        let reversed_stats = probe.stats();

        assert_eq!(sorted_stats.comparisons, 15);
        assert_eq!(reversed_stats.comparisons, 15);
        assert_eq!(sorted_stats.swaps, 0);
        assert!(reversed_stats.swaps < 6);
    }
}
