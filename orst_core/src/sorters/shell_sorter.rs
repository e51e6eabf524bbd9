use crate::algorithm::{AlgorithmInfo, Complexity, Value};
use crate::probe::Probe;
use crate::registry::AlgorithmId;
use crate::Sorter;

static INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::Shell,
    name: "Shell Sort",
    summary: "Insertion sort over shrinking gaps",
    best: Complexity::Linearithmic,
    average: Complexity::ThreeHalves,
    worst: Complexity::Quadratic,
    space: Complexity::Constant,
    stable: false,
    in_place: true,
};

/// An implementation of [Shell Sort](https://en.wikipedia.org/wiki/Shellsort) using Shell's
/// original gap sequence `n/2, n/4, ..., 1`.
///
/// ```
/// use orst_core::{ShellSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// ShellSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellSorter;

pub(crate) fn shell_sort<T: Ord>(probe: &mut Probe<'_, T>) {
    let len = probe.len();
    let mut gap = len / 2;

    while gap > 0 {
        for i in gap..len {
            let mut j = i;
            while j >= gap && probe.less(j, j - gap) {
                probe.swap(j - gap, j);
                j -= gap;
            }
        }
        gap /= 2;
    }
}

impl<T> Sorter<T> for ShellSorter
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]) {
        shell_sort(&mut Probe::new(slice))
    }
}

impl crate::SortingAlgorithm for ShellSorter {
    fn info(&self) -> &'static AlgorithmInfo {
        &INFO
    }

    fn sort_probed(&self, probe: &mut Probe<'_, Value>) {
        shell_sort(probe)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn arbitrary_array() {
        let mut slice = [1, 5, 4, 2, 3];
        ShellSorter.sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        ShellSorter.sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn simple_edge_cases() {
        let mut one = vec![1];
        ShellSorter.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![2, 1];
        ShellSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        ShellSorter.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }

    #[test]
    fn fewer_swaps_than_insertion_on_reversed_input() {
        let mut shell = (0..256).rev().collect::<Vec<_>>();
        let mut insertion = shell.clone();

        let mut probe = Probe::new(&mut shell);
        shell_sort(&mut probe);
        let shell_swaps = probe.stats().swaps;

        let mut probe = Probe::new(&mut insertion);
        crate::sorters::insertion_sorter::insertion_sort(&mut probe, false);
        let insertion_swaps = probe.stats().swaps;

        assert!(shell_swaps < insertion_swaps);
    }
}
