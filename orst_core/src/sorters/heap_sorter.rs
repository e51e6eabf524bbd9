use crate::algorithm::{AlgorithmInfo, Complexity, Value};
use crate::probe::Probe;
use crate::registry::AlgorithmId;
use crate::Sorter;

static INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::Heap,
    name: "Heap Sort",
    summary: "Builds a max-heap, then repeatedly moves its root to the end",
    best: Complexity::Linearithmic,
    average: Complexity::Linearithmic,
    worst: Complexity::Linearithmic,
    space: Complexity::Constant,
    stable: false,
    in_place: true,
};

/// An implementation of [Heap Sort](https://en.wikipedia.org/wiki/Heapsort)
///
/// # Usage
///```
/// use orst_core::{HeapSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// HeapSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Algorithm
///
/// The slice is first rearranged into a binary max-heap (the children of index `i` live at
/// `2i + 1` and `2i + 2`). The root is then swapped with the last element of the heap, the heap
/// shrinks by one and the new root is sifted down. Repeating this leaves the largest elements at
/// the back in ascending order.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeapSorter;

pub(crate) fn heap_sort<T: Ord>(probe: &mut Probe<'_, T>) {
    let len = probe.len();
    if len < 2 {
        return;
    }

    for root in (0..len / 2).rev() {
        sift_down(probe, root, len);
    }

    for end in (1..len).rev() {
        probe.swap(0, end);
        sift_down(probe, 0, end);
    }
}

fn sift_down<T: Ord>(probe: &mut Probe<'_, T>, mut root: usize, end: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            break;
        }
        if child + 1 < end && probe.less(child, child + 1) {
            child += 1;
        }
        if !probe.less(root, child) {
            break;
        }
        probe.swap(root, child);
        root = child;
    }
}

impl<T> Sorter<T> for HeapSorter
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]) {
        heap_sort(&mut Probe::new(slice))
    }
}

impl crate::SortingAlgorithm for HeapSorter {
    fn info(&self) -> &'static AlgorithmInfo {
        &INFO
    }

    fn sort_probed(&self, probe: &mut Probe<'_, Value>) {
        heap_sort(probe)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn arbitrary_array() {
        let mut slice = [1, 5, 4, 2, 3];
        HeapSorter.sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        HeapSorter.sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn simple_edge_cases() {
        let mut one = vec![1];
        HeapSorter.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![2, 1];
        HeapSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut equal = vec![7, 7, 7, 7];
        HeapSorter.sort(&mut equal);
        assert_eq!(equal, vec![7, 7, 7, 7]);
    }

    #[test]
    fn heapify_puts_maximum_at_root() {
        let mut slice = [3, 9, 2, 8, 1, 7];
        let mut probe = Probe::new(&mut slice);
        for root in (0..3).rev() {
            sift_down(&mut probe, root, 6);
        }
        assert_eq!(slice[0], 9);
        for i in 0..6 {
            for child in [2 * i + 1, 2 * i + 2] {
                if child < 6 {
                    assert!(slice[i] >= slice[child]);
                }
            }
        }
    }
}
