//! The concrete algorithms behind the [`AlgorithmRegistry`](crate::AlgorithmRegistry).
//!
//! Every sorter implements both [`Sorter`](crate::Sorter), for sorting any slice of ordered
//! elements directly, and [`SortingAlgorithm`](crate::SortingAlgorithm), for use through the
//! registry.

pub(crate) mod bubble_sorter;
pub(crate) mod dutch_flag_sorter;
pub(crate) mod heap_sorter;
pub(crate) mod insertion_sorter;
pub(crate) mod merge_sorter;
pub(crate) mod quick_sorter;
pub(crate) mod radix_sorter;
pub(crate) mod selection_sorter;
pub(crate) mod shell_sorter;

pub use bubble_sorter::BubbleSorter;
pub use dutch_flag_sorter::DutchFlagSorter;
pub use heap_sorter::HeapSorter;
pub use insertion_sorter::InsertionSorter;
pub use merge_sorter::MergeSorter;
pub use quick_sorter::QuickSorter;
pub use radix_sorter::{RadixKey, RadixSorter};
pub use selection_sorter::SelectionSorter;
pub use shell_sorter::ShellSorter;
