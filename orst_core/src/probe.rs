//! Instrumented access to the slice being sorted.
//!
//! Every algorithm in this crate is written once against [`Probe`] instead of a bare `&mut [T]`.
//! The probe counts the comparisons, swaps and writes an algorithm performs and, when it was
//! created with [`Probe::recording`], appends a [`Step`] for each of them. That lets the same
//! code back both the plain [`Sorter`](crate::Sorter) path and the step-by-step
//! [`Trace`](crate::Trace) used for visualization.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::trace::Step;

/// Operation counts gathered while sorting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SortStats {
    pub comparisons: usize,
    pub swaps: usize,
    pub writes: usize,
}

impl SortStats {
    /// Total number of operations that touched or inspected the slice.
    pub fn operations(&self) -> usize {
        self.comparisons + self.swaps + self.writes
    }
}

impl fmt::Display for SortStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} comparisons, {} swaps, {} writes",
            self.comparisons, self.swaps, self.writes
        )
    }
}

/// A mutable view over a slice that counts, and optionally records, what is done to it.
pub struct Probe<'a, T> {
    slice: &'a mut [T],
    stats: SortStats,
    steps: Option<&'a mut Vec<Step<T>>>,
}

impl<'a, T> Probe<'a, T> {
    /// Wraps `slice` without recording steps. Only the counters are kept.
    pub fn new(slice: &'a mut [T]) -> Self {
        Self {
            slice,
            stats: SortStats::default(),
            steps: None,
        }
    }

    /// Wraps `slice` and pushes every operation onto `steps`.
    pub fn recording(slice: &'a mut [T], steps: &'a mut Vec<Step<T>>) -> Self {
        Self {
            slice,
            stats: SortStats::default(),
            steps: Some(steps),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slice.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slice.is_empty()
    }

    /// Reads the element at `index`. Reads are neither counted nor recorded.
    #[inline]
    pub fn get(&self, index: usize) -> &T {
        &self.slice[index]
    }

    pub fn as_slice(&self) -> &[T] {
        self.slice
    }

    pub fn stats(&self) -> SortStats {
        self.stats
    }

    fn record(&mut self, step: impl FnOnce() -> Step<T>) {
        if let Some(steps) = self.steps.as_mut() {
            steps.push(step());
        }
    }

    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        self.stats.swaps += 1;
        self.record(|| Step::Swap(i, j));
        self.slice.swap(i, j);
    }
}

impl<T: Ord> Probe<'_, T> {
    /// Compares the elements at `i` and `j`.
    #[inline]
    pub fn compare(&mut self, i: usize, j: usize) -> Ordering {
        self.stats.comparisons += 1;
        self.record(|| Step::Compare(i, j));
        self.slice[i].cmp(&self.slice[j])
    }

    /// `true` if the element at `i` is strictly smaller than the one at `j`.
    #[inline]
    pub fn less(&mut self, i: usize, j: usize) -> bool {
        self.compare(i, j) == Ordering::Less
    }

    /// Compares two values held outside the slice (for example in a merge buffer). `i` and `j`
    /// are the slice positions the values logically occupy and are only used for recording.
    #[inline]
    pub fn compare_values(&mut self, i: usize, a: &T, j: usize, b: &T) -> Ordering {
        self.stats.comparisons += 1;
        self.record(|| Step::Compare(i, j));
        a.cmp(b)
    }
}

impl<T: Clone> Probe<'_, T> {
    /// Overwrites the element at `index` with `value`.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) {
        self.stats.writes += 1;
        if let Some(steps) = self.steps.as_mut() {
            steps.push(Step::Overwrite {
                index,
                value: value.clone(),
            });
        }
        self.slice[index] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_without_recording() {
        let mut slice = [3, 1, 2];
        let mut probe = Probe::new(&mut slice);

        assert!(probe.less(1, 0));
        probe.swap(0, 1);
        probe.set(2, 7);

        assert_eq!(
            probe.stats(),
            SortStats {
                comparisons: 1,
                swaps: 1,
                writes: 1
            }
        );
        assert_eq!(probe.as_slice(), &[1, 3, 7]);
    }

    #[test]
    fn records_every_operation_in_order() {
        let mut slice = [2, 1];
        let mut steps = Vec::new();
        let mut probe = Probe::recording(&mut slice, &mut steps);

        probe.compare(0, 1);
        probe.swap(0, 1);
        probe.set(0, 5);
        assert_eq!(probe.stats().operations(), 3);

        assert_eq!(
            steps,
            vec![
                Step::Compare(0, 1),
                Step::Swap(0, 1),
                Step::Overwrite { index: 0, value: 5 }
            ]
        );
        assert_eq!(slice, [5, 2]);
    }

    #[test]
    fn compare_values_does_not_read_the_slice() {
        let mut slice = [0, 0];
        let mut probe = Probe::new(&mut slice);
        assert_eq!(probe.compare_values(0, &4, 1, &9), Ordering::Less);
        assert_eq!(probe.stats().comparisons, 1);
    }
}
