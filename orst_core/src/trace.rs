//! Step-by-step recordings of a sort, for visualization.
//!
//! A [`Trace`] keeps the input the algorithm started from and every [`Step`] it took. Frames are
//! not stored: [`Trace::frames`] replays the steps lazily over a copy of the input, so a trace
//! can be walked as many times as needed and each walk starts from the beginning.
//!
//! ```
//! use orst_core::{AlgorithmId, AlgorithmRegistry};
//!
//! let registry = AlgorithmRegistry::default();
//! let bubble = registry.get(AlgorithmId::Bubble).unwrap();
//!
//! let trace = bubble.trace(&[3, 1, 2]);
//! assert_eq!(trace.final_state(), vec![1, 2, 3]);
//!
//! let last = trace.frames().last().unwrap();
//! assert_eq!(last.values, vec![1, 2, 3]);
//! ```

use serde::Serialize;

use crate::probe::SortStats;

/// One operation performed on the slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "at", rename_all = "snake_case")]
pub enum Step<T> {
    /// The elements at the two indices were compared.
    Compare(usize, usize),
    /// The elements at the two indices were swapped.
    Swap(usize, usize),
    /// `value` was written to `index`.
    Overwrite { index: usize, value: T },
}

impl<T> Step<T> {
    /// The indices this step touched, for highlighting.
    pub fn indices(&self) -> (usize, Option<usize>) {
        match *self {
            Step::Compare(i, j) | Step::Swap(i, j) => (i, Some(j)),
            Step::Overwrite { index, .. } => (index, None),
        }
    }

    /// `true` if the step changed the array.
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Step::Compare(..))
    }

    fn apply(&self, values: &mut [T])
    where
        T: Clone,
    {
        match self {
            Step::Compare(..) => {}
            Step::Swap(i, j) => values.swap(*i, *j),
            Step::Overwrite { index, value } => values[*index] = value.clone(),
        }
    }
}

/// The full recording of one sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace<T> {
    initial: Vec<T>,
    steps: Vec<Step<T>>,
    stats: SortStats,
}

impl<T: Clone> Trace<T> {
    pub(crate) fn new(initial: Vec<T>, steps: Vec<Step<T>>, stats: SortStats) -> Self {
        Self {
            initial,
            steps,
            stats,
        }
    }

    pub fn initial(&self) -> &[T] {
        &self.initial
    }

    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    pub fn stats(&self) -> SortStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Replays the trace from the initial state. Every call starts over.
    pub fn frames(&self) -> Frames<'_, T> {
        Frames {
            state: self.initial.clone(),
            steps: self.steps.iter(),
        }
    }

    /// The array after every step has been applied.
    pub fn final_state(&self) -> Vec<T> {
        let mut values = self.initial.clone();
        for step in &self.steps {
            step.apply(&mut values);
        }
        values
    }
}

/// The state of the array right after `step` was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<'a, T> {
    pub step: &'a Step<T>,
    pub values: Vec<T>,
}

/// Lazy iterator over the frames of a [`Trace`]. Created with [`Trace::frames`].
pub struct Frames<'a, T> {
    state: Vec<T>,
    steps: std::slice::Iter<'a, Step<T>>,
}

impl<'a, T: Clone> Iterator for Frames<'a, T> {
    type Item = Frame<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.steps.next()?;
        step.apply(&mut self.state);
        Some(Frame {
            step,
            values: self.state.clone(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.steps.size_hint()
    }
}

impl<T: Clone> ExactSizeIterator for Frames<'_, T> {}
