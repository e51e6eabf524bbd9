use std::fmt;

use serde::Serialize;

use crate::probe::{Probe, SortStats};
use crate::registry::AlgorithmId;
use crate::trace::Trace;

/// The element type the registry's algorithms operate on.
pub type Value = i64;

/// Asymptotic bound used in [`AlgorithmInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Complexity {
    Constant,
    Logarithmic,
    Linear,
    /// Linear in the length plus the radix base.
    LinearPlusBase,
    Linearithmic,
    /// `d` passes over the input, one per digit.
    Digits,
    ThreeHalves,
    Quadratic,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Complexity::Constant => "O(1)",
            Complexity::Logarithmic => "O(log n)",
            Complexity::Linear => "O(n)",
            Complexity::LinearPlusBase => "O(n + b)",
            Complexity::Linearithmic => "O(n log n)",
            Complexity::Digits => "O(d·(n + b))",
            Complexity::ThreeHalves => "O(n^1.5)",
            Complexity::Quadratic => "O(n²)",
        };
        f.write_str(s)
    }
}

/// Static description of an algorithm, shown by `orst list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    pub id: AlgorithmId,
    pub name: &'static str,
    pub summary: &'static str,
    pub best: Complexity,
    pub average: Complexity,
    pub worst: Complexity,
    pub space: Complexity,
    pub stable: bool,
    pub in_place: bool,
}

impl AlgorithmInfo {
    /// `true` for algorithms whose average case is quadratic.
    pub fn is_quadratic(&self) -> bool {
        self.average == Complexity::Quadratic
    }
}

/// The capability every algorithm in the [`AlgorithmRegistry`](crate::AlgorithmRegistry) exposes.
///
/// Implementors only provide [`sort_probed`](SortingAlgorithm::sort_probed); plain sorting and
/// tracing are built on top of it. Implementations hold no per-call state, so one instance can be
/// shared between threads.
pub trait SortingAlgorithm: Send + Sync + fmt::Debug {
    fn info(&self) -> &'static AlgorithmInfo;

    /// Sorts the values behind `probe` in ascending order.
    fn sort_probed(&self, probe: &mut Probe<'_, Value>);

    fn id(&self) -> AlgorithmId {
        self.info().id
    }

    fn name(&self) -> &'static str {
        self.info().name
    }

    /// Sorts `values` in place and returns what it took.
    fn sort_values(&self, values: &mut [Value]) -> SortStats {
        let mut probe = Probe::new(values);
        self.sort_probed(&mut probe);
        probe.stats()
    }

    /// Sorts a copy of `values`, recording every step.
    fn trace(&self, values: &[Value]) -> Trace<Value> {
        let mut sorted = values.to_vec();
        let mut steps = Vec::new();
        let stats = {
            let mut probe = Probe::recording(&mut sorted, &mut steps);
            self.sort_probed(&mut probe);
            probe.stats()
        };
        log::debug!(
            "{} traced {} values in {} steps",
            self.name(),
            values.len(),
            steps.len()
        );
        Trace::new(values.to_vec(), steps, stats)
    }
}
