//! Lookup from [`AlgorithmId`] to a shared [`SortingAlgorithm`].
//!
//! # Example
//!
//! ```
//! use orst_core::{AlgorithmId, AlgorithmRegistry};
//!
//! let registry = AlgorithmRegistry::default();
//! let quick = registry.get(AlgorithmId::Quick).unwrap();
//!
//! let mut values = vec![5, -1, 3, 3, 0];
//! quick.sort_values(&mut values);
//! assert_eq!(values, vec![-1, 0, 3, 3, 5]);
//!
//! assert_eq!(registry.available().len(), AlgorithmId::ALL.len());
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use clap::ValueEnum;
use indexmap::IndexMap;
use log::{debug, trace, warn};
use serde::Serialize;

use crate::error::{RegistryError, Result};
use crate::sorters::{
    BubbleSorter, DutchFlagSorter, HeapSorter, InsertionSorter, MergeSorter, QuickSorter,
    RadixSorter, SelectionSorter, ShellSorter,
};
use crate::SortingAlgorithm;

/// A shared handle to a registered algorithm.
pub type SharedAlgorithm = Arc<dyn SortingAlgorithm>;

/// Identifies one of the supported sorting algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmId {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Radix,
    Shell,
    DutchFlag,
}

impl AlgorithmId {
    /// Every identifier in declaration order, which is also the order the default registry
    /// registers them.
    pub const ALL: [AlgorithmId; 9] = [
        AlgorithmId::Bubble,
        AlgorithmId::Selection,
        AlgorithmId::Insertion,
        AlgorithmId::Merge,
        AlgorithmId::Quick,
        AlgorithmId::Heap,
        AlgorithmId::Radix,
        AlgorithmId::Shell,
        AlgorithmId::DutchFlag,
    ];

    /// The command line spelling, e.g. `dutch-flag`.
    pub fn slug(self) -> &'static str {
        match self {
            AlgorithmId::Bubble => "bubble",
            AlgorithmId::Selection => "selection",
            AlgorithmId::Insertion => "insertion",
            AlgorithmId::Merge => "merge",
            AlgorithmId::Quick => "quick",
            AlgorithmId::Heap => "heap",
            AlgorithmId::Radix => "radix",
            AlgorithmId::Shell => "shell",
            AlgorithmId::DutchFlag => "dutch-flag",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|id| id.slug()).collect()
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Accepts the slug as well as looser spellings such as `QuickSort`, `quick_sort` or
/// `Dutch Flag Sort`.
impl FromStr for AlgorithmId {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();
        let normalized = normalized.strip_suffix("sort").unwrap_or(&normalized);

        Self::ALL
            .into_iter()
            .find(|id| id.slug().replace('-', "") == normalized)
            .ok_or_else(|| RegistryError::UnknownName(s.to_string()))
    }
}

/// An immutable mapping from [`AlgorithmId`] to exactly one shared algorithm instance.
///
/// Build one with [`AlgorithmRegistry::default`] (every algorithm) or
/// [`AlgorithmRegistry::builder`] (a chosen subset) and hand it to whatever needs it. Lookups never
/// mutate the registry, so it can be shared between threads as is.
#[derive(Clone)]
pub struct AlgorithmRegistry {
    algorithms: IndexMap<AlgorithmId, SharedAlgorithm>,
}

impl AlgorithmRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// A process wide registry holding every algorithm, created on first use.
    pub fn shared() -> &'static AlgorithmRegistry {
        static SHARED: OnceLock<AlgorithmRegistry> = OnceLock::new();
        SHARED.get_or_init(AlgorithmRegistry::default)
    }

    /// Returns the instance registered under `id`.
    ///
    /// Every call with the same `id` hands out the same instance.
    pub fn get(&self, id: AlgorithmId) -> Result<SharedAlgorithm> {
        match self.algorithms.get(&id) {
            Some(algorithm) => {
                trace!("looked up {id}");
                Ok(Arc::clone(algorithm))
            }
            None => {
                warn!("lookup of unregistered algorithm {id}");
                Err(RegistryError::Unregistered(id))
            }
        }
    }

    /// Parses `name` with [`AlgorithmId::from_str`] and looks it up.
    pub fn get_by_name(&self, name: &str) -> Result<SharedAlgorithm> {
        self.get(name.parse()?)
    }

    /// Every registered instance, in registration order.
    pub fn available(&self) -> Vec<SharedAlgorithm> {
        self.algorithms.values().cloned().collect()
    }

    pub fn ids(&self) -> impl Iterator<Item = AlgorithmId> + '_ {
        self.algorithms.keys().copied()
    }

    pub fn contains(&self, id: AlgorithmId) -> bool {
        self.algorithms.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }

    /// Fails with [`RegistryError::Incomplete`] unless every [`AlgorithmId`] is registered.
    pub fn ensure_complete(&self) -> Result<()> {
        let missing: Vec<_> = AlgorithmId::value_variants()
            .iter()
            .copied()
            .filter(|id| !self.contains(*id))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(RegistryError::Incomplete(missing))
        }
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        let standard: [SharedAlgorithm; 9] = [
            Arc::new(BubbleSorter),
            Arc::new(SelectionSorter),
            Arc::new(InsertionSorter::default()),
            Arc::new(MergeSorter),
            Arc::new(QuickSorter),
            Arc::new(HeapSorter),
            Arc::new(RadixSorter::default()),
            Arc::new(ShellSorter),
            Arc::new(DutchFlagSorter),
        ];

        let algorithms: IndexMap<_, _> = standard
            .into_iter()
            .map(|algorithm| (algorithm.id(), algorithm))
            .collect();
        debug!("built default registry with {} algorithms", algorithms.len());

        Self { algorithms }
    }
}

impl fmt::Debug for AlgorithmRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.algorithms.keys()).finish()
    }
}

/// Builds an [`AlgorithmRegistry`] from a chosen set of algorithms.
///
/// ```
/// use orst_core::sorters::{BubbleSorter, MergeSorter, QuickSorter};
/// use orst_core::{AlgorithmId, AlgorithmRegistry, RegistryError};
///
/// let registry = AlgorithmRegistry::builder()
///     .register(BubbleSorter)
///     .register(QuickSorter)
///     .register(MergeSorter)
///     .build()
///     .unwrap();
///
/// assert_eq!(registry.get(AlgorithmId::Quick).unwrap().id(), AlgorithmId::Quick);
/// assert!(matches!(
///     registry.get(AlgorithmId::Heap),
///     Err(RegistryError::Unregistered(AlgorithmId::Heap))
/// ));
/// ```
#[derive(Default)]
pub struct RegistryBuilder {
    algorithms: IndexMap<AlgorithmId, SharedAlgorithm>,
    duplicate: Option<AlgorithmId>,
}

impl RegistryBuilder {
    pub fn register<A>(self, algorithm: A) -> Self
    where
        A: SortingAlgorithm + 'static,
    {
        self.register_shared(Arc::new(algorithm))
    }

    pub fn register_shared(mut self, algorithm: SharedAlgorithm) -> Self {
        let id = algorithm.id();
        if self.algorithms.contains_key(&id) {
            self.duplicate.get_or_insert(id);
        } else {
            debug!("registering {id}");
            self.algorithms.insert(id, algorithm);
        }
        self
    }

    /// Fails with [`RegistryError::Duplicate`] if any identifier was registered twice.
    pub fn build(self) -> Result<AlgorithmRegistry> {
        if let Some(id) = self.duplicate {
            return Err(RegistryError::Duplicate(id));
        }

        Ok(AlgorithmRegistry {
            algorithms: self.algorithms,
        })
    }
}
