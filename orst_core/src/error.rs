use thiserror::Error;

use crate::registry::AlgorithmId;

/// Alias for `Result<T, orst_core::RegistryError>`.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Everything that can go wrong while building or querying an
/// [`AlgorithmRegistry`](crate::AlgorithmRegistry).
///
/// All of these point at a wiring mistake rather than bad user data: the identifiers come from the
/// same enumeration the registry is built from.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The registry was not built with an algorithm for this identifier.
    #[error("sorting algorithm `{0}` is not registered")]
    Unregistered(AlgorithmId),

    /// The text does not name any known algorithm.
    #[error("unknown sorting algorithm `{0}` (expected one of: {expected})", expected = AlgorithmId::names().join(", "))]
    UnknownName(String),

    /// A builder was given two algorithms for the same identifier.
    #[error("sorting algorithm `{0}` is registered more than once")]
    Duplicate(AlgorithmId),

    /// The registry does not cover every identifier.
    #[error("no implementation registered for: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "))]
    Incomplete(Vec<AlgorithmId>),
}
