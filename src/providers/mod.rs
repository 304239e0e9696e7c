//! DNS-01 solver implementations

/// Shared utilities used by solver implementations.
pub mod common;

#[cfg(feature = "regru")]
mod regru;

#[cfg(feature = "regru")]
pub use regru::{RegruCredentials, RegruSolver};
