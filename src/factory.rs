//! Solver factory functions and metadata.

use std::sync::Arc;

use crate::error::Result;
use crate::traits::Dns01Solver;
use crate::types::{SolverCredentials, SolverMetadata};

#[cfg(feature = "regru")]
use crate::providers::RegruSolver;

/// Creates a [`Dns01Solver`] instance from the given credentials.
///
/// The concrete solver type is determined by the [`SolverCredentials`]
/// variant. The returned solver is wrapped in `Arc<dyn Dns01Solver>` for
/// easy sharing across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use acme_dns_regru::{create_solver, SolverCredentials};
///
/// let solver = create_solver(SolverCredentials::Regru {
///     username: "account".to_string(),
///     password: "secret".to_string(),
/// }).unwrap();
/// ```
pub fn create_solver(credentials: SolverCredentials) -> Result<Arc<dyn Dns01Solver>> {
    match credentials {
        #[cfg(feature = "regru")]
        SolverCredentials::Regru { username, password } => {
            Ok(Arc::new(RegruSolver::new(username, password)))
        }
    }
}

/// Returns metadata for all solvers enabled via feature flags.
///
/// Useful for hosts that enumerate available solvers and the credential
/// fields each one requires.
pub fn get_all_solver_metadata() -> Vec<SolverMetadata> {
    vec![
        #[cfg(feature = "regru")]
        RegruSolver::metadata(),
    ]
}
