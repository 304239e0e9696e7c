//! # acme-dns-regru
//!
//! A DNS-01 challenge solver for ACME certificate clients, backed by the
//! [Reg.ru](https://www.reg.ru/) registrar's zone API.
//!
//! The host ACME client hands the solver a challenge record name and a
//! validation token; the solver creates the TXT record, the host waits for
//! DNS propagation and runs validation, then the solver removes the record.
//! Propagation polling, credential loading, and CLI wiring all live in the
//! host; this crate is only the registrar client.
//!
//! ## Feature Flags
//!
//! ### Solver Selection
//!
//! - **`regru`** *(default)* — Enable the Reg.ru solver.
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use acme_dns_regru::{create_solver, Dns01Solver, SolverCredentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let solver = create_solver(SolverCredentials::Regru {
//!         username: "account".to_string(),
//!         password: "secret".to_string(),
//!     })?;
//!
//!     // Before validation: provision the challenge record. A failure here
//!     // aborts this domain's attempt.
//!     solver
//!         .perform("example.com", "_acme-challenge.example.com", "token")
//!         .await?;
//!
//!     // ... host waits for propagation and completes the challenge ...
//!
//!     // After validation: best-effort removal, never fails.
//!     solver
//!         .cleanup("example.com", "_acme-challenge.example.com", "token")
//!         .await;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, SolverError>`](SolverError).
//! Variants split into two classes: transport errors (network failure,
//! timeout, non-2xx status, undecodable body) and API failures (a
//! well-formed response whose `result` field is missing or not
//! `"success"`). [`SolverError::is_transport`] distinguishes them. Cleanup
//! swallows both classes by design and only logs a warning.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;

// Re-export error types
pub use error::{Result, SolverError};

// Re-export factory functions
pub use factory::{create_solver, get_all_solver_metadata};

// Re-export core trait
pub use traits::Dns01Solver;

// Re-export types
pub use types::{CredentialField, FieldType, SolverCredentials, SolverMetadata, SolverType};

// Re-export concrete solvers (behind feature flags)
#[cfg(feature = "regru")]
pub use providers::{RegruCredentials, RegruSolver};
