//! Public types shared across solvers.

use serde::{Deserialize, Serialize};

/// Solver type identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverType {
    /// Reg.ru zone API. Requires feature `regru`.
    #[cfg(feature = "regru")]
    Regru,
}

/// Input type for UI rendering of a credential field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Plain text input.
    Text,
    /// Masked/password input.
    Password,
}

/// Describes one credential field a solver requires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialField {
    /// Machine-readable field key (e.g., `"username"`).
    pub key: String,
    /// Human-readable label (e.g., `"Account username"`).
    pub label: String,
    /// Input type for UI rendering.
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

/// Metadata describing a solver.
///
/// Available at the type level (no instance needed), so a host can enumerate
/// solvers and the credential fields each one requires before configuring any.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverMetadata {
    /// Solver type identifier.
    pub id: SolverType,
    /// Human-readable solver name.
    pub name: String,
    /// Short description of the solver.
    pub description: String,
    /// Credential fields required to authenticate with this solver.
    pub required_fields: Vec<CredentialField>,
}

/// Credentials for a specific solver; the variant selects the implementation
/// when passed to [`create_solver`](crate::create_solver).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum SolverCredentials {
    /// Reg.ru account credentials. Requires feature `regru`.
    #[cfg(feature = "regru")]
    Regru {
        /// Reg.ru account username.
        username: String,
        /// Reg.ru account password.
        password: String,
    },
}
