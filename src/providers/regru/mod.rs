//! Reg.ru DNS-01 solver
//!
//! Talks to the regru2 zone API: one form-encoded POST per operation, JSON
//! result envelope. API reference: <https://www.reg.ru/support/help/api2>

mod http;
mod params;
mod solver;
mod types;

use reqwest::Client;

use crate::providers::common::create_http_client;

pub use types::RegruCredentials;

/// Solver identifier used in logs and error context.
pub(crate) const PROVIDER_NAME: &str = "regru";

/// Production endpoint of the regru2 API.
pub(crate) const REGRU_API_BASE: &str = "https://api.reg.ru/api/regru2";

/// Reg.ru DNS-01 solver
///
/// Holds the account credentials and a shared HTTP client; no other state.
/// Instances are independent, so separate validations may each construct
/// their own without coordination.
pub struct RegruSolver {
    pub(crate) client: Client,
    pub(crate) api_base: String,
    pub(crate) credentials: RegruCredentials,
}

impl RegruSolver {
    /// Creates a solver talking to the production Reg.ru API.
    #[must_use]
    pub fn new(username: String, password: String) -> Self {
        Self::with_api_base(username, password, REGRU_API_BASE)
    }

    /// Creates a solver with a custom API endpoint.
    ///
    /// Mainly for tests that target a local mock server.
    #[must_use]
    pub fn with_api_base(username: String, password: String, api_base: impl Into<String>) -> Self {
        Self {
            client: create_http_client(),
            api_base: api_base.into(),
            credentials: RegruCredentials { username, password },
        }
    }
}
