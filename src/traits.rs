use async_trait::async_trait;

use crate::error::Result;
use crate::types::SolverMetadata;

/// A DNS-01 challenge solver.
///
/// The host ACME client drives one challenge per domain through two
/// operations: [`perform`](Self::perform) provisions the challenge TXT
/// record before validation, and [`cleanup`](Self::cleanup) removes it
/// afterwards. Waiting for DNS propagation between the two is the host's
/// job, not the solver's.
///
/// The error policy is intentionally asymmetric and encoded in the
/// signatures: a failed `perform` must abort the domain's validation
/// attempt, while `cleanup` is best-effort and never fails: it typically
/// runs during teardown or error recovery, where an error would mask the
/// original failure or abort cleanup of other domains in a batch.
#[async_trait]
pub trait Dns01Solver: Send + Sync {
    /// Solver identifier (e.g. `"regru"`).
    fn id(&self) -> &'static str;

    /// Metadata for this solver (type-level).
    ///
    /// Returns the solver's name, description, and required credential
    /// fields. Callable before any instance exists.
    fn metadata() -> SolverMetadata
    where
        Self: Sized;

    /// Provision the challenge TXT record.
    ///
    /// `record_name` is the fully-qualified challenge record name
    /// (typically `_acme-challenge.<domain>`) and `validation` the
    /// server-specified token. The record becomes publicly resolvable
    /// eventually; this method does not wait for propagation.
    async fn perform(&self, domain: &str, record_name: &str, validation: &str) -> Result<()>;

    /// Remove the challenge TXT record, identified by name AND content.
    ///
    /// Best-effort: failures are logged at warning level and swallowed.
    /// Calling it twice for the same record is safe.
    async fn cleanup(&self, domain: &str, record_name: &str, validation: &str);
}
