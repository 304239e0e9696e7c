//! POST parameter construction for the regru2 API

use serde::Serialize;

use crate::error::{Result, SolverError};

use super::PROVIDER_NAME;
use super::types::RegruCredentials;

/// Splits a fully-qualified record name into `(subdomain, apex)`.
///
/// The apex is always the last two dot-separated labels; everything before
/// them is the subdomain (empty for a two-label name). This is a heuristic,
/// not a public-suffix lookup: multi-label suffixes such as `.co.uk`
/// mis-split. Kept as-is, since changing it would change which
/// subdomain/apex pair is sent to the registrar. Names with fewer than two
/// labels are not validated here; the caller is expected to pass a
/// fully-qualified challenge record name.
pub(crate) fn split_record_name(record_name: &str) -> (String, String) {
    let labels: Vec<&str> = record_name.split('.').collect();
    let cut = labels.len().saturating_sub(2);
    (labels[..cut].join("."), labels[cut..].join("."))
}

/// Builds the complete form-encoded parameter set for one API call.
///
/// The typed payload is serialized to a JSON string under `input_data` and
/// merged with the account credentials and the fixed protocol options the
/// regru2 API expects on every request.
pub(crate) fn build_form<T: Serialize>(
    credentials: &RegruCredentials,
    input: &T,
) -> Result<Vec<(&'static str, String)>> {
    let input_data =
        serde_json::to_string(input).map_err(|e| SolverError::SerializationError {
            provider: PROVIDER_NAME.to_string(),
            detail: e.to_string(),
        })?;

    Ok(vec![
        ("username", credentials.username.clone()),
        ("password", credentials.password.clone()),
        ("io_encoding", "utf8".to_string()),
        ("show_input_params", "1".to_string()),
        ("output_format", "json".to_string()),
        ("input_format", "json".to_string()),
        ("input_data", input_data),
    ])
}
