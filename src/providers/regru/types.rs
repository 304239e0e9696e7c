//! Reg.ru wire types

use serde::{Deserialize, Serialize};

use super::params::split_record_name;

/// Reg.ru account credentials.
///
/// Supplied once at solver construction and owned exclusively by the solver
/// instance. How they are obtained (config file, environment, keyring) is
/// the host's concern.
#[derive(Debug, Clone)]
pub struct RegruCredentials {
    /// Account username.
    pub username: String,
    /// Account password.
    pub password: String,
}

/// One `{dname}` entry of the `domains` list the zone API expects.
#[derive(Debug, Serialize)]
pub(crate) struct DomainSpec {
    pub dname: String,
}

/// Where in the zone an operation applies, derived from the record name.
#[derive(Debug, Serialize)]
pub(crate) struct ZoneTarget {
    pub subdomain: String,
    pub domains: Vec<DomainSpec>,
}

impl ZoneTarget {
    pub fn from_record_name(record_name: &str) -> Self {
        let (subdomain, apex) = split_record_name(record_name);
        Self {
            subdomain,
            domains: vec![DomainSpec { dname: apex }],
        }
    }
}

/// `input_data` body for `zone/add_txt`.
#[derive(Debug, Serialize)]
pub(crate) struct AddTxtInput {
    pub text: String,
    #[serde(flatten)]
    pub target: ZoneTarget,
}

/// `input_data` body for `zone/remove_record`.
///
/// Identifies the record by type and content as well as name, so a record
/// created by a concurrent invocation racing on the same name is left alone.
#[derive(Debug, Serialize)]
pub(crate) struct RemoveRecordInput {
    pub record_type: &'static str,
    pub content: String,
    #[serde(flatten)]
    pub target: ZoneTarget,
}

/// Result envelope shared by all regru2 responses.
///
/// Success is exactly `result == "success"`; a missing field or any other
/// value is a semantic failure even on HTTP 200. `error_code` / `error_text`
/// accompany failures and are kept for diagnostics.
#[derive(Debug, Deserialize)]
pub(crate) struct RegruEnvelope {
    pub result: Option<String>,
    pub error_code: Option<String>,
    pub error_text: Option<String>,
}

impl RegruEnvelope {
    pub fn is_success(&self) -> bool {
        self.result.as_deref() == Some("success")
    }
}
