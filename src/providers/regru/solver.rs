//! Reg.ru add/remove orchestration and `Dns01Solver` impl

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::Dns01Solver;
use crate::types::{CredentialField, FieldType, SolverMetadata, SolverType};

use super::types::{AddTxtInput, RemoveRecordInput, ZoneTarget};
use super::{PROVIDER_NAME, RegruSolver};

impl RegruSolver {
    /// Creates a TXT record at `record_name` with the given content.
    ///
    /// Every failure is a hard error, transport-level or a non-success
    /// result envelope alike: issuance must not proceed for a record that
    /// was never provisioned.
    pub async fn add_txt_record(&self, record_name: &str, record_content: &str) -> Result<()> {
        let input = AddTxtInput {
            text: record_content.to_string(),
            target: ZoneTarget::from_record_name(record_name),
        };
        self.call("zone/add_txt", &input).await?;
        log::debug!("[{PROVIDER_NAME}] Added TXT record at {record_name}");
        Ok(())
    }

    /// Removes the TXT record at `record_name` whose content matches
    /// `record_content`.
    ///
    /// Matching on content as well as name keeps a concurrent invocation's
    /// record on the same name intact. Deleting a record that no longer
    /// exists reports failure through the result envelope.
    pub async fn del_txt_record(&self, record_name: &str, record_content: &str) -> Result<()> {
        let input = RemoveRecordInput {
            record_type: "TXT",
            content: record_content.to_string(),
            target: ZoneTarget::from_record_name(record_name),
        };
        self.call("zone/remove_record", &input).await?;
        log::debug!("[{PROVIDER_NAME}] Deleted TXT record at {record_name}");
        Ok(())
    }
}

#[async_trait]
impl Dns01Solver for RegruSolver {
    fn id(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn metadata() -> SolverMetadata {
        SolverMetadata {
            id: SolverType::Regru,
            name: "Reg.ru".to_string(),
            description: "Fulfills dns-01 challenges through the Reg.ru zone API".to_string(),
            required_fields: vec![
                CredentialField {
                    key: "username".to_string(),
                    label: "Account username".to_string(),
                    field_type: FieldType::Text,
                },
                CredentialField {
                    key: "password".to_string(),
                    label: "Account password".to_string(),
                    field_type: FieldType::Password,
                },
            ],
        }
    }

    async fn perform(&self, domain: &str, record_name: &str, validation: &str) -> Result<()> {
        self.add_txt_record(record_name, validation)
            .await
            .inspect_err(|e| {
                log::error!("[{PROVIDER_NAME}] Failed to add TXT record for {domain}: {e}");
            })
    }

    async fn cleanup(&self, domain: &str, record_name: &str, validation: &str) {
        if let Err(e) = self.del_txt_record(record_name, validation).await {
            log::warn!(
                "[{PROVIDER_NAME}] Failed to delete TXT record {record_name} for {domain}: {e}"
            );
        }
    }
}
