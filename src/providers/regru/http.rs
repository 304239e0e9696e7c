//! Reg.ru HTTP request methods

use serde::Serialize;

use crate::error::{Result, SolverError};
use crate::http_client::HttpUtils;

use super::params::build_form;
use super::types::RegruEnvelope;
use super::{PROVIDER_NAME, RegruSolver};

impl RegruSolver {
    /// Executes one `POST {api_base}/{action}` call with a form-encoded body
    /// and checks the result envelope.
    ///
    /// Returns the parsed envelope when `result == "success"`. Any other
    /// outcome is an error: transport failures and undecodable bodies come
    /// back from [`HttpUtils`] as transport-class variants, a missing or
    /// non-success `result` becomes [`SolverError::ApiFailure`] carrying the
    /// raw response.
    pub(crate) async fn call<T: Serialize>(
        &self,
        action: &str,
        input: &T,
    ) -> Result<RegruEnvelope> {
        let url = format!("{}/{}", self.api_base, action);
        let form = build_form(&self.credentials, input)?;

        // Log the payload only; the other form fields carry credentials.
        if let Some((_, input_data)) = form.iter().find(|(k, _)| *k == "input_data") {
            log::debug!("[{PROVIDER_NAME}] input_data: {input_data}");
        }

        let request = self.client.post(&url).form(&form);
        let body = HttpUtils::execute_request(request, PROVIDER_NAME, "POST", &url).await?;

        let envelope: RegruEnvelope = HttpUtils::parse_json(&body, PROVIDER_NAME)?;
        if !envelope.is_success() {
            return Err(SolverError::ApiFailure {
                provider: PROVIDER_NAME.to_string(),
                result: envelope.result,
                error_code: envelope.error_code,
                error_text: envelope.error_text,
                raw_response: body,
            });
        }

        Ok(envelope)
    }
}
