use crate::config::ApiEndpoints;
use crate::consolidation::domain::SolutionId;
use crate::ports::outbound::SolutionRepository;
use crate::shared::error::EinvError;
use crate::shared::Result;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

/// Header carrying the service API key
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// SolutionApiClient adapter for the remote solution service
///
/// Uses a blocking reqwest client with no request timeout: a call that
/// hangs blocks the run until it completes.
pub struct SolutionApiClient {
    client: reqwest::blocking::Client,
    endpoints: ApiEndpoints,
}

impl SolutionApiClient {
    /// Creates a client for the given endpoints
    pub fn new(endpoints: ApiEndpoints) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("einv-sol/{}", version);
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .user_agent(user_agent)
            .build()?;

        Ok(Self::with_client(client, endpoints))
    }

    /// Creates a client around an already configured reqwest client
    pub fn with_client(client: reqwest::blocking::Client, endpoints: ApiEndpoints) -> Self {
        Self { client, endpoints }
    }

    pub fn create_url(&self) -> &str {
        &self.endpoints.create_url
    }

    pub fn export_url(&self, solution_id: &SolutionId) -> String {
        build_export_url(&self.endpoints.export_base_url, solution_id)
    }

    fn post(&self, url: &str) -> reqwest::blocking::RequestBuilder {
        self.client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.endpoints.api_key)
    }
}

/// Joins the export base URL and the solution id with exactly one slash
pub fn build_export_url(base: &str, solution_id: &SolutionId) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        urlencoding::encode(solution_id.as_str())
    )
}

fn transport_error(step: &str, details: impl Into<String>) -> anyhow::Error {
    EinvError::Transport {
        step: step.to_string(),
        details: details.into(),
    }
    .into()
}

impl SolutionRepository for SolutionApiClient {
    fn create_solution(&self, payload: &[u8]) -> Result<u16> {
        let response = self
            .post(&self.endpoints.create_url)
            .body(payload.to_vec())
            .send()
            .map_err(|e| transport_error("create solution", e.to_string()))?;

        Ok(response.status().as_u16())
    }

    fn export_solution(&self, solution_id: &SolutionId) -> Result<Vec<u8>> {
        let url = self.export_url(solution_id);
        let response = self
            .post(&url)
            .send()
            .map_err(|e| transport_error("export solution", e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(transport_error(
                "export solution",
                format!("Export API returned status code {}", status),
            ));
        }

        let body = response.bytes().map_err(|e| {
            transport_error("export solution", format!("Failed to read response: {}", e))
        })?;
        Ok(body.to_vec())
    }
}
