/// Network adapters for external API calls
mod solution_api_client;

pub use solution_api_client::{build_export_url, SolutionApiClient, API_KEY_HEADER};
