/// Blocking client for the GitLab project variables endpoint.
use log::debug;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use url::{Url, form_urlencoded};

use super::errors::GitLabError;
use crate::types::VariableRecord;

/// Header GitLab reads personal/project access tokens from.
const TOKEN_HEADER: &str = "PRIVATE-TOKEN";

/// How much of an undecodable body is echoed to the debug log.
const BODY_PREVIEW_CHARS: usize = 500;

/// Thin wrapper around a `reqwest` blocking client bound to one API root.
#[derive(Debug, Clone)]
pub struct GitLabClient {
    http: Client,
    api_url: String,
}

impl GitLabClient {
    /// Create a client for the API rooted at `api_url` (e.g. `https://gitlab.com/api/v4`).
    #[must_use]
    pub fn new(api_url: &str) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Build the variables endpoint URL for `project` (`owner/name`).
    ///
    /// The project path is query-escaped so the slash becomes `%2F` and GitLab
    /// treats the whole path as a single project identifier.
    ///
    /// # Errors
    ///
    /// Returns `GitLabError::InvalidUrl` if the API root is not a valid URL.
    pub fn variables_url(&self, project: &str) -> Result<Url, GitLabError> {
        let escaped: String = form_urlencoded::byte_serialize(project.as_bytes()).collect();
        let raw = format!("{}/projects/{escaped}/variables", self.api_url);
        Url::parse(&raw).map_err(|source| GitLabError::InvalidUrl { url: raw, source })
    }

    /// Fetch every variable of `project` in API response order.
    ///
    /// Only the first page GitLab returns is read.
    ///
    /// # Errors
    ///
    /// Returns `GitLabError` on network failure, a non-200 status, or a body that
    /// is not a JSON array of variables.
    pub fn fetch_variables(
        &self,
        token: &str,
        project: &str,
    ) -> Result<Vec<VariableRecord>, GitLabError> {
        let url = self.variables_url(project)?;
        debug!("GET {url}");

        let response = self
            .http
            .get(url)
            .header(TOKEN_HEADER, token)
            .send()
            .map_err(GitLabError::Request)?;

        let status = response.status();
        debug!("GitLab answered {status}");
        if status != StatusCode::OK {
            return Err(GitLabError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(GitLabError::ReadBody)?;
        let records = decode_variables(&body)?;
        debug!("Fetched {} variables for {project}", records.len());
        Ok(records)
    }
}

/// Decode a variables response body, preserving element order.
///
/// # Errors
///
/// Returns `GitLabError::Decode` when the body is not a JSON array of objects.
pub fn decode_variables(body: &str) -> Result<Vec<VariableRecord>, GitLabError> {
    serde_json::from_str(body).map_err(|e| {
        debug!("Failed to decode variables response: {e}");
        debug!(
            "Response body (first {BODY_PREVIEW_CHARS} chars): {}",
            body.chars().take(BODY_PREVIEW_CHARS).collect::<String>()
        );
        GitLabError::Decode(e)
    })
}
