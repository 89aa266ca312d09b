/// Shared serializable types: the variable record decoded from GitLab and the
/// JSON error envelope written to stderr.
use serde::{Deserialize, Deserializer, Serialize};

use crate::export::ExportError;

/// One CI/CD variable as returned by `GET /projects/:id/variables`.
///
/// Fields GitLab adds beyond these (`description`, `hidden`, …) are ignored.
/// Missing or `null` fields decode to their empty value; hidden variables come
/// back with `"value": null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableRecord {
    /// `env_var` or `file`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub variable_type: String,
    /// Variable name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    /// Variable value, possibly empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
    /// Only exposed to protected branches and tags.
    #[serde(default, deserialize_with = "null_as_default")]
    pub protected: bool,
    /// Masked in job logs.
    #[serde(default, deserialize_with = "null_as_default")]
    pub masked: bool,
    /// `$` references are not expanded.
    #[serde(default, deserialize_with = "null_as_default")]
    pub raw: bool,
    /// Environment the variable applies to; `*` for all.
    #[serde(default, deserialize_with = "null_as_default")]
    pub environment_scope: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// HTTP status GitLab answered with, when the failure was a status error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ErrorOutput {
    /// Construct from an `ExportError`.
    #[must_use]
    pub fn from_export_error(err: &ExportError) -> Self {
        use crate::gitlab::GitLabError;

        let code = match err {
            ExportError::MissingToken => "missing_token",
            ExportError::MissingProject => "missing_project",
            ExportError::InvalidFormat { .. } => "invalid_format",
            ExportError::CreateFile { .. } => "create_failed",
            ExportError::WriteFile { .. } => "write_failed",
            ExportError::GitLab(gl) => match gl {
                GitLabError::Status { status: 401 | 403 } => "unauthorized",
                GitLabError::Status { status: 404 } => "project_not_found",
                GitLabError::Status { .. } => "http_status",
                GitLabError::InvalidUrl { .. } => "invalid_url",
                GitLabError::Request(_) | GitLabError::ReadBody(_) => "request_failed",
                GitLabError::Decode(_) => "decode_failed",
            },
        };
        let status = match err {
            ExportError::GitLab(gl) => gl.status(),
            _ => None,
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message: err.to_string(),
                status,
            },
        }
    }
}
