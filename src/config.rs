/// Validated run configuration built from the raw CLI arguments.
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::cli::Cli;
use crate::export::ExportError;

/// File format written to `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Comma-separated rows with a header row.
    #[default]
    Csv,
    /// `KEY=VALUE` lines.
    Env,
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(Self::Csv),
            "env" => Ok(Self::Env),
            other => Err(ExportError::InvalidFormat {
                value: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Csv => "csv",
            Self::Env => "env",
        })
    }
}

/// Everything one export run needs.
///
/// Defaults, as applied by the CLI: `output` = `output.txt`, `format` = csv,
/// `compact` = false, `api_url` = `https://gitlab.com/api/v4`.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Private token sent as `PRIVATE-TOKEN`.
    pub token: String,
    /// Project path, `owner/name`.
    pub project: String,
    /// Destination file, created or truncated.
    pub output: PathBuf,
    /// Output file format.
    pub format: ExportFormat,
    /// Only key and value.
    pub compact: bool,
    /// GitLab REST API root.
    pub api_url: String,
}

impl ExportConfig {
    /// Validate parsed CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::MissingToken` / `MissingProject` when either is
    /// absent or empty, and `ExportError::InvalidFormat` for an unknown format.
    pub fn from_cli(cli: &Cli) -> Result<Self, ExportError> {
        let token = non_empty(cli.token.as_deref()).ok_or(ExportError::MissingToken)?;
        let project = non_empty(cli.project.as_deref()).ok_or(ExportError::MissingProject)?;
        let format = cli.format.parse()?;

        Ok(Self {
            token: token.to_owned(),
            project: project.to_owned(),
            output: PathBuf::from(&cli.output),
            format,
            compact: cli.compact,
            api_url: cli.api_url.clone(),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
