/// CLI argument definitions via clap derive.
use clap::Parser;

/// Public GitLab API root; override with `--api-url` for self-managed instances.
pub const DEFAULT_API_URL: &str = "https://gitlab.com/api/v4";

/// Output file used when `--output` is not given.
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// gitlab-extract-variable — export a project's CI/CD variables to a file.
///
/// `token` and `project` are optional at the clap level so that a missing value
/// is reported together with the usage examples instead of clap's own error.
#[derive(Debug, Parser)]
#[command(
    name = "gitlab-extract-variable",
    about = "Export a GitLab project's CI/CD variables to a CSV or .env file",
    version
)]
pub struct Cli {
    /// GitLab user's private token.
    #[arg(long, env = "GITLAB_TOKEN", hide_env_values = true, value_name = "TOKEN")]
    pub token: Option<String>,

    /// GitLab project path ({ProjectOwner}/{ProjectName}).
    #[arg(long, env = "GITLAB_PROJECT", value_name = "OWNER/NAME")]
    pub project: Option<String>,

    /// Output file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Output format (csv or env).
    #[arg(long, value_name = "FORMAT", default_value = "csv")]
    pub format: String,

    /// Compact output (only key and value).
    #[arg(long)]
    pub compact: bool,

    /// GitLab REST API root.
    #[arg(long, env = "GITLAB_API_URL", value_name = "URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Report errors as a JSON envelope on stderr.
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging and phase timings on stderr.
    #[arg(long)]
    pub debug: bool,
}
