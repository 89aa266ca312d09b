/// Fetch a project's variables and write them to the configured file.
use log::info;

use crate::cli::OutputCtx;
use crate::config::ExportConfig;
use crate::export::{ExportError, write_file};
use crate::gitlab::GitLabClient;

/// Run one export.
///
/// The output file is only touched after GitLab answered successfully.
///
/// # Errors
///
/// Returns `ExportError` on network, decode, or file failures.
pub fn run(config: &ExportConfig, ctx: &OutputCtx) -> Result<(), ExportError> {
    let client = GitLabClient::new(&config.api_url);

    let t_fetch = ctx.timer("fetch_variables");
    let records = client.fetch_variables(&config.token, &config.project)?;
    drop(t_fetch);

    let _t_write = ctx.timer("write_file");
    write_file(&records, &config.output, config.format, config.compact)?;

    info!(
        "Exported {} variables of {} to {} ({})",
        records.len(),
        config.project,
        config.output.display(),
        config.format
    );
    Ok(())
}
