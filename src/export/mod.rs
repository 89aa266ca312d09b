/// Export layer: renders variable records to CSV or `.env` files.
pub mod csv;
pub mod env;
pub mod errors;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::config::ExportFormat;
use crate::types::VariableRecord;

pub use csv::write_csv;
pub use env::write_env;
pub use errors::ExportError;

/// Create (or truncate) `path` and write `records` in `format`.
///
/// The file is flushed and synced before returning. A failure partway through
/// leaves whatever was already written.
///
/// # Errors
///
/// Returns `ExportError::CreateFile` if the file cannot be opened and
/// `ExportError::WriteFile` on any later I/O failure.
pub fn write_file(
    records: &[VariableRecord],
    path: &Path,
    format: ExportFormat,
    compact: bool,
) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::CreateFile {
        path: path.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);

    let written = match format {
        ExportFormat::Csv => write_csv(records, &mut out, compact),
        ExportFormat::Env => write_env(records, &mut out, compact),
    };
    written
        .and_then(|()| out.flush())
        .and_then(|()| out.get_ref().sync_all())
        .map_err(|source| ExportError::WriteFile {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
