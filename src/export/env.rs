/// `.env` rendering of variable records. Values are written verbatim.
use std::io::{self, Write};

use crate::types::VariableRecord;

const FULL_HEADER: &str = "# key=value\t# variable-type protected masked raw environment-scope";
const COMPACT_HEADER: &str = "key=value";

/// Write a header line and one `KEY=VALUE` line per record, in input order.
///
/// Full mode appends `\t# type protected masked raw scope` to every line.
///
/// # Errors
///
/// Propagates any I/O error from `out`.
pub fn write_env<W: Write>(records: &[VariableRecord], out: &mut W, compact: bool) -> io::Result<()> {
    writeln!(out, "{}", if compact { COMPACT_HEADER } else { FULL_HEADER })?;

    for r in records {
        if compact {
            writeln!(out, "{}={}", r.key, r.value)?;
        } else {
            writeln!(
                out,
                "{}={}\t# {} {} {} {} {}",
                r.key, r.value, r.variable_type, r.protected, r.masked, r.raw, r.environment_scope
            )?;
        }
    }
    Ok(())
}
