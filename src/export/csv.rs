/// CSV rendering of variable records.
use std::io::{self, Write};

use crate::types::VariableRecord;

const FULL_HEADER: [&str; 7] = [
    "variable_type",
    "key",
    "value",
    "protected",
    "masked",
    "raw",
    "environment_scope",
];
const COMPACT_HEADER: [&str; 2] = ["key", "value"];

/// Write a header row and one row per record, in input order.
///
/// # Errors
///
/// Propagates any I/O error from `out`.
pub fn write_csv<W: Write>(records: &[VariableRecord], out: &mut W, compact: bool) -> io::Result<()> {
    if compact {
        write_row(out, &COMPACT_HEADER)?;
    } else {
        write_row(out, &FULL_HEADER)?;
    }

    for record in records {
        if compact {
            write_row(out, &[record.key.as_str(), record.value.as_str()])?;
        } else {
            write_row(
                out,
                &[
                    record.variable_type.as_str(),
                    record.key.as_str(),
                    record.value.as_str(),
                    bool_str(record.protected),
                    bool_str(record.masked),
                    bool_str(record.raw),
                    record.environment_scope.as_str(),
                ],
            )?;
        }
    }
    Ok(())
}

fn bool_str(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

fn write_row<W: Write>(out: &mut W, fields: &[&str]) -> io::Result<()> {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.write_all(b",")?;
        }
        if needs_quotes(field) {
            write!(out, "\"{}\"", field.replace('"', "\"\""))?;
        } else {
            out.write_all(field.as_bytes())?;
        }
    }
    out.write_all(b"\n")
}

/// A field is quoted when it holds a delimiter, quote or line break, or starts
/// with whitespace that a reader would otherwise trim.
fn needs_quotes(field: &str) -> bool {
    if field.is_empty() {
        return false;
    }
    if field == r"\." {
        return true;
    }
    field.contains([',', '"', '\r', '\n'])
        || field.chars().next().is_some_and(char::is_whitespace)
}
