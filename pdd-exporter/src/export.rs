//! CSV export of a record list.
//!
//! Output format:
//!
//! ```text
//! domain,fqdn,subdomain,type,content,priority,ttl
//! example.com,www.example.com,www,A,1.2.3.4,,3600
//! ```
//!
//! Fields are written verbatim. A field containing `,`, `"`, CR or LF is
//! quoted RFC 4180 style so the row still has seven columns.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use pdd_exporter_provider::DnsRecord;

use crate::error::{ExportError, Result};

/// Header row, always written
pub const CSV_HEADER: &str = "domain,fqdn,subdomain,type,content,priority,ttl";

/// Prefix of every export file name
pub const FILE_PREFIX: &str = "pdd-exporter-";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// `pdd-exporter-YYYY-MM-DD_HH-MM-SS` for the given local instant
pub fn export_file_name(at: &DateTime<Local>) -> String {
    format!("{FILE_PREFIX}{}", at.format(TIMESTAMP_FORMAT))
}

/// Full path of the export file inside `dir`
pub fn export_file_path(dir: &Path, at: &DateTime<Local>) -> PathBuf {
    dir.join(export_file_name(at))
}

/// Directory containing the running executable
pub fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(ExportError::ExecutableDir)?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        ExportError::ExecutableDir(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} has no parent directory", exe.display()),
        ))
    })
}

/// One CSV row (without line terminator)
pub fn format_record(record: &DnsRecord) -> String {
    let ttl = record.ttl.to_string();
    [
        record.domain.as_str(),
        record.fqdn.as_str(),
        record.subdomain.as_str(),
        record.record_type.as_str(),
        record.content.as_str(),
        record.priority.as_str(),
        ttl.as_str(),
    ]
    .into_iter()
    .map(escape_field)
    .collect::<Vec<_>>()
    .join(",")
}

/// Header plus one `\n`-terminated row per record, in order
pub fn write_records<W: Write>(mut writer: W, records: &[DnsRecord]) -> io::Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for record in records {
        writeln!(writer, "{}", format_record(record))?;
    }
    writer.flush()
}

/// Create `path` (truncating an existing file), write the records and
/// return the absolute path of the result.
///
/// The file handle is closed before returning, on success and on error.
pub fn write_export_file(path: &Path, records: &[DnsRecord]) -> Result<PathBuf> {
    let file = File::create(path).map_err(|source| ExportError::CreateFile {
        path: path.to_path_buf(),
        source,
    })?;

    write_records(BufWriter::new(file), records).map_err(|source| ExportError::WriteFile {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf()))
}

fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
