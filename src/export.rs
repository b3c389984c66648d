//! Snapshot export to JSON or CSV.

use crate::{Entry, Error, Result};
use chrono::Local;
use serde::Serialize;
use serde_json::{Map, Value};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(Error::InvalidExportType(other.to_string())),
        }
    }
}

/// A rendered export, ready to be saved or offered as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub contents: String,
}

/// Render `snapshot` in `format`.
pub fn export(snapshot: &[Entry], format: ExportFormat) -> Result<ExportFile> {
    let contents = match format {
        ExportFormat::Json => to_json(snapshot)?,
        ExportFormat::Csv => to_csv(snapshot)?,
    };

    Ok(ExportFile {
        file_name: format!("aliases-{}.{}", Local::now().format("%Y%m%d-%H%M%S"), format.extension()),
        mime_type: format.mime_type(),
        contents,
    })
}

fn to_json(snapshot: &[Entry]) -> Result<String> {
    let object: Map<String, Value> =
        snapshot.iter().map(|(alias, template)| (alias.clone(), Value::String(template.clone()))).collect();

    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    object.serialize(&mut serializer)?;

    Ok(String::from_utf8(buffer)?)
}

fn to_csv(snapshot: &[Entry]) -> Result<String> {
    let mut writer =
        csv::WriterBuilder::new().has_headers(false).terminator(csv::Terminator::Any(b'\n')).from_writer(Vec::new());
    for (alias, template) in snapshot {
        writer.write_record([alias, template])?;
    }
    let buffer = writer.into_inner().map_err(|err| csv::Error::from(err.into_error()))?;

    // Rows are newline separated, not newline terminated.
    let mut contents = String::from_utf8(buffer)?;
    if contents.ends_with('\n') {
        contents.pop();
    }
    Ok(contents)
}
