use std::{
    error::Error,
    ffi::OsString,
    fmt, fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use exobound_core::ExportRow;

/// File formats the trial history can be exported to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ExportFormat {
    /// One header row followed by one row per trial.
    Csv,
    /// Pretty-printed array of trial objects.
    Json,
}

impl ExportFormat {
    /// Chooses the format from the output file extension.
    pub(crate) fn from_path(path: &Path) -> Result<Self, ExportError> {
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .ok_or_else(|| ExportError::MissingExtension(path.display().to_string()))?;
        match extension.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(ExportError::UnsupportedExtension(extension.to_owned())),
        }
    }
}

/// Errors that can occur while exporting the trial history.
#[derive(Debug)]
pub(crate) enum ExportError {
    /// The output path has no file extension to infer the format from.
    MissingExtension(String),
    /// The output path uses an extension no exporter understands.
    UnsupportedExtension(String),
    /// A CSV record could not be written.
    Csv(csv::Error),
    /// The JSON document could not be written.
    Json(serde_json::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingExtension(path) => {
                write!(f, "export path '{path}' has no file extension")
            }
            Self::UnsupportedExtension(extension) => {
                write!(f, "export format '{extension}' is not supported (use csv or json)")
            }
            Self::Csv(error) => write!(f, "could not write csv export: {error}"),
            Self::Json(error) => write!(f, "could not write json export: {error}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Csv(error) => Some(error),
            Self::Json(error) => Some(error),
            _ => None,
        }
    }
}

/// Serialises the rows into `writer` using the requested format.
pub(crate) fn write_rows<W: Write>(
    format: ExportFormat,
    rows: &[ExportRow],
    writer: W,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Csv => {
            let mut csv = csv::Writer::from_writer(writer);
            for row in rows {
                csv.serialize(row).map_err(ExportError::Csv)?;
            }
            csv.flush()
                .map_err(|error| ExportError::Csv(csv::Error::from(error)))
        }
        ExportFormat::Json => serde_json::to_writer_pretty(writer, rows).map_err(ExportError::Json),
    }
}

/// Writes the rows to `path`, picking the format from its extension.
///
/// The export is rendered in memory and staged next to the target before it
/// replaces `path`, so a failed export never leaves a truncated file behind.
pub(crate) fn export_to_path(path: &Path, rows: &[ExportRow]) -> Result<()> {
    let format = ExportFormat::from_path(path)?;
    let mut buffer = Vec::new();
    write_rows(format, rows, &mut buffer)
        .with_context(|| format!("failed to export history to {}", path.display()))?;

    let staging = staging_path(path);
    fs::write(&staging, &buffer)
        .with_context(|| format!("failed to write export file at {}", staging.display()))?;
    if let Err(error) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(error)
            .with_context(|| format!("failed to move export into {}", path.display()));
    }
    tracing::info!(path = %path.display(), rows = rows.len(), ?format, "history exported");
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".partial");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use exobound_core::RaiderKind;

    fn sample_row(trial_id: u32) -> ExportRow {
        ExportRow {
            trial_id,
            wave_id: 2,
            is_tutorial: false,
            ideal_size: 120,
            standard_size: 100,
            raider: RaiderKind::Green,
            fleet_size: 6,
            message_probability: 0.5,
            allocation: 0.75,
            units_compliant: 4,
            units_to_ideal: 4,
            units_to_standard: 2,
            adaptation_loss: 62.5,
            coordination_loss: 562.5,
            total_loss: 625.0,
            bonus: 0.0,
            timestamp: Utc.with_ymd_and_hms(2025, 2, 3, 4, 5, 6).unwrap(),
        }
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            ExportFormat::from_path(Path::new("out/history.CSV")).expect("csv"),
            ExportFormat::Csv
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("history.json")).expect("json"),
            ExportFormat::Json
        );
        assert!(matches!(
            ExportFormat::from_path(Path::new("history.xlsx")),
            Err(ExportError::UnsupportedExtension(extension)) if extension == "xlsx"
        ));
        assert!(matches!(
            ExportFormat::from_path(Path::new("history")),
            Err(ExportError::MissingExtension(_))
        ));
    }

    #[test]
    fn csv_export_writes_header_and_rows() {
        let mut buffer = Vec::new();
        write_rows(
            ExportFormat::Csv,
            &[sample_row(6), sample_row(7)],
            &mut buffer,
        )
        .expect("csv export");
        let text = String::from_utf8(buffer).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("trial_id,wave_id,is_tutorial,ideal_size"));
        assert!(lines[0].ends_with("bonus,timestamp"));
        assert!(lines[1].starts_with("6,2,false,120,100,green,6,0.5,0.75,4,4,2"));
        assert!(lines[1].contains("2025-02-03T04:05:06Z"));
    }

    #[test]
    fn export_replaces_existing_file_without_leftovers() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("history.csv");
        fs::write(&path, "stale contents that are longer than nothing\n").expect("seed file");

        export_to_path(&path, &[sample_row(6)]).expect("export");
        let text = fs::read_to_string(&path).expect("read export");
        assert_eq!(text.lines().count(), 2);
        assert!(!text.contains("stale"));
        assert!(!staging_path(&path).exists());
    }

    #[test]
    fn failed_export_keeps_previous_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("history.json");
        fs::write(&path, "[]").expect("seed file");
        // A directory squatting on the staging name makes the write fail.
        fs::create_dir(staging_path(&path)).expect("block staging path");

        assert!(export_to_path(&path, &[sample_row(6)]).is_err());
        assert_eq!(fs::read_to_string(&path).expect("read previous"), "[]");
    }

    #[test]
    fn json_export_round_trips() {
        let rows = vec![sample_row(9)];
        let mut buffer = Vec::new();
        write_rows(ExportFormat::Json, &rows, &mut buffer).expect("json export");
        let restored: Vec<ExportRow> = serde_json::from_slice(&buffer).expect("json parses");
        assert_eq!(restored, rows);
    }
}
