//! Track export: write collected fixes to CSV and JSON files.
//!
//! Output files sit next to the input by default, named after its stem
//! with a `.gps.csv` / `.gps.json` suffix, or under `output_dir` when one
//! is given.

use crate::error::GpsError;
use crate::types::GpsRecord;
use crate::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Export options for controlling output formats
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub csv: bool,
    pub json: bool,
    pub output_dir: Option<String>,
}

/// Paths written by an export run, `None` for formats not requested.
#[derive(Debug, Clone, Default)]
pub struct ExportReport {
    pub csv_path: Option<PathBuf>,
    pub json_path: Option<PathBuf>,
}

/// Compute the output paths an export run would use for `input_path`,
/// creating the output directory if needed.
pub fn compute_export_paths(
    input_path: &Path,
    options: &ExportOptions,
) -> Result<(PathBuf, PathBuf)> {
    let base_name = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("track");

    let output_dir = if let Some(ref dir) = options.output_dir {
        PathBuf::from(dir)
    } else {
        input_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf()
    };

    if !output_dir.exists() {
        std::fs::create_dir_all(&output_dir)
            .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;
    }

    let csv_path = output_dir.join(format!("{base_name}.gps.csv"));
    let json_path = output_dir.join(format!("{base_name}.gps.json"));
    Ok((csv_path, json_path))
}

/// Run the requested exports for one input file's fixes.
pub fn export_fixes(
    fixes: &[GpsRecord],
    input_path: &Path,
    options: &ExportOptions,
) -> Result<ExportReport> {
    let mut report = ExportReport::default();

    #[cfg(feature = "csv")]
    if options.csv {
        let (csv_path, _) = compute_export_paths(input_path, options)?;
        export_to_csv(fixes, &csv_path)?;
        report.csv_path = Some(csv_path);
    }

    #[cfg(feature = "json")]
    if options.json {
        let (_, json_path) = compute_export_paths(input_path, options)?;
        export_to_json(fixes, &json_path)?;
        report.json_path = Some(json_path);
    }

    Ok(report)
}

/// Export fixes to CSV, one row per published fix.
#[cfg(feature = "csv")]
pub fn export_to_csv(fixes: &[GpsRecord], output_path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(output_path)
        .map_err(|e| GpsError::Export(format!("failed to create CSV file {:?}: {e}", output_path)))?;

    writer.write_record([
        "time",
        "date",
        "latitude",
        "ns",
        "longitude",
        "ew",
        "altitude_m",
        "altitude_ft",
        "speed",
        "course",
        "satellites",
        "hdop",
        "locator",
        "valid",
    ])?;

    for fix in fixes {
        writer.write_record([
            fix.time.as_str(),
            fix.date.as_str(),
            fix.latitude.as_str().trim_start(),
            fix.north_south.as_str(),
            fix.longitude.as_str().trim_start(),
            fix.east_west.as_str(),
            fix.altitude.as_str(),
            &fix.altitude_feet(),
            fix.speed.as_str(),
            fix.course.as_str(),
            fix.satellites.as_str(),
            fix.hdop.as_str(),
            &fix.locator(),
            if fix.is_valid() { "1" } else { "0" },
        ])?;
    }

    writer
        .flush()
        .map_err(|e| GpsError::Export(format!("failed to flush CSV file {:?}: {e}", output_path)))?;

    Ok(())
}

/// Export fixes to a JSON array, one object per published fix.
#[cfg(feature = "json")]
pub fn export_to_json(fixes: &[GpsRecord], output_path: &Path) -> Result<()> {
    use std::fs::File;
    use std::io::BufWriter;

    let objects: Vec<serde_json::Value> = fixes
        .iter()
        .map(|fix| {
            serde_json::json!({
                "time": fix.time.as_str(),
                "date": fix.date.as_str(),
                "latitude": fix.latitude.as_str().trim_start(),
                "ns": fix.north_south.as_str(),
                "longitude": fix.longitude.as_str().trim_start(),
                "ew": fix.east_west.as_str(),
                "altitude_m": fix.altitude.as_str(),
                "altitude_ft": fix.altitude_feet(),
                "speed": fix.speed.as_str(),
                "course": fix.course.as_str(),
                "satellites": fix.satellites.as_str(),
                "hdop": fix.hdop.as_str(),
                "locator": fix.locator(),
                "valid": fix.is_valid(),
            })
        })
        .collect();

    let file = File::create(output_path)
        .map_err(|e| GpsError::Export(format!("failed to create JSON file {:?}: {e}", output_path)))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &objects)
        .map_err(|e| GpsError::Export(format!("failed to write JSON file {:?}: {e}", output_path)))?;

    Ok(())
}
