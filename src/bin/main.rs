//! CLI binary for the GPS display core
//!
//! Decodes NMEA log files and prints each published fix as the two
//! 16-column lines the device would show, with optional CSV / JSON
//! track export.

use anyhow::Result;
use clap::{Arg, Command};
use glob::glob;
use gps_display::{
    export_fixes, parse_nmea_file, render, Dialect, DisplayMode, ExportOptions,
};
use std::path::Path;

fn main() -> Result<()> {
    let matches = Command::new("GPS Display")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Decode NMEA 0183 log files and render fixes as 2x16 display screens.")
        .arg(
            Arg::new("files")
                .help("NMEA files to decode (.nmea, .txt, .log extensions supported, case-insensitive, supports globbing)")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("dialect")
                .long("dialect")
                .help("Receiver dialect: standard or aprs")
                .value_name("DIALECT")
                .default_value("standard"),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .help("Display screen: time-locator, date-time, lat-lon, locator-altitude, speed-route or dop")
                .value_name("MODE")
                .default_value("date-time"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug output and per-fix record dumps")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("csv")
                .long("csv")
                .help("Export decoded fixes to CSV files (creates .gps.csv next to the input)")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Export decoded fixes to JSON files (creates .gps.json next to the input)")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .help("Directory for export output files (default: same as input file)")
                .value_name("DIR"),
        )
        .get_matches();

    let debug = matches.get_flag("debug");
    let export_csv = matches.get_flag("csv");
    let export_json = matches.get_flag("json");
    let output_dir = matches.get_one::<String>("output-dir").cloned();
    let dialect: Dialect = matches.get_one::<String>("dialect").unwrap().parse()?;
    let mode: DisplayMode = matches.get_one::<String>("mode").unwrap().parse()?;
    let file_patterns: Vec<&String> = matches.get_many::<String>("files").unwrap().collect();

    let export_options = ExportOptions {
        csv: export_csv,
        json: export_json,
        output_dir,
    };

    let mut processed_files = 0;

    if debug {
        println!("Input patterns: {file_patterns:?}");
    }

    // Collect all valid file paths
    let mut valid_paths = Vec::new();
    for pattern in &file_patterns {
        let paths: Vec<_> = if pattern.contains('*') || pattern.contains('?') {
            match glob(pattern) {
                Ok(glob_iter) => match glob_iter.collect::<Result<Vec<_>, _>>() {
                    Ok(paths) => {
                        if debug {
                            println!("Glob pattern '{pattern}' matched {} files", paths.len());
                        }
                        paths
                    }
                    Err(e) => {
                        eprintln!("Error expanding glob pattern '{pattern}': {e}");
                        continue;
                    }
                },
                Err(e) => {
                    eprintln!("Invalid glob pattern '{pattern}': {e}");
                    continue;
                }
            }
        } else {
            vec![Path::new(pattern).to_path_buf()]
        };

        for path in paths {
            if !path.exists() {
                eprintln!("Warning: File does not exist: {path:?}");
                continue;
            }

            let valid_extension = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| {
                    let ext_lower = ext.to_ascii_lowercase();
                    ext_lower == "nmea" || ext_lower == "txt" || ext_lower == "log"
                })
                .unwrap_or(false);

            if !valid_extension {
                let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("none");
                eprintln!("Warning: Skipping file with unsupported extension '{ext}': {path:?}");
                continue;
            }

            valid_paths.push(path);
        }
    }

    if valid_paths.is_empty() {
        eprintln!("Error: No valid files found to process.");
        eprintln!("Supported extensions: .nmea, .txt, .log (case-insensitive)");
        eprintln!("Input patterns were: {file_patterns:?}");
        std::process::exit(1);
    }

    for (index, path) in valid_paths.iter().enumerate() {
        if index > 0 {
            println!();
        }

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown");
        println!("Processing: {filename}");

        match parse_nmea_file(path, dialect, debug) {
            Ok(fixes) => {
                for fix in &fixes {
                    let [line1, line2] = render(fix, mode);
                    println!("LCD0: '{line1}'");
                    println!("LCD1: '{line2}'");
                    if debug {
                        println!(
                            "  time={} date={} lat={}{} lon={}{} alt={}m ({}ft) \
                             speed={} course={} sats={} hdop={} locator={} valid={}",
                            fix.time,
                            fix.date,
                            fix.latitude.as_str().trim_start(),
                            fix.north_south,
                            fix.longitude.as_str().trim_start(),
                            fix.east_west,
                            fix.altitude,
                            fix.altitude_feet(),
                            fix.speed,
                            fix.course,
                            fix.satellites,
                            fix.hdop,
                            fix.locator(),
                            fix.is_valid()
                        );
                    }
                }
                println!("Decoded {} fixes", fixes.len());

                match export_fixes(&fixes, path, &export_options) {
                    Ok(report) => {
                        if let Some(csv_path) = report.csv_path {
                            println!("Exported track to: {}", csv_path.display());
                        }
                        if let Some(json_path) = report.json_path {
                            println!("Exported track to: {}", json_path.display());
                        }
                    }
                    Err(e) => {
                        eprintln!("Error exporting {filename}: {e}");
                    }
                }

                processed_files += 1;
            }
            Err(e) => {
                eprintln!("Error processing {filename}: {e}");
                eprintln!("Continuing with next file...");
            }
        }
    }

    if processed_files == 0 {
        eprintln!(
            "Error: No files were successfully processed out of {} files found.",
            valid_paths.len()
        );
        eprintln!("Use --debug flag for more detailed error information.");
        std::process::exit(1);
    }

    Ok(())
}
