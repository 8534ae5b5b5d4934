//! Export integration tests: decode a track file, export it, read it back.

#![cfg(feature = "csv")]

use gps_display::{export_fixes, parse_nmea_file, Dialect, ExportOptions};
use std::fs;

const TRACK: &str = concat!(
    "$GPRMC,111148,A,4905.7046,N,00826.0110,E,010.0,069.4,070709,000.1,E*78\r\n",
    "$GPGGA,111149,4905.7046,N,00826.0110,E,1,04,5.1,130.6,M,47.9,M,,*41\r\n",
);

#[test]
fn csv_export_writes_one_row_per_fix() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("track.nmea");
    fs::write(&input_path, TRACK).unwrap();

    let fixes = parse_nmea_file(&input_path, Dialect::Standard, false).unwrap();
    assert_eq!(fixes.len(), 2);

    let options = ExportOptions {
        csv: true,
        ..Default::default()
    };
    let report = export_fixes(&fixes, &input_path, &options).unwrap();

    let csv_path = report.csv_path.expect("csv export requested");
    assert_eq!(csv_path, dir.path().join("track.gps.csv"));

    let contents = fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "time,date,latitude,ns,longitude,ew,altitude_m,altitude_ft,\
         speed,course,satellites,hdop,locator,valid"
    );
    assert_eq!(
        lines[1],
        "111148,070709,4905.7046,N,826.0110,E,00.,000000,010.0,069.4,,,JN49FC,1"
    );
    assert_eq!(
        lines[2],
        "111149,,4905.7046,N,826.0110,E,130.6,000424,000,0,04,5.1,JN49FC,1"
    );
}

#[test]
fn output_dir_option_redirects_the_export() {
    let input_dir = tempfile::tempdir().unwrap();
    let output_dir = tempfile::tempdir().unwrap();
    let input_path = input_dir.path().join("track.nmea");
    fs::write(&input_path, TRACK).unwrap();

    let fixes = parse_nmea_file(&input_path, Dialect::Standard, false).unwrap();
    let options = ExportOptions {
        csv: true,
        output_dir: Some(output_dir.path().to_string_lossy().into_owned()),
        ..Default::default()
    };
    let report = export_fixes(&fixes, &input_path, &options).unwrap();

    let csv_path = report.csv_path.unwrap();
    assert_eq!(csv_path, output_dir.path().join("track.gps.csv"));
    assert!(csv_path.exists());
    assert!(!input_dir.path().join("track.gps.csv").exists());
}

#[test]
fn nothing_is_written_when_no_format_is_requested() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("track.nmea");
    fs::write(&input_path, TRACK).unwrap();

    let fixes = parse_nmea_file(&input_path, Dialect::Standard, false).unwrap();
    let report = export_fixes(&fixes, &input_path, &ExportOptions::default()).unwrap();
    assert!(report.csv_path.is_none());
    assert!(report.json_path.is_none());
    assert!(!dir.path().join("track.gps.csv").exists());
}

#[cfg(feature = "json")]
#[test]
fn json_export_round_trips_field_values() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("track.nmea");
    fs::write(&input_path, TRACK).unwrap();

    let fixes = parse_nmea_file(&input_path, Dialect::Standard, false).unwrap();
    let options = ExportOptions {
        json: true,
        ..Default::default()
    };
    let report = export_fixes(&fixes, &input_path, &options).unwrap();

    let json_path = report.json_path.expect("json export requested");
    let contents = fs::read_to_string(&json_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();

    let objects = parsed.as_array().unwrap();
    assert_eq!(objects.len(), 2);
    assert_eq!(objects[0]["time"], "111148");
    assert_eq!(objects[0]["date"], "070709");
    assert_eq!(objects[1]["altitude_m"], "130.6");
    assert_eq!(objects[1]["altitude_ft"], "000424");
    assert_eq!(objects[1]["locator"], "JN49FC");
    assert_eq!(objects[1]["valid"], true);
}
