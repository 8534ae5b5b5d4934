//! GPS Display Core Library
//!
//! A Rust library implementing the receiver core of a handheld GPS
//! display: a byte-at-a-time NMEA 0183 decoder, a double-buffered fix
//! record, integer conversions (altitude in feet, Maidenhead grid
//! locator) and a 2x16 character display formatter.
//!
//! # Features
//!
//! - **`csv`** (default): Enable CSV track export
//! - **`cli`** (default): Build the command-line interface binary
//! - **`json`**: Enable JSON track export
//! - **`serde`**: Enable serialization/deserialization of types
//!
//! # Quick Start
//!
//! Decode an NMEA log file and walk the published fixes:
//! ```rust,no_run
//! use gps_display::{parse_nmea_file, Dialect};
//! use std::path::Path;
//!
//! let fixes = parse_nmea_file(Path::new("track.nmea"), Dialect::Standard, false).unwrap();
//! for fix in &fixes {
//!     println!("{} {} {}", fix.time, fix.locator(), fix.altitude_feet());
//! }
//! ```
//!
//! Feed bytes as they arrive, the way the device firmware does:
//! ```rust
//! use gps_display::{render, Dialect, DisplayMode, GpsReceiver};
//!
//! let mut receiver = GpsReceiver::new(Dialect::Standard);
//! let sentence = "$GPGGA,111148,4905.7046,N,00826.0110,E,1,04,5.1,130.6,M,47.9,M,,*41\n";
//! for &byte in sentence.as_bytes() {
//!     if receiver.feed(byte) {
//!         let [line1, line2] = render(receiver.record(), DisplayMode::TimeLocator);
//!         println!("{line1}\n{line2}");
//!         receiver.clear();
//!     }
//! }
//! ```
//!
//! # Public API
//!
//! ## Decoding
//! - [`GpsReceiver`] - Decoder plus stable record, byte-in fix-out
//! - [`NmeaDecoder`] - The raw sentence decoder, for custom hand-off
//! - [`publish`] - Finalize a pending record into a stable one
//! - [`parse_nmea_file`] / [`parse_nmea_bytes`] - Batch decoding helpers
//!
//! ## Data Types
//! - [`GpsRecord`] - One fix as fixed-capacity ASCII fields
//! - [`FixedField`] - Bounded field buffer with positional writes
//! - [`Dialect`] - Receiver dialect (standard NMEA vs APRS trackers)
//! - [`DisplayMode`] - The six display screens
//!
//! ## Conversion and Display
//! - [`altitude_to_feet`] - Integer meters-to-feet approximation
//! - [`grid_locator`] - Six-character Maidenhead locator
//! - [`render`] - Format a record as two 16-column display lines
//!
//! ## Export
//! - [`ExportOptions`] / [`ExportReport`] - Export configuration and results
//! - [`export_fixes`] - Write collected fixes to CSV / JSON

// Module declarations
pub mod conversion;
pub mod display;
pub mod error;
pub mod export;
pub mod parser;
pub mod types;

// Re-export everything from modules for convenience
#[allow(ambiguous_glob_reexports)]
pub use conversion::*;
#[allow(ambiguous_glob_reexports)]
pub use display::*;
#[allow(ambiguous_glob_reexports)]
pub use error::*;
#[allow(ambiguous_glob_reexports)]
pub use export::*;
#[allow(ambiguous_glob_reexports)]
pub use parser::*;
#[allow(ambiguous_glob_reexports)]
pub use types::*;

// Re-export Result type for convenience
pub use anyhow::Result;
