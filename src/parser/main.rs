//! Host-side orchestration: decoder, finalizer and stable record wired
//! into the polling-loop shape the device firmware uses.

use crate::parser::decoder::NmeaDecoder;
use crate::parser::finalizer::publish;
use crate::types::{Dialect, GpsRecord};
use crate::Result;
use anyhow::Context;
use std::path::Path;

/// Decoder plus the stable record, for hosts that want the device's
/// byte-in, fix-out calling convention without wiring the pieces up
/// themselves.
///
/// Single-threaded by design, like the firmware loop it mirrors: one
/// producer feeds bytes, the stable record is read between publishes.
/// A multi-threaded host must wrap the whole receiver in its own mutual
/// exclusion or move fixes out over a channel.
#[derive(Debug, Clone)]
pub struct GpsReceiver {
    decoder: NmeaDecoder,
    stable: GpsRecord,
}

impl GpsReceiver {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            decoder: NmeaDecoder::new(dialect),
            stable: GpsRecord::new(),
        }
    }

    /// Feed one byte. On sentence completion the pending record is
    /// published immediately and `true` is returned; the caller should
    /// then read `record()` and call `clear()` before feeding on, or the
    /// next fix will overwrite it.
    pub fn feed(&mut self, byte: u8) -> bool {
        if self.decoder.feed(byte) {
            let dialect = self.decoder.dialect();
            publish(self.decoder.pending_mut(), &mut self.stable, dialect);
            true
        } else {
            false
        }
    }

    /// The most recently published fix.
    pub fn record(&self) -> &GpsRecord {
        &self.stable
    }

    /// Mark the stable record as consumed.
    pub fn clear(&mut self) {
        self.stable.status.clear();
    }

    pub fn decoder(&self) -> &NmeaDecoder {
        &self.decoder
    }
}

/// Decode a byte stream and collect a snapshot of every published fix.
pub fn parse_nmea_bytes(data: &[u8], dialect: Dialect, debug: bool) -> Vec<GpsRecord> {
    let mut receiver = GpsReceiver::new(dialect);
    let mut fixes = Vec::new();

    for &byte in data {
        if receiver.feed(byte) {
            if debug {
                println!(
                    "fix: time={} lat={}{} lon={}{} valid={}",
                    receiver.record().time,
                    receiver.record().latitude,
                    receiver.record().north_south,
                    receiver.record().longitude,
                    receiver.record().east_west,
                    receiver.record().is_valid()
                );
            }
            fixes.push(receiver.record().clone());
            receiver.clear();
        }
    }

    fixes
}

/// Decode an NMEA log file and collect every published fix.
pub fn parse_nmea_file(file_path: &Path, dialect: Dialect, debug: bool) -> Result<Vec<GpsRecord>> {
    if debug {
        let metadata = std::fs::metadata(file_path)?;
        println!("File size: {} bytes", metadata.len());
    }

    let data = std::fs::read(file_path)
        .with_context(|| format!("Failed to read NMEA file: {:?}", file_path))?;

    Ok(parse_nmea_bytes(&data, dialect, debug))
}
