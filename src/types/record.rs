//! The central GPS record and its fixed-width field buffers.
//!
//! The receiver hands us every quantity as ASCII text at a fixed maximum
//! width, and the display consumes it column-by-column, so fields are kept
//! as capacity-checked text buffers rather than parsed numbers. Width is
//! load-bearing: the LCD formatter indexes into these strings directly.

use crate::conversion::{altitude_to_feet, grid_locator};

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A fixed-capacity ASCII field buffer with positional writes.
///
/// Replaces the firmware's bare `char[N]` arrays: writes past the capacity
/// are dropped instead of running into the neighboring field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedField<const N: usize> {
    bytes: [u8; N],
    len: u8,
}

impl<const N: usize> FixedField<N> {
    pub const fn new() -> Self {
        Self {
            bytes: [0; N],
            len: 0,
        }
    }

    /// Store `byte` at `pos`, extending the field length if needed.
    /// Positions at or beyond the capacity are silently dropped.
    pub fn put(&mut self, pos: usize, byte: u8) {
        if pos < N {
            self.bytes[pos] = byte;
            if pos as u8 >= self.len {
                self.len = pos as u8 + 1;
            }
        }
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Replace the field contents, truncating at capacity.
    pub fn set(&mut self, text: &str) {
        self.len = 0;
        for (i, &b) in text.as_bytes().iter().take(N).enumerate() {
            self.bytes[i] = b;
            self.len = i as u8 + 1;
        }
    }

    /// Drop everything from position `n` onward.
    pub fn truncate(&mut self, n: usize) {
        if (n as u8) < self.len {
            self.len = n as u8;
        }
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The field text. A field holding non-UTF-8 garbage (possible when the
    /// transport drops bytes mid-sentence) reads back as empty.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or("")
    }

    /// Byte at `pos`, if written.
    pub fn byte_at(&self, pos: usize) -> Option<u8> {
        if pos < self.len as usize {
            Some(self.bytes[pos])
        } else {
            None
        }
    }
}

impl<const N: usize> Default for FixedField<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> std::fmt::Display for FixedField<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> PartialEq<&str> for FixedField<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(feature = "serde")]
impl<const N: usize> Serialize for FixedField<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de, const N: usize> Deserialize<'de> for FixedField<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s.len() > N {
            return Err(de::Error::custom(format!(
                "field '{}' exceeds capacity {}",
                s, N
            )));
        }
        let mut field = FixedField::new();
        field.set(&s);
        Ok(field)
    }
}

/// Record status flags.
///
/// `complete` is set once per finished sentence; `valid` mirrors the
/// receiver's own fix-quality indicator and is not plausibility-checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GpsStatus {
    pub complete: bool,
    pub valid: bool,
}

impl GpsStatus {
    pub fn clear(&mut self) {
        self.complete = false;
        self.valid = false;
    }
}

/// One GPS fix as fixed-width NMEA text fields.
///
/// Two instances exist at runtime: the decoder's pending record, mutated
/// field-by-field as bytes arrive, and the stable record the finalizer
/// publishes into. Consumers must read (or copy out) the stable record
/// before the next sentence completes — the hand-off is single-slot,
/// most-recent-wins, never queued.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GpsRecord {
    pub status: GpsStatus,
    /// UTC time, HHMMSS; some modules append a sub-second suffix which the
    /// finalizer strips for the Standard dialect.
    pub time: FixedField<10>,
    /// Date in DDMMYY format (Standard dialect only).
    pub date: FixedField<6>,
    /// Latitude in DDMM.MMMM format.
    pub latitude: FixedField<9>,
    pub north_south: FixedField<1>,
    /// Longitude in DDDMM.MMMM format.
    pub longitude: FixedField<10>,
    pub east_west: FixedField<1>,
    /// Altitude above MSL in meters, MMM.MMM format.
    pub altitude: FixedField<7>,
    /// Speed in knots (RMC) or km/h (VTG), kkk.kk format.
    pub speed: FixedField<6>,
    /// Track angle in degrees, ddd.dd format.
    pub course: FixedField<6>,
    /// Horizontal dilution of precision (Standard dialect only).
    pub hdop: FixedField<4>,
    /// Number of satellites tracked, 2 digits.
    pub satellites: FixedField<2>,
}

impl GpsRecord {
    pub fn new() -> Self {
        let mut record = Self {
            status: GpsStatus::default(),
            time: FixedField::new(),
            date: FixedField::new(),
            latitude: FixedField::new(),
            north_south: FixedField::new(),
            longitude: FixedField::new(),
            east_west: FixedField::new(),
            altitude: FixedField::new(),
            speed: FixedField::new(),
            course: FixedField::new(),
            hdop: FixedField::new(),
            satellites: FixedField::new(),
        };
        record.seed_defaults();
        record
    }

    /// Return the record to its pre-fix state: everything blank except the
    /// handful of defaults the display needs before the receiver has lock.
    pub fn reset(&mut self) {
        self.status.clear();
        self.time.clear();
        self.date.clear();
        self.latitude.clear();
        self.longitude.clear();
        self.altitude.clear();
        self.speed.clear();
        self.course.clear();
        self.hdop.clear();
        self.satellites.clear();
        self.seed_defaults();
    }

    fn seed_defaults(&mut self) {
        self.speed.set("000");
        self.course.set("000");
        self.altitude.set("00.");
        self.north_south.set("N");
        self.east_west.set("E");
    }

    pub fn is_complete(&self) -> bool {
        self.status.complete
    }

    pub fn is_valid(&self) -> bool {
        self.status.valid
    }

    /// Altitude converted to whole feet as a 6-digit zero-padded string.
    /// Computed fresh on every call.
    pub fn altitude_feet(&self) -> String {
        altitude_to_feet(self.altitude.as_str())
    }

    /// The 6-character Maidenhead locator for the current position.
    /// Computed fresh on every call; meaningless before a valid fix, so
    /// callers should check `is_valid()` first.
    pub fn locator(&self) -> String {
        grid_locator(
            self.latitude.as_str(),
            self.north_south.byte_at(0).unwrap_or(b'N') as char,
            self.longitude.as_str(),
            self.east_west.byte_at(0).unwrap_or(b'E') as char,
        )
    }
}

impl Default for GpsRecord {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_past_capacity_is_dropped() {
        let mut field: FixedField<3> = FixedField::new();
        field.put(0, b'a');
        field.put(1, b'b');
        field.put(2, b'c');
        field.put(3, b'd');
        field.put(17, b'e');
        assert_eq!(field.as_str(), "abc");
        assert_eq!(field.len(), 3);
    }

    #[test]
    fn put_overwrites_in_place() {
        let mut field: FixedField<6> = FixedField::new();
        field.set("069.4");
        field.put(0, b'1');
        assert_eq!(field.as_str(), "169.4");
        assert_eq!(field.len(), 5);
    }

    #[test]
    fn set_truncates_at_capacity() {
        let mut field: FixedField<4> = FixedField::new();
        field.set("123456");
        assert_eq!(field.as_str(), "1234");
    }

    #[test]
    fn new_record_carries_pre_fix_defaults() {
        let record = GpsRecord::new();
        assert_eq!(record.speed, "000");
        assert_eq!(record.course, "000");
        assert_eq!(record.altitude, "00.");
        assert_eq!(record.north_south, "N");
        assert_eq!(record.east_west, "E");
        assert!(record.time.is_empty());
        assert!(!record.is_complete());
        assert!(!record.is_valid());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut record = GpsRecord::new();
        record.time.set("111148");
        record.speed.set("123.4");
        record.status.valid = true;
        record.reset();
        assert!(record.time.is_empty());
        assert_eq!(record.speed, "000");
        assert!(!record.is_valid());
    }
}
