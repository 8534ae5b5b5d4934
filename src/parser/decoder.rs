//! NMEA sentence classifier and field demultiplexer.
//!
//! A single-byte-at-a-time transducer: the host feeds it every character
//! coming off the receiver's serial port and polls the return value for
//! sentence completion. No buffering of whole lines, no checksum
//! verification, no I/O — just comma counting and positional routing into
//! the pending record's field buffers.

use crate::types::{Dialect, GpsRecord};

/// Out-of-band reset marker. Not part of the NMEA alphabet, so a real
/// receiver can never emit it; hosts inject it to restart decoding after
/// a signal loss.
pub const RESET_BYTE: u8 = 0;

/// Comma-count sentinel meaning "not inside any sentence". Larger than any
/// field index the routing tables know, so every byte is ignored until the
/// next `'$'`.
const NO_SENTENCE: u8 = 25;

/// Sentence types the classifier distinguishes.
///
/// Classification rests on a single discriminating letter that occurs in
/// the sentence identifier before the first comma. The legacy device
/// shipped with this heuristic and field units calibrated against it, so
/// it is kept as-is rather than parsing the full `$GPxxx` token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SentenceType {
    #[default]
    None,
    /// Recommended Minimum — validity, position, speed, course, date.
    Rmc,
    /// GPS Fix Data — position, fix quality, satellites, HDOP, altitude.
    Gga,
    /// Course and ground speed. Decoded in the Standard dialect only.
    Vtg,
    /// DOP and active satellites — recognized so that its fields can be
    /// ignored (its identifier shares the 'A' that marks GGA).
    Gsa,
}

/// The streaming NMEA decoder.
///
/// Owns the pending record exclusively; nothing else may mutate it while
/// bytes are being fed. Not re-entrant — feed it from a single task or
/// polling loop only. Never blocks and never fails: unknown sentences are
/// consumed and discarded, truncated ones simply stay incomplete.
#[derive(Debug, Clone)]
pub struct NmeaDecoder {
    dialect: Dialect,
    sentence: SentenceType,
    commas: u8,
    cursor: u8,
    pending: GpsRecord,
}

impl NmeaDecoder {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            sentence: SentenceType::None,
            commas: NO_SENTENCE,
            cursor: 0,
            pending: GpsRecord::new(),
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn sentence_type(&self) -> SentenceType {
        self.sentence
    }

    /// The record currently being assembled.
    pub fn pending(&self) -> &GpsRecord {
        &self.pending
    }

    /// Mutable access for the finalizer, which copies the pending record
    /// out and clears it after each completed sentence.
    pub fn pending_mut(&mut self) -> &mut GpsRecord {
        &mut self.pending
    }

    /// Feed one byte from the receiver. Returns `true` exactly when a
    /// decodable sentence (RMC or GGA) just reached its terminator and the
    /// pending record is ready to be published.
    pub fn feed(&mut self, byte: u8) -> bool {
        match byte {
            RESET_BYTE => {
                self.commas = NO_SENTENCE;
                self.sentence = SentenceType::None;
                self.pending.reset();
                false
            }
            b'$' => {
                // Start of sentence. The pending record is deliberately
                // not cleared here: type detection runs across the
                // identifier and an unpublished record must survive
                // sentences that never complete.
                self.commas = 0;
                self.sentence = SentenceType::None;
                false
            }
            b',' => {
                self.commas = self.commas.saturating_add(1);
                self.cursor = 0;
                false
            }
            b'\n' if matches!(self.sentence, SentenceType::Rmc | SentenceType::Gga) => {
                self.pending.status.complete = true;
                true
            }
            _ if self.commas == 0 => {
                self.classify(byte);
                false
            }
            _ => {
                self.route(byte);
                false
            }
        }
    }

    /// Inspect an identifier byte (before the first comma) for the letters
    /// that tell the five supported sentences apart.
    fn classify(&mut self, byte: u8) {
        match byte {
            // Only GPRMC contains a 'C'.
            b'C' => self.sentence = SentenceType::Rmc,
            // GPGSA carries the 'S'; noted so its 'A' is not mistaken for GGA.
            b'S' => self.sentence = SentenceType::Gsa,
            b'A' => {
                if self.sentence != SentenceType::Gsa {
                    self.sentence = SentenceType::Gga;
                }
            }
            b'V' if self.dialect == Dialect::Standard => self.sentence = SentenceType::Vtg,
            _ => {}
        }
    }

    /// Route a field byte by (sentence type, comma count).
    fn route(&mut self, byte: u8) {
        match self.sentence {
            SentenceType::Rmc => self.route_rmc(byte),
            SentenceType::Gga => self.route_gga(byte),
            SentenceType::Vtg => self.route_vtg(byte),
            // GSA is recognized only to be discarded; unknown sentences
            // are consumed without routing.
            SentenceType::Gsa | SentenceType::None => {}
        }
    }

    // "$GPRMC,111148,A,4905.7046,N,00826.0110,E,000.0,069.4,070709,000.1,E*78"
    fn route_rmc(&mut self, byte: u8) {
        let standard = self.dialect == Dialect::Standard;
        match self.commas {
            1 => self.store(byte, |r| &mut r.time),
            // 'A' = valid fix, 'V' = receiver warning.
            2 => self.pending.status.valid = byte == b'A',
            // Position is redundant with GGA; the APRS build skips it.
            3 if standard => self.store(byte, |r| &mut r.latitude),
            4 if standard => self.store(byte, |r| &mut r.north_south),
            5 if standard => self.store(byte, |r| &mut r.longitude),
            6 if standard => self.store(byte, |r| &mut r.east_west),
            7 => self.store(byte, |r| &mut r.speed),
            8 => self.store(byte, |r| &mut r.course),
            9 if standard => self.store(byte, |r| &mut r.date),
            _ => {}
        }
    }

    // "$GPGGA,111148,4905.7046,N,00826.0110,E,1,04,5.1,130.6,M,47.9,M,,*41"
    fn route_gga(&mut self, byte: u8) {
        match self.commas {
            1 => self.store(byte, |r| &mut r.time),
            2 => self.store(byte, |r| &mut r.latitude),
            3 => self.store(byte, |r| &mut r.north_south),
            4 => self.store(byte, |r| &mut r.longitude),
            5 => self.store(byte, |r| &mut r.east_west),
            // Fix quality digit: 1 = GPS fix, 2 = DGPS fix.
            6 => self.pending.status.valid = byte == b'1' || byte == b'2',
            7 => self.store(byte, |r| &mut r.satellites),
            8 if self.dialect == Dialect::Standard => self.store(byte, |r| &mut r.hdop),
            9 => self.store(byte, |r| &mut r.altitude),
            _ => {}
        }
    }

    // "$GPVTG,069.4,T,,M,000.0,N,000.0,K*38" — true course and km/h speed.
    // VTG never completes on its own (no terminator case); its fields ride
    // along in the pending record until the next RMC/GGA publishes them.
    fn route_vtg(&mut self, byte: u8) {
        match self.commas {
            1 => self.store(byte, |r| &mut r.course),
            7 => self.store(byte, |r| &mut r.speed),
            _ => {}
        }
    }

    fn store<const N: usize>(
        &mut self,
        byte: u8,
        field: impl FnOnce(&mut GpsRecord) -> &mut crate::types::FixedField<N>,
    ) {
        field(&mut self.pending).put(self.cursor as usize, byte);
        self.cursor = self.cursor.saturating_add(1);
    }
}
