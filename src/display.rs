//! 2x16 character display formatter.
//!
//! Maps the stable record onto the six fixed screen templates of the
//! device. Column offsets are byte-compatible with the legacy display:
//! fields are spliced into the template character-by-character at the
//! positions the original hardware used, and the derived values (grid
//! locator, arc-seconds) are computed on demand.

use crate::conversion::fraction_to_seconds;
use crate::types::{DisplayMode, GpsRecord};

pub const LCD_COLUMNS: usize = 16;

//                                     0123456789012345
const TIME_LOCATOR: (&str, &str) = ("   xx:xx:xxUT   ", "     JN49FD     ");
const DATE_TIME: (&str, &str) = ("DATE:   .  .    ", "TIME:   :  :  UT");
const LAT_LON: (&str, &str) = ("LAT:    \u{00b0}  '    ", "LON:    \u{00b0}  '    ");
const LOCATOR_ALTITUDE: (&str, &str) = ("LOCATOR:        ", "HEIGHT:        m");
const SPEED_ROUTE: (&str, &str) = ("SPEED:    0 km/h", "ROUTE:       0 \u{00b0}");
const DOP: (&str, &str) = ("HDOP:           ", "SATS:           ");

/// Render the record as two 16-character display lines.
pub fn render(record: &GpsRecord, mode: DisplayMode) -> [String; 2] {
    let template = match mode {
        DisplayMode::TimeLocator => TIME_LOCATOR,
        DisplayMode::DateTime => DATE_TIME,
        DisplayMode::LatLon => LAT_LON,
        DisplayMode::LocatorAltitude => LOCATOR_ALTITUDE,
        DisplayMode::SpeedRoute => SPEED_ROUTE,
        DisplayMode::Dop => DOP,
    };

    let mut line1: Vec<char> = template.0.chars().collect();
    let mut line2: Vec<char> = template.1.chars().collect();

    match mode {
        DisplayMode::TimeLocator => {
            splice_spread(&mut line1, record.time.as_str(), &[3, 4, 6, 7, 9, 10]);
            splice(&mut line2, 5, &record.locator());
        }
        DisplayMode::DateTime => {
            splice_spread(&mut line1, record.date.as_str(), &[6, 7, 9, 10, 12, 13]);
            splice_spread(&mut line2, record.time.as_str(), &[6, 7, 9, 10, 12, 13]);
        }
        DisplayMode::LatLon => {
            let latitude = record.latitude.as_str();
            splice_spread(&mut line1, latitude, &[6, 7, 9, 10]);
            let seconds = fraction_to_seconds(slice(latitude, 5, 9));
            splice(&mut line1, 12, &format!("{:02}", seconds));
            line1[14] = '"';
            splice(&mut line1, 15, record.north_south.as_str());

            let longitude = record.longitude.as_str();
            splice_spread(&mut line2, longitude, &[5, 6, 7, 9, 10]);
            let seconds = fraction_to_seconds(slice(longitude, 6, 10));
            splice(&mut line2, 12, &format!("{:02}", seconds));
            line2[14] = '"';
            splice(&mut line2, 15, record.east_west.as_str());
        }
        DisplayMode::LocatorAltitude => {
            splice(&mut line1, 9, &record.locator());
            let altitude = record.altitude.as_str();
            splice(&mut line2, 14 - altitude.len().min(7), altitude);
        }
        DisplayMode::SpeedRoute => {
            splice_right(&mut line1, 10, record.speed.as_str());
            splice_right(&mut line2, 13, record.course.as_str());
        }
        DisplayMode::Dop => {
            // A one-digit HDOP integer part puts the decimal point at
            // index 1; larger values shift left one column.
            let start = if record.hdop.byte_at(1) == Some(b'.') {
                13
            } else {
                12
            };
            splice(&mut line1, start, record.hdop.as_str());
            splice(&mut line2, 14, record.satellites.as_str());
        }
    }

    [line1.into_iter().collect(), line2.into_iter().collect()]
}

/// Write `text` into consecutive columns starting at `start`, clipped at
/// the line end.
fn splice(line: &mut [char], start: usize, text: &str) {
    for (i, c) in text.chars().enumerate() {
        if let Some(slot) = line.get_mut(start + i) {
            *slot = c;
        }
    }
}

/// Write the leading characters of `text` into the given columns, one
/// each, skipping columns for which the field has no character. Used for
/// templates with punctuation between the digit groups.
fn splice_spread(line: &mut [char], text: &str, columns: &[usize]) {
    for (c, &col) in text.chars().zip(columns) {
        line[col] = c;
    }
}

/// Right-align up to three leading characters of `text` so the last one
/// lands in column `end`. Fields wider than three characters show their
/// integer part only.
fn splice_right(line: &mut [char], end: usize, text: &str) {
    if text.is_empty() {
        return;
    }
    let width = text.len().min(3);
    splice(line, end + 1 - width, &text[..width]);
}

fn slice(s: &str, start: usize, end: usize) -> &str {
    s.get(start..end.min(s.len())).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Dialect, DisplayMode};

    fn published(sentence: &str) -> GpsRecord {
        let mut decoder = crate::parser::NmeaDecoder::new(Dialect::Standard);
        let mut stable = GpsRecord::new();
        for &b in sentence.as_bytes() {
            if decoder.feed(b) {
                crate::parser::publish(decoder.pending_mut(), &mut stable, Dialect::Standard);
            }
        }
        stable
    }

    /// A published GGA fix: position, altitude, HDOP, satellites.
    fn gga_record() -> GpsRecord {
        published("$GPGGA,111148,4905.7046,N,00826.0110,E,1,04,5.1,130.6,M,47.9,M,,*41\n")
    }

    /// A published RMC fix: time, date, position, speed, course.
    fn rmc_record() -> GpsRecord {
        published("$GPRMC,111148,A,4905.7046,N,00826.0110,E,000.0,069.4,070709,000.1,E*78\n")
    }

    #[test]
    fn lines_are_always_sixteen_columns() {
        let record = gga_record();
        for mode in [
            DisplayMode::TimeLocator,
            DisplayMode::DateTime,
            DisplayMode::LatLon,
            DisplayMode::LocatorAltitude,
            DisplayMode::SpeedRoute,
            DisplayMode::Dop,
        ] {
            let [line1, line2] = render(&record, mode);
            assert_eq!(line1.chars().count(), LCD_COLUMNS, "{:?}", mode);
            assert_eq!(line2.chars().count(), LCD_COLUMNS, "{:?}", mode);
        }
    }

    #[test]
    fn date_time_screen() {
        let [line1, line2] = render(&rmc_record(), DisplayMode::DateTime);
        assert_eq!(line1, "DATE: 07.07.09  ");
        assert_eq!(line2, "TIME: 11:11:48UT");
    }

    #[test]
    fn time_locator_screen() {
        let [line1, line2] = render(&gga_record(), DisplayMode::TimeLocator);
        assert_eq!(line1, "   11:11:48UT   ");
        assert_eq!(line2, "     JN49FC     ");
    }

    #[test]
    fn lat_lon_screen() {
        let [line1, line2] = render(&gga_record(), DisplayMode::LatLon);
        assert_eq!(line1, "LAT:  49\u{00b0}05'42\"N");
        assert_eq!(line2, "LON:   8\u{00b0}26'00\"E");
    }

    #[test]
    fn locator_altitude_screen() {
        let [line1, line2] = render(&gga_record(), DisplayMode::LocatorAltitude);
        assert_eq!(line1, "LOCATOR: JN49FC ");
        assert_eq!(line2, "HEIGHT:  130.6 m");
    }

    #[test]
    fn speed_route_screen_zero_speed() {
        // Speed 000.0 pins the course to "0" at publish time.
        let [line1, line2] = render(&rmc_record(), DisplayMode::SpeedRoute);
        assert_eq!(line1, "SPEED:  000 km/h");
        assert_eq!(line2, "ROUTE:       0 \u{00b0}");
    }

    #[test]
    fn speed_route_right_alignment() {
        let mut record = rmc_record();
        record.speed.set("7");
        record.course.set("69");
        let [line1, line2] = render(&record, DisplayMode::SpeedRoute);
        assert_eq!(line1, "SPEED:    7 km/h");
        assert_eq!(line2, "ROUTE:      69 \u{00b0}");
    }

    #[test]
    fn dop_screen() {
        let [line1, line2] = render(&gga_record(), DisplayMode::Dop);
        assert_eq!(line1, "HDOP:        5.1");
        assert_eq!(line2, "SATS:         04");
    }

    #[test]
    fn blank_record_keeps_template_placeholders() {
        let record = GpsRecord::new();
        let [line1, _] = render(&record, DisplayMode::DateTime);
        assert_eq!(line1, "DATE:   .  .    ");
        let [line1, line2] = render(&record, DisplayMode::LatLon);
        assert_eq!(line1, "LAT:    \u{00b0}  '00\"N");
        assert_eq!(line2, "LON:    \u{00b0}  '00\"E");
    }
}
