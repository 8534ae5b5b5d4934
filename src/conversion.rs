//! Derived-value calculators for the GPS record.
//!
//! Everything here works on the fixed-width ASCII fields directly and uses
//! integer arithmetic only. The meters-to-feet conversion reproduces the
//! legacy shift-and-add approximation bit for bit: the instrument has no
//! ground truth beyond matching the values the old hardware displayed.

/// Value of the leading decimal digits of `s`, ignoring leading blanks.
///
/// Blanks occur because the finalizer replaces leading zeros in the degree
/// fields; anything after the first non-digit is ignored.
pub(crate) fn leading_digits(s: &str) -> u32 {
    s.trim_start()
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .fold(0u32, |acc, b| acc * 10 + (b - b'0') as u32)
}

/// A fractional-minute field as ten-thousandths of a minute.
///
/// Fields shorter than four digits (truncated sentences) are scaled up so
/// `"7"` still means 0.7 minutes rather than 0.0007.
pub(crate) fn minute_fraction(s: &str) -> u32 {
    let digits: Vec<u8> = s
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .take(4)
        .collect();
    let value = digits
        .iter()
        .fold(0u32, |acc, b| acc * 10 + (b - b'0') as u32);
    value * 10u32.pow(4 - digits.len() as u32)
}

/// Arc-seconds for display, from a fractional-minute field.
pub(crate) fn fraction_to_seconds(s: &str) -> u32 {
    minute_fraction(s) * 6 / 1000
}

/// Byte-range slice of a field, empty when the field is too short.
fn field_slice(s: &str, start: usize, end: usize) -> &str {
    s.get(start..end.min(s.len())).unwrap_or("")
}

/// Convert an altitude string in meters (`MMM.MMM`) to whole feet as a
/// fixed six-digit string with leading zeros.
///
/// Only the digits left of the decimal point contribute; the fractional
/// part merely locates the point. The conversion factor is the legacy
/// shift-and-add cascade, which compounds to about 3.2790 (true factor
/// 3.28084):
///
/// ```text
/// x *= 3;          // 3.0
/// x += x >> 4;     // 3.1875
/// x += x >> 6;     // 3.2373
/// x += x >> 7;     // 3.2626
/// x += x >> 8;     // 3.2758
/// x += x >> 10;    // 3.2790
/// ```
///
/// The output carries no decimal point — whole feet, truncated, exactly
/// as the legacy device rendered it. Results beyond six digits saturate
/// at 999999 to keep the fixed width.
pub fn altitude_to_feet(meters: &str) -> String {
    let int_part = match meters.find('.') {
        Some(dot) => &meters[..dot],
        None => meters,
    };

    let mut value = 0u64;
    let mut place = 1u64;
    for b in int_part.bytes().rev() {
        if !b.is_ascii_digit() {
            break;
        }
        value += (b - b'0') as u64 * place;
        place *= 10;
    }

    value *= 3;
    value += value >> 4;
    value += value >> 6;
    value += value >> 7;
    value += value >> 8;
    value += value >> 10;

    format!("{:06}", value.min(999_999))
}

/// Compute the 6-character Maidenhead grid locator from the latitude and
/// longitude fields (`DDMM.MMMM` / `DDDMM.MMMM`) and their hemispheres.
///
/// Integer arithmetic throughout: 20°/10° fields, 2°/1° squares and
/// 5'/2.5' subsquares, the latitude subsquare rounded by a half-minute
/// carry from the fractional-minute field. Blank or garbage input yields
/// a deterministic but meaningless locator — callers are expected to
/// check the record's validity flag first.
pub fn grid_locator(latitude: &str, north_south: char, longitude: &str, east_west: char) -> String {
    let mut locator = [b' '; 6];

    // Longitude degrees, counted eastward from 180W.
    let lon_deg = leading_digits(field_slice(longitude, 0, 3)) as i32;
    let degrees = if east_west == 'W' {
        180 - lon_deg
    } else {
        180 + lon_deg
    }
    .clamp(0, 359) as u32;

    locator[0] = b'A' + (degrees / 20) as u8;
    locator[2] = b'0' + ((degrees % 20) / 2) as u8;

    let lon_min = leading_digits(field_slice(longitude, 3, 5));
    let subsquare = (((degrees % 2) * 60 + lon_min) / 5).min(23);
    locator[4] = b'A' + subsquare as u8;

    // Latitude degrees, counted northward from 90S.
    let lat_deg = leading_digits(field_slice(latitude, 0, 2)) as i32;
    let degrees = if north_south == 'S' {
        90 - lat_deg
    } else {
        90 + lat_deg
    }
    .clamp(0, 179) as u32;

    locator[1] = b'A' + (degrees / 10) as u8;
    locator[3] = b'0' + (degrees % 10) as u8;

    let lat_min = leading_digits(field_slice(latitude, 2, 4));
    let carry = u32::from(minute_fraction(field_slice(latitude, 5, 9)) >= 5000);
    let subsquare = ((lat_min * 2 + carry) / 5).min(23);
    locator[5] = b'A' + subsquare as u8;

    // All six bytes are ASCII by construction.
    String::from_utf8_lossy(&locator).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feet_reproduces_shift_cascade() {
        // 130 m: 390, 414, 420, 423, 424, 424 — not round(130 * 3.28084) = 427.
        assert_eq!(altitude_to_feet("130.6"), "000424");
    }

    #[test]
    fn feet_fraction_does_not_contribute() {
        assert_eq!(altitude_to_feet("130.6"), altitude_to_feet("130.999"));
        assert_eq!(altitude_to_feet("130"), altitude_to_feet("130.0"));
    }

    #[test]
    fn feet_of_zero_and_blank() {
        assert_eq!(altitude_to_feet("0.0"), "000000");
        assert_eq!(altitude_to_feet("00."), "000000");
        assert_eq!(altitude_to_feet(""), "000000");
    }

    #[test]
    fn feet_of_small_value() {
        // 47 m: 141, 149, 151, 152, 152, 152.
        assert_eq!(altitude_to_feet("47.9"), "000152");
    }

    #[test]
    fn feet_saturate_at_six_digits() {
        assert_eq!(altitude_to_feet("9999999."), "999999");
    }

    #[test]
    fn locator_reference_position() {
        // The GGA example position from the receiver documentation.
        assert_eq!(grid_locator("4905.7046", 'N', "00826.0110", 'E'), "JN49FC");
    }

    #[test]
    fn locator_south_west_hemispheres() {
        assert_eq!(grid_locator("3348.0000", 'S', "07000.0000", 'W'), "FF57AT");
    }

    #[test]
    fn locator_half_minute_carry() {
        // .5000 minutes rounds the latitude subsquare up.
        let below = grid_locator("4902.4999", 'N', "00826.0110", 'E');
        let above = grid_locator("4902.5000", 'N', "00826.0110", 'E');
        assert_eq!(below.as_bytes()[5] + 1, above.as_bytes()[5]);
    }

    #[test]
    fn locator_with_blanked_degrees() {
        // The finalizer blanks leading zeros in place; positions survive.
        assert_eq!(
            grid_locator(" 905.7046", 'N', "  826.0110", 'E'),
            grid_locator("0905.7046", 'N', "00826.0110", 'E')
        );
    }

    #[test]
    fn locator_before_first_fix_is_deterministic() {
        assert_eq!(grid_locator("", 'N', "", 'E'), "JJ00AA");
    }

    #[test]
    fn seconds_from_minute_fraction() {
        assert_eq!(fraction_to_seconds("7046"), 42);
        assert_eq!(fraction_to_seconds("0110"), 0);
        assert_eq!(fraction_to_seconds(""), 0);
    }
}
