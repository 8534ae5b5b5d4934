//! Record finalizer: publishes the pending record into the stable one.
//!
//! Invoked by the host once per completed sentence, never by the decoder
//! itself — the caller controls the timing, e.g. to keep the copy out of
//! an interrupt path. The stable record belongs to the consumer between
//! publishes; publishing twice without an intervening read simply
//! overwrites, no merge and no error.

use crate::conversion::leading_digits;
use crate::types::{Dialect, GpsRecord};

/// Speed readings further than this from the previous stable value (in
/// whole speed units) are treated as single-sample GPS noise and dropped.
const SPEED_SPIKE_LIMIT: u32 = 50;

/// Copy the pending record into the stable record, normalize its fields
/// for display, and clear the pending record for the next sentence.
pub fn publish(pending: &mut GpsRecord, stable: &mut GpsRecord, dialect: Dialect) {
    // The previous stable speed feeds the noise filter below.
    let previous_speed = stable.speed;

    stable.status.clear();

    stable.time = pending.time;
    stable.date = pending.date;
    stable.latitude = pending.latitude;
    stable.north_south = pending.north_south;
    stable.longitude = pending.longitude;
    stable.east_west = pending.east_west;
    stable.altitude = pending.altitude;
    stable.speed = pending.speed;
    stable.course = pending.course;
    stable.hdop = pending.hdop;
    stable.satellites = pending.satellites;

    // Leading zeros in the degree fields are blanked in place, so every
    // later positional access (display columns, locator slices) still
    // finds minutes and fractions where it expects them.
    if stable.latitude.byte_at(0) == Some(b'0') {
        stable.latitude.put(0, b' ');
    }
    if stable.longitude.byte_at(0) == Some(b'0') {
        stable.longitude.put(0, b' ');
        if stable.longitude.byte_at(1) == Some(b'0') {
            stable.longitude.put(1, b' ');
        }
    }

    // The LCD build shows exactly HHMMSS; newer modules append ".SSS".
    if dialect == Dialect::Standard {
        if let Some(dot) = stable.time.as_str().find('.') {
            stable.time.truncate(dot);
        }
    }

    // Single-sample speed spikes are replaced by the previous stable
    // reading; course is undefined at zero speed, so it is pinned to "0".
    let new_speed = leading_digits(stable.speed.as_str());
    let old_speed = leading_digits(previous_speed.as_str());
    let filtered = if new_speed.abs_diff(old_speed) > SPEED_SPIKE_LIMIT {
        stable.speed = previous_speed;
        old_speed
    } else {
        new_speed
    };
    if filtered == 0 {
        stable.course.set("0");
    }

    stable.status.valid = pending.is_valid();
    stable.status.complete = true;

    pending.reset();
}
