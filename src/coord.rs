//! Conversion of raw NMEA coordinates to decimal degrees.

use std::str::FromStr;

/// Shortest raw coordinate that is converted at all.
const MIN_COORD_LENGTH: usize = 4;

/// Convert a raw `DDMM.MMMM` (latitude) or `DDDMM.MMMM` (longitude)
/// coordinate to unsigned decimal degrees.
///
/// Both axes use the same split: the whole hundreds are the degrees and the
/// remainder are the minutes. Text shorter than four characters or text that
/// is not a number yields `0.0`. The hemisphere is not applied here, see
/// [`signed`](fn.signed.html).
pub fn to_decimal_degrees(raw: &str, is_longitude: bool) -> f64 {
    if raw.len() < MIN_COORD_LENGTH {
        return 0.0;
    }

    let value = match f64::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            trace!(
                "{} {:?} is not a number: {}",
                if is_longitude { "longitude" } else { "latitude" },
                raw,
                e
            );
            return 0.0;
        }
    };

    let degrees = (value / 100.0).trunc();
    let minutes = value - degrees * 100.0;
    degrees + minutes / 60.0
}

/// Apply the hemisphere to unsigned decimal degrees: `S` and `W` are
/// negative, everything else is left as is.
#[inline]
pub fn signed(degrees: f64, hemisphere: Option<char>) -> f64 {
    match hemisphere {
        Some('S') | Some('W') => -degrees,
        _ => degrees,
    }
}
