//! The record of the current GPS fix.
//!
//! Field groups are written independently by GGA and RMC sentences, so the
//! record holds the last known value per group rather than one consistent
//! snapshot. `is_valid` may lag behind `fix_quality` and the other way round.

use arrayvec::ArrayString;
use chrono::NaiveTime;
use std::fmt;

/// Maximum number of characters kept from a raw coordinate field.
pub const COORD_LENGTH: usize = 15;

/// A raw `DDMM.MMMM` / `DDDMM.MMMM` coordinate as received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCoord(ArrayString<COORD_LENGTH>);

impl RawCoord {
    /// Replace the stored text with `text`, truncated to `COORD_LENGTH`
    /// characters.
    pub fn set(&mut self, text: &str) {
        self.0.clear();
        for c in text.chars() {
            if self.0.try_push(c).is_err() {
                break;
            }
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RawCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Indicator of the quality of the fix, as reported by GGA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpsQuality {
    FixNotAvailable,
    GpsFix,
    DifferentialGpsFix,
    PpsFix,
    RealTimeKinematic,
    FloatRtk,
    Estimated,
    ManualInputMode,
    SimulationMode,
    Unknown(u8),
}

impl From<u8> for GpsQuality {
    fn from(int: u8) -> Self {
        match int {
            0 => GpsQuality::FixNotAvailable,
            1 => GpsQuality::GpsFix,
            2 => GpsQuality::DifferentialGpsFix,
            3 => GpsQuality::PpsFix,
            4 => GpsQuality::RealTimeKinematic,
            5 => GpsQuality::FloatRtk,
            6 => GpsQuality::Estimated,
            7 => GpsQuality::ManualInputMode,
            8 => GpsQuality::SimulationMode,
            n => GpsQuality::Unknown(n),
        }
    }
}

impl fmt::Display for GpsQuality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GpsQuality::FixNotAvailable => f.write_str("no fix"),
            GpsQuality::GpsFix => f.write_str("GPS"),
            GpsQuality::DifferentialGpsFix => f.write_str("DGPS"),
            GpsQuality::PpsFix => f.write_str("PPS"),
            GpsQuality::RealTimeKinematic => f.write_str("RTK"),
            GpsQuality::FloatRtk => f.write_str("float RTK"),
            GpsQuality::Estimated => f.write_str("estimated"),
            GpsQuality::ManualInputMode => f.write_str("manual input"),
            GpsQuality::SimulationMode => f.write_str("simulation"),
            GpsQuality::Unknown(n) => write!(f, "type {}", n),
        }
    }
}

/// The current fix. Zero-initialised by `Default`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fix {
    pub(crate) time_utc: Option<NaiveTime>,
    pub(crate) latitude_raw: RawCoord,
    pub(crate) lat_hemisphere: Option<char>,
    pub(crate) longitude_raw: RawCoord,
    pub(crate) lon_hemisphere: Option<char>,
    pub(crate) fix_quality: u8,
    pub(crate) satellites_tracked: u32,
    pub(crate) horizontal_dilution: f64,
    pub(crate) altitude_meters: f64,
    pub(crate) speed_knots: f64,
    pub(crate) course_degrees: f64,
    pub(crate) is_valid: bool,
}

impl Fix {
    pub fn new() -> Self {
        Fix::default()
    }

    /// Universal Time Coordinated of the last GGA sentence with a usable time.
    pub fn time_utc(&self) -> Option<NaiveTime> {
        self.time_utc
    }

    /// The UTC time as `HH:MM:SS`, or an empty string if it was never set.
    pub fn time_text(&self) -> String {
        match self.time_utc {
            Some(t) => t.format("%H:%M:%S").to_string(),
            None => String::new(),
        }
    }

    pub fn latitude_raw(&self) -> &str {
        self.latitude_raw.as_str()
    }

    pub fn lat_hemisphere(&self) -> Option<char> {
        self.lat_hemisphere
    }

    pub fn longitude_raw(&self) -> &str {
        self.longitude_raw.as_str()
    }

    pub fn lon_hemisphere(&self) -> Option<char> {
        self.lon_hemisphere
    }

    pub fn fix_quality(&self) -> u8 {
        self.fix_quality
    }

    pub fn gps_quality(&self) -> GpsQuality {
        GpsQuality::from(self.fix_quality)
    }

    pub fn satellites_tracked(&self) -> u32 {
        self.satellites_tracked
    }

    /// Horizontal dilution of precision. Only meaningful within `(0, 50)`.
    pub fn horizontal_dilution(&self) -> f64 {
        self.horizontal_dilution
    }

    pub fn altitude_meters(&self) -> f64 {
        self.altitude_meters
    }

    pub fn speed_knots(&self) -> f64 {
        self.speed_knots
    }

    pub fn course_degrees(&self) -> f64 {
        self.course_degrees
    }

    /// True only if the most recent RMC sentence reported status `A`.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// A fix is acquired when RMC says valid and GGA reports a fix type.
    pub fn has_fix(&self) -> bool {
        self.is_valid && self.fix_quality > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_coord_truncates() {
        let mut c = RawCoord::default();
        c.set("4807.038");
        assert_eq!(c.as_str(), "4807.038");

        c.set("01131.0000000000000000");
        assert_eq!(c.as_str(), "01131.000000000");
        assert_eq!(c.as_str().len(), COORD_LENGTH);

        c.set("");
        assert!(c.is_empty());
    }

    #[test]
    fn zero_initialised() {
        let fix = Fix::new();
        assert_eq!(fix.time_text(), "");
        assert_eq!(fix.latitude_raw(), "");
        assert_eq!(fix.lat_hemisphere(), None);
        assert_eq!(fix.fix_quality(), 0);
        assert_eq!(fix.gps_quality(), GpsQuality::FixNotAvailable);
        assert_eq!(fix.satellites_tracked(), 0);
        assert_eq!(fix.horizontal_dilution(), 0.0);
        assert!(!fix.is_valid());
        assert!(!fix.has_fix());
    }

    #[test]
    fn quality_names() {
        assert_eq!(GpsQuality::from(2), GpsQuality::DifferentialGpsFix);
        assert_eq!(GpsQuality::from(9), GpsQuality::Unknown(9));
        assert_eq!(GpsQuality::from(4).to_string(), "RTK");
        assert_eq!(GpsQuality::from(12).to_string(), "type 12");
    }
}
