//! Human readable rendering of the current fix.

use std::fmt;

use crate::coord;
use crate::fix::Fix;

/// Number of recognized sentences between two reports by default.
pub const DEFAULT_REPORT_EVERY: u32 = 10;

const KNOTS_TO_KMH: f64 = 1.852;
/// Dilution values outside `(0, MAX_PLAUSIBLE_HDOP)` are sentinels.
const MAX_PLAUSIBLE_HDOP: f64 = 50.0;

/// Qualitative accuracy derived from the horizontal dilution of precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HdopBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl HdopBand {
    /// Returns `None` for values that are not a plausible dilution, which
    /// includes `0.0` for a field that was never set.
    pub fn classify(hdop: f64) -> Option<Self> {
        if !(hdop > 0.0 && hdop < MAX_PLAUSIBLE_HDOP) {
            return None;
        }

        Some(if hdop < 2.0 {
            HdopBand::Excellent
        } else if hdop < 5.0 {
            HdopBand::Good
        } else if hdop < 10.0 {
            HdopBand::Fair
        } else {
            HdopBand::Poor
        })
    }
}

impl fmt::Display for HdopBand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            HdopBand::Excellent => "excellent",
            HdopBand::Good => "good",
            HdopBand::Fair => "fair",
            HdopBand::Poor => "poor",
        })
    }
}

/// Counts recognized sentences and signals every `every`-th one.
#[derive(Debug, Clone)]
pub struct ReportCadence {
    every: u32,
    count: u32,
}

impl Default for ReportCadence {
    fn default() -> Self {
        ReportCadence::new(DEFAULT_REPORT_EVERY)
    }
}

impl ReportCadence {
    /// `every` is clamped to at least one.
    pub fn new(every: u32) -> Self {
        ReportCadence {
            every: every.max(1),
            count: 0,
        }
    }

    /// Count one sentence. Returns true if a report is due.
    pub fn tick(&mut self) -> bool {
        self.count += 1;
        if self.count >= self.every {
            self.count = 0;
            true
        } else {
            false
        }
    }
}

/// Display adapter rendering a fix as a multi-line status report.
pub struct Report<'a>(pub &'a Fix);

impl<'a> fmt::Display for Report<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let fix = self.0;

        writeln!(f, "--- GPS status ---")?;
        if fix.has_fix() {
            writeln!(f, "Status:     fix acquired ({})", fix.gps_quality())?;
        } else {
            writeln!(f, "Status:     no fix (searching for satellites)")?;
        }

        if let Some(t) = fix.time_utc() {
            writeln!(f, "Time (UTC): {}", t.format("%H:%M:%S"))?;
        }
        writeln!(f, "Satellites: {} tracked", fix.satellites_tracked())?;

        let hdop = fix.horizontal_dilution();
        if let Some(band) = HdopBand::classify(hdop) {
            writeln!(f, "Accuracy:   HDOP {:.2} ({})", hdop, band)?;
        }

        if fix.is_valid() && !fix.latitude_raw().is_empty() {
            let lat = coord::signed(
                coord::to_decimal_degrees(fix.latitude_raw(), false),
                fix.lat_hemisphere(),
            );
            let lon = coord::signed(
                coord::to_decimal_degrees(fix.longitude_raw(), true),
                fix.lon_hemisphere(),
            );

            writeln!(
                f,
                "Latitude:   {} {} = {:.6}",
                fix.latitude_raw(),
                fix.lat_hemisphere().unwrap_or('?'),
                lat
            )?;
            writeln!(
                f,
                "Longitude:  {} {} = {:.6}",
                fix.longitude_raw(),
                fix.lon_hemisphere().unwrap_or('?'),
                lon
            )?;
            writeln!(f, "Altitude:   {:.1} m", fix.altitude_meters())?;
            writeln!(
                f,
                "Speed:      {:.2} kn ({:.2} km/h)",
                fix.speed_knots(),
                fix.speed_knots() * KNOTS_TO_KMH
            )?;
            write!(f, "Course:     {:.1} deg", fix.course_degrees())
        } else {
            write!(f, "Position:   waiting for a satellite fix")
        }
    }
}

/// Render `fix` as a status report.
pub fn render(fix: &Fix) -> String {
    Report(fix).to_string()
}
