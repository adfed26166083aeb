//! This module provides the parser that applies *GGA* and *RMC* sentences of
//! the *NMEA 0183* protocol to a [Fix](../fix/struct.Fix.html).

use std::str;

use crate::fix::Fix;
use crate::lexer::{self, Fields, Header, HEADER_LENGTH};

/// GGA fields past this index are not looked at.
const GGA_MAX_FIELDS: usize = 15;
/// RMC fields past this index are not looked at.
const RMC_MAX_FIELDS: usize = 10;

/// Talker ids accepted by default: GPS and combined GNSS.
pub const DEFAULT_TALKERS: [[u8; HEADER_LENGTH]; 2] = [*b"GP", *b"GN"];

/// The kinds of sentences that update the fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceKind {
    /// Global positioning system fix data.
    Gga,
    /// Recommended minimum specific GNSS data.
    Rmc,
}

impl SentenceKind {
    #[inline]
    fn from_type(kind: &[u8]) -> Option<Self> {
        match kind {
            b"GGA" => Some(SentenceKind::Gga),
            b"RMC" => Some(SentenceKind::Rmc),
            _ => None,
        }
    }
}

/// Applies recognized sentences to a fix and silently skips everything else.
#[derive(Debug, Clone)]
pub struct SentenceParser {
    talkers: Vec<[u8; HEADER_LENGTH]>,
}

impl Default for SentenceParser {
    fn default() -> Self {
        SentenceParser::new(DEFAULT_TALKERS.to_vec())
    }
}

impl SentenceParser {
    /// Create a parser that accepts sentences from the given talkers.
    pub fn new(talkers: Vec<[u8; HEADER_LENGTH]>) -> Self {
        SentenceParser { talkers }
    }

    /// Identify the sentence in `line` without touching a fix.
    pub fn classify(&self, line: &str) -> Option<SentenceKind> {
        let header = Header::parse(Fields::new(line).next()?)?;
        if !self.talkers.contains(&header.talker) {
            return None;
        }
        SentenceKind::from_type(&header.kind)
    }

    /// Apply a complete line to `fix`.
    ///
    /// Returns the kind of the sentence if it was recognized. Unrecognized or
    /// non UTF-8 lines leave `fix` untouched. Fields that are missing at the
    /// end of a short sentence are not updated, while malformed numbers are
    /// stored as zero.
    pub fn parse(&self, line: &[u8], fix: &mut Fix) -> Option<SentenceKind> {
        let line = match str::from_utf8(line) {
            Ok(l) => l,
            Err(e) => {
                debug!("skipping line that is not UTF-8: {}", e);
                return None;
            }
        };

        let kind = match self.classify(line) {
            Some(k) => k,
            None => {
                trace!("skipping {:?}", line);
                return None;
            }
        };

        let fields = Fields::new(line);
        match kind {
            SentenceKind::Gga => Self::apply_gga(fields, fix),
            SentenceKind::Rmc => Self::apply_rmc(fields, fix),
        }
        trace!("applied {:?}: {:?}", kind, line);

        Some(kind)
    }

    /// Apply the fields of a GGA sentence. Index 0 is the header.
    fn apply_gga(fields: Fields, fix: &mut Fix) {
        for (index, field) in fields.enumerate().take(GGA_MAX_FIELDS) {
            match index {
                1 => {
                    // A time that cannot be read keeps the previous one
                    if let Ok(t) = lexer::utc_time(field) {
                        fix.time_utc = Some(t);
                    }
                }
                2 => fix.latitude_raw.set(field),
                3 => fix.lat_hemisphere = lexer::first_char(field),
                4 => fix.longitude_raw.set(field),
                5 => fix.lon_hemisphere = lexer::first_char(field),
                6 => fix.fix_quality = lexer::int(field).unwrap_or(0),
                7 => fix.satellites_tracked = lexer::int(field).unwrap_or(0),
                8 => fix.horizontal_dilution = lexer::float(field).unwrap_or(0.0),
                9 => fix.altitude_meters = lexer::float(field).unwrap_or(0.0),
                _ => (),
            }
        }
    }

    /// Apply the fields of an RMC sentence. Index 0 is the header.
    fn apply_rmc(fields: Fields, fix: &mut Fix) {
        for (index, field) in fields.enumerate().take(RMC_MAX_FIELDS) {
            match index {
                2 => fix.is_valid = lexer::first_char(field) == Some('A'),
                7 => fix.speed_knots = lexer::float(field).unwrap_or(0.0),
                8 => fix.course_degrees = lexer::float(field).unwrap_or(0.0),
                _ => (),
            }
        }
    }
}
