//! Splitting of a sentence into its comma separated fields and typed readers
//! for single fields.

use chrono::NaiveTime;
use std::num;
use std::str::{self, FromStr};

use crate::err::FieldError;

pub const HEADER_LENGTH: usize = 2;
pub const TYPE_LENGTH: usize = 3;
const TIME_LENGTH: usize = 6;

/// Talker id and sentence type taken from the first field, e.g. `$GPGGA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub talker: [u8; HEADER_LENGTH],
    pub kind: [u8; TYPE_LENGTH],
}

impl Header {
    /// Returns `None` unless `field` is a `'$'` followed by exactly five
    /// characters.
    pub fn parse(field: &str) -> Option<Self> {
        let bytes = field.as_bytes();
        if bytes.len() != 1 + HEADER_LENGTH + TYPE_LENGTH || bytes[0] != b'$' {
            return None;
        }

        let mut talker = [0u8; HEADER_LENGTH];
        talker.copy_from_slice(&bytes[1..1 + HEADER_LENGTH]);
        let mut kind = [0u8; TYPE_LENGTH];
        kind.copy_from_slice(&bytes[1 + HEADER_LENGTH..]);

        Some(Header { talker, kind })
    }
}

/// Iterator over the fields of a sentence.
///
/// Consecutive commas yield empty fields, so a field index always matches
/// its position in the sentence. A trailing `*hh` checksum is cut off the
/// last field and not verified.
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    inner: str::Split<'a, char>,
}

impl<'a> Fields<'a> {
    pub fn new(line: &'a str) -> Self {
        let body = match line.rfind('*') {
            Some(star) => &line[..star],
            None => line,
        };

        Fields {
            inner: body.split(','),
        }
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// Read a field as an integer.
#[inline]
pub fn int<T>(field: &str) -> Result<T, FieldError>
where
    T: FromStr<Err = num::ParseIntError>,
{
    if field.is_empty() {
        return Err(FieldError::Empty);
    }
    Ok(T::from_str(field)?)
}

/// Read a field as a float.
#[inline]
pub fn float(field: &str) -> Result<f64, FieldError> {
    if field.is_empty() {
        return Err(FieldError::Empty);
    }
    Ok(f64::from_str(field)?)
}

#[inline]
pub fn first_char(field: &str) -> Option<char> {
    field.chars().next()
}

/// Read the leading `hhmmss` of a time field. Fractional seconds after the
/// sixth character are ignored.
pub fn utc_time(field: &str) -> Result<NaiveTime, FieldError> {
    let hhmmss = field
        .get(..TIME_LENGTH)
        .ok_or(FieldError::TooShort(field.len()))?;
    Ok(NaiveTime::parse_from_str(hhmmss, "%H%M%S")?)
}
