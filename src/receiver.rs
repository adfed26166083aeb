//! The receive path as a single callback: bytes in, fix updated in place.

use crate::assembler::{LineAssembler, LINE_CAPACITY};
use crate::config::Config;
use crate::err::Error;
use crate::fix::Fix;
use crate::parser::SentenceParser;
use crate::report::ReportCadence;
use crate::source::ByteSource;

/// Assembles, parses and applies sentences in the context that delivers the
/// bytes. It is the only writer of its fix.
#[derive(Debug)]
pub struct Receiver<const N: usize = LINE_CAPACITY> {
    assembler: LineAssembler<N>,
    parser: SentenceParser,
    cadence: ReportCadence,
    fix: Fix,
}

impl Default for Receiver {
    fn default() -> Self {
        Receiver::new(SentenceParser::default(), ReportCadence::default())
    }
}

impl<const N: usize> Receiver<N> {
    pub fn new(parser: SentenceParser, cadence: ReportCadence) -> Self {
        Receiver {
            assembler: LineAssembler::new(),
            parser,
            cadence,
            fix: Fix::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            SentenceParser::new(config.talkers.clone()),
            ReportCadence::new(config.report_every),
        )
    }

    /// Feed a single byte. Returns true if a report of the fix is due.
    pub fn feed(&mut self, byte: u8) -> bool {
        match self.assembler.feed(byte) {
            Some(line) => match self.parser.parse(&line, &mut self.fix) {
                Some(_) => self.cadence.tick(),
                None => false,
            },
            None => false,
        }
    }

    /// Handle one "data ready" event of `source`: drain every available byte
    /// and call `on_report` whenever a report is due.
    ///
    /// Returns `Ok(false)` once the source has ended.
    pub fn service<S, F>(&mut self, source: &mut S, mut on_report: F) -> Result<bool, Error>
    where
        S: ByteSource,
        F: FnMut(&Fix),
    {
        if !source.data_ready()? {
            return Ok(false);
        }
        while let Some(byte) = source.read_byte() {
            if self.feed(byte) {
                on_report(&self.fix);
            }
        }
        Ok(true)
    }

    /// The current fix.
    #[inline]
    pub fn fix(&self) -> &Fix {
        &self.fix
    }

    #[inline]
    pub fn assembler(&self) -> &LineAssembler<N> {
        &self.assembler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ReadSource;
    use std::io::Cursor;

    #[test]
    fn feed_reports_every_tenth_sentence() {
        let mut rx: Receiver = Receiver::default();
        let mut reports = 0;
        for i in 0..25 {
            let line = if i % 2 == 0 {
                "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,,,,*\r\n"
            } else {
                "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A\r\n"
            };
            for b in line.bytes() {
                if rx.feed(b) {
                    reports += 1;
                }
            }
        }
        assert_eq!(reports, 2);
    }

    #[test]
    fn unrecognized_sentences_do_not_count() {
        let mut rx: Receiver = Receiver::default();
        let input = "$GPGSV,3,1,11*74\r\n".repeat(20);
        assert!(!input.bytes().any(|b| rx.feed(b)));
    }

    #[test]
    fn service_drains_source() {
        let config = Config {
            report_every: 2,
            ..Config::default()
        };
        let mut rx: Receiver = Receiver::from_config(&config);
        let input = "$GNGGA,010203,,,,,0,03,,,M,,,,*\n$GNRMC,010203,V,,,,,,,,,,*\n".repeat(3);
        let mut source = ReadSource::new(Cursor::new(input.into_bytes()));

        let mut satellites = Vec::new();
        while rx
            .service(&mut source, |fix| satellites.push(fix.satellites_tracked()))
            .unwrap()
        {}

        assert_eq!(satellites, vec![3, 3, 3]);
        assert_eq!(rx.fix().time_text(), "01:02:03");
        assert!(!rx.fix().is_valid());
        assert!(rx.assembler().is_empty());
    }
}
