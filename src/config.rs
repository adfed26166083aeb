//! Runtime configuration, read from `GPSFIX_*` environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::err::Error;
use crate::lexer::HEADER_LENGTH;
use crate::parser::DEFAULT_TALKERS;
use crate::report::DEFAULT_REPORT_EVERY;

const DEFAULT_QUEUE_DEPTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Line settings of the serial port the receiver is attached to. The port
/// itself is configured outside of this crate; these are only reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerialSettings {
    pub baud_rate: u32,
    pub data_bits: u8,
    pub parity: Parity,
    pub stop_bits: u8,
}

impl Default for SerialSettings {
    fn default() -> Self {
        SerialSettings {
            baud_rate: 9600,
            data_bits: 8,
            parity: Parity::None,
            stop_bits: 1,
        }
    }
}

impl std::fmt::Display for SerialSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let parity = match self.parity {
            Parity::None => 'N',
            Parity::Even => 'E',
            Parity::Odd => 'O',
        };
        write!(
            f,
            "{} {}{}{}",
            self.baud_rate, self.data_bits, parity, self.stop_bits
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Device to read NMEA data from. `None` reads from stdin.
    pub device: Option<PathBuf>,
    pub serial: SerialSettings,
    /// Talker ids whose GGA and RMC sentences are used.
    pub talkers: Vec<[u8; HEADER_LENGTH]>,
    /// Recognized sentences between two reports.
    pub report_every: u32,
    /// Lines that may wait for the parsing thread before new ones are dropped.
    pub queue_depth: usize,
    /// Parse on a dedicated thread instead of in the reading loop.
    pub parse_thread: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            device: None,
            serial: SerialSettings::default(),
            talkers: DEFAULT_TALKERS.to_vec(),
            report_every: DEFAULT_REPORT_EVERY,
            queue_depth: DEFAULT_QUEUE_DEPTH,
            parse_thread: false,
        }
    }
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through `lookup`. Unset keys keep their
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(device) = lookup("GPSFIX_DEVICE") {
            if !device.is_empty() && device != "-" {
                config.device = Some(PathBuf::from(device));
            }
        }
        if let Some(baud) = lookup("GPSFIX_BAUD") {
            config.serial.baud_rate = number("GPSFIX_BAUD", &baud)?;
        }
        if let Some(talkers) = lookup("GPSFIX_TALKERS") {
            config.talkers = parse_talkers(&talkers)?;
        }
        if let Some(every) = lookup("GPSFIX_REPORT_EVERY") {
            config.report_every = number("GPSFIX_REPORT_EVERY", &every)?;
            if config.report_every == 0 {
                return Err(Error::Config("GPSFIX_REPORT_EVERY", "must be at least 1".into()));
            }
        }
        if let Some(depth) = lookup("GPSFIX_QUEUE_DEPTH") {
            config.queue_depth = number("GPSFIX_QUEUE_DEPTH", &depth)?;
            if config.queue_depth == 0 {
                return Err(Error::Config("GPSFIX_QUEUE_DEPTH", "must be at least 1".into()));
            }
        }
        if let Some(flag) = lookup("GPSFIX_PARSE_THREAD") {
            config.parse_thread = match flag.trim() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                other => {
                    return Err(Error::Config(
                        "GPSFIX_PARSE_THREAD",
                        format!("expected a boolean, found {:?}", other),
                    ))
                }
            };
        }

        Ok(config)
    }
}

fn number<T>(key: &'static str, value: &str) -> Result<T, Error>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| Error::Config(key, format!("{:?}: {}", value, e)))
}

fn parse_talkers(value: &str) -> Result<Vec<[u8; HEADER_LENGTH]>, Error> {
    let mut talkers = Vec::new();
    for id in value.split(',').map(str::trim).filter(|id| !id.is_empty()) {
        let bytes = id.as_bytes();
        if bytes.len() != HEADER_LENGTH || !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(Error::Config(
                "GPSFIX_TALKERS",
                format!("{:?} is not a two letter talker id", id),
            ));
        }
        talkers.push([bytes[0], bytes[1]]);
    }

    if talkers.is_empty() {
        return Err(Error::Config("GPSFIX_TALKERS", "no talker ids given".into()));
    }
    Ok(talkers)
}
