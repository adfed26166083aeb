//! Receiver for the *GGA* and *RMC* sentences of the *NMEA 0183* protocol
//! that keeps the current GPS fix.
//!
//! Bytes are fed one at a time into a [`Receiver`](receiver/struct.Receiver.html),
//! which reassembles sentences, applies them to a [`Fix`](fix/struct.Fix.html)
//! and signals when a [`Report`](report/struct.Report.html) is due.

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
#[macro_use]
extern crate log;
#[macro_use]
extern crate quick_error;

pub mod assembler;
pub mod config;
pub mod coord;
pub mod err;
pub mod fix;
mod lexer;
pub mod parser;
pub mod receiver;
pub mod report;
pub mod source;
pub mod task;

pub use assembler::{LineAssembler, LINE_CAPACITY};
pub use config::Config;
pub use coord::to_decimal_degrees;
pub use err::{Error, FieldError};
pub use fix::Fix;
pub use parser::{SentenceKind, SentenceParser};
pub use receiver::Receiver;
pub use report::{render, Report};
