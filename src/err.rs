use std::path::PathBuf;
use std::{io, num};

quick_error! {
    /// Failure to read a single sentence field as the expected type.
    ///
    /// Never surfaced past the parser: each call site decides whether a
    /// failed field becomes zero or leaves the record untouched.
    #[derive(Debug, PartialEq)]
    pub enum FieldError {
        Empty {
            display("Field is empty")
        }
        TooShort(len: usize) {
            display("Field has only {} characters", len)
        }
        Int(err: num::ParseIntError) {
            from()
            display("{}", err)
            source(err)
        }
        Float(err: num::ParseFloatError) {
            from()
            display("{}", err)
            source(err)
        }
        Time(err: chrono::format::ParseError) {
            from()
            display("Failed to parse field as time: {}", err)
            source(err)
        }
    }
}

quick_error! {
    #[derive(Debug)]
    pub enum Error {
        TransportNotReady(path: PathBuf, err: io::Error) {
            display("GPS device {} is not ready: {}", path.display(), err)
            source(err)
        }
        Io(err: io::Error) {
            from()
            display("Encountered I/O error while reading the GPS stream: {}", err)
            source(err)
        }
        Config(key: &'static str, reason: String) {
            display("Invalid configuration value for {}: {}", key, reason)
        }
        Worker {
            display("The sentence parsing task panicked")
        }
    }
}
