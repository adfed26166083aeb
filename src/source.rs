//! Sources of raw NMEA bytes.

use arrayvec::ArrayVec;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::err::Error;

/// Size of the receive FIFO of a `ReadSource`.
const FIFO_LENGTH: usize = 64;

/// A stream of bytes delivered in bursts, like a UART receive FIFO.
pub trait ByteSource {
    /// Wait until bytes are available. Returns `Ok(false)` once the stream
    /// has ended.
    fn data_ready(&mut self) -> Result<bool, Error>;

    /// Take one byte of the current burst. Returns `None` when the burst is
    /// drained.
    fn read_byte(&mut self) -> Option<u8>;
}

/// A `ByteSource` over any reader.
pub struct ReadSource<R> {
    input: R,
    fifo: ArrayVec<u8, FIFO_LENGTH>,
    pos: usize,
}

impl<R: Read> ReadSource<R> {
    pub fn new(input: R) -> Self {
        ReadSource {
            input,
            fifo: ArrayVec::new(),
            pos: 0,
        }
    }
}

impl<R: Read> ByteSource for ReadSource<R> {
    fn data_ready(&mut self) -> Result<bool, Error> {
        if self.pos < self.fifo.len() {
            return Ok(true);
        }

        let mut chunk = [0u8; FIFO_LENGTH];
        let n = loop {
            match self.input.read(&mut chunk) {
                Ok(n) => break n,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        };

        self.fifo.clear();
        self.fifo.extend(chunk[..n].iter().cloned());
        self.pos = 0;
        Ok(n > 0)
    }

    fn read_byte(&mut self) -> Option<u8> {
        let b = *self.fifo.get(self.pos)?;
        self.pos += 1;
        Some(b)
    }
}

/// Open the GPS device at `device`, or stdin if it is `None`.
///
/// A device that cannot be opened is not ready and there is nothing to
/// receive from, so this is fatal.
pub fn open(device: Option<&Path>) -> Result<ReadSource<Box<dyn Read + Send>>, Error> {
    let input: Box<dyn Read + Send> = match device {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| Error::TransportNotReady(path.to_path_buf(), e))?;
            Box::new(file)
        }
        None => Box::new(io::stdin()),
    };
    Ok(ReadSource::new(input))
}
