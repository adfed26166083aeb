//! Reassembly of sentences from a byte stream.

use arrayvec::ArrayVec;
use std::mem;

/// Capacity of the line buffer. At most `LINE_CAPACITY - 1` bytes of a
/// sentence are held.
pub const LINE_CAPACITY: usize = 256;

/// A complete line without its terminator.
pub type Line<const N: usize = LINE_CAPACITY> = ArrayVec<u8, N>;

/// Collects bytes into lines terminated by `'\r'` and/or `'\n'`.
///
/// Every call to `feed` is O(1) and never allocates. A line that would not
/// fit is thrown away as a whole, so one overlong sentence cannot affect the
/// ones after it.
#[derive(Debug)]
pub struct LineAssembler<const N: usize = LINE_CAPACITY> {
    buf: ArrayVec<u8, N>,
    overflows: u64,
}

impl<const N: usize> LineAssembler<N> {
    pub fn new() -> Self {
        LineAssembler {
            buf: ArrayVec::new(),
            overflows: 0,
        }
    }

    /// Feed a single byte.
    ///
    /// Returns the accumulated line when `byte` is a terminator and at least
    /// one byte has been collected. Terminators on an empty buffer are
    /// ignored, so `"\r\n"` ends a line only once.
    pub fn feed(&mut self, byte: u8) -> Option<Line<N>> {
        match byte {
            b'\r' | b'\n' if self.buf.is_empty() => None,
            b'\r' | b'\n' => Some(mem::replace(&mut self.buf, ArrayVec::new())),
            _ if self.buf.len() + 1 >= N => {
                self.overflows += 1;
                debug!(
                    "discarding line after {} bytes, longer than the buffer",
                    self.buf.len()
                );
                self.buf.clear();
                None
            }
            _ => {
                self.buf.push(byte);
                None
            }
        }
    }

    /// Number of bytes of the line in progress.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Number of lines discarded because they did not fit.
    #[inline]
    pub fn overflows(&self) -> u64 {
        self.overflows
    }
}

impl<const N: usize> Default for LineAssembler<N> {
    fn default() -> Self {
        Self::new()
    }
}
