//! Parsing on a dedicated thread.
//!
//! The reading side only assembles lines and offers them to a bounded queue,
//! it never blocks on the parser. The parsing thread is the single writer of
//! a [`SharedFix`](struct.SharedFix.html); readers take whole snapshots
//! under the same lock.

use std::sync::mpsc::{self, SyncSender, TrySendError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

use crate::assembler::{Line, LineAssembler};
use crate::config::Config;
use crate::err::Error;
use crate::fix::Fix;
use crate::parser::SentenceParser;
use crate::report::ReportCadence;
use crate::source::ByteSource;

/// A fix shared between the parsing thread and its readers.
#[derive(Debug, Clone, Default)]
pub struct SharedFix(Arc<Mutex<Fix>>);

impl SharedFix {
    pub fn new() -> Self {
        SharedFix::default()
    }

    // A panic on the parsing thread cannot leave a half written field.
    fn lock(&self) -> MutexGuard<Fix> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// A copy of the current fix.
    pub fn snapshot(&self) -> Fix {
        self.lock().clone()
    }
}

/// The sending half of the line queue.
#[derive(Debug)]
pub struct LineSender {
    tx: SyncSender<Line>,
    dropped: u64,
}

impl LineSender {
    /// Hand `line` to the parsing thread without blocking. Returns false if
    /// the line was dropped because the queue is full or the thread is gone.
    pub fn offer(&mut self, line: Line) -> bool {
        match self.tx.try_send(line) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                self.dropped += 1;
                debug!("line queue full, dropped {} lines so far", self.dropped);
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                debug!("parsing thread has stopped, dropping line");
                false
            }
        }
    }

    /// Number of lines dropped on a full queue.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

/// Handle of the parsing thread.
#[derive(Debug)]
pub struct Worker {
    handle: JoinHandle<()>,
}

impl Worker {
    /// Wait until the thread has parsed every queued line. The thread ends
    /// once its `LineSender` is dropped.
    pub fn join(self) -> Result<(), Error> {
        self.handle.join().map_err(|_| Error::Worker)
    }
}

/// Start the parsing thread. `on_report` runs on that thread with a
/// snapshot of the fix every `config.report_every` recognized sentences.
pub fn spawn<F>(config: &Config, shared: SharedFix, mut on_report: F) -> Result<(LineSender, Worker), Error>
where
    F: FnMut(&Fix) + Send + 'static,
{
    let (tx, rx) = mpsc::sync_channel::<Line>(config.queue_depth);
    let parser = SentenceParser::new(config.talkers.clone());
    let mut cadence = ReportCadence::new(config.report_every);

    let handle = thread::Builder::new()
        .name("nmea-parser".into())
        .spawn(move || {
            for line in rx {
                let mut fix = shared.lock();
                if parser.parse(&line, &mut *fix).is_some() && cadence.tick() {
                    let snapshot = fix.clone();
                    drop(fix);
                    on_report(&snapshot);
                }
            }
            trace!("line queue closed, parsing thread exits");
        })?;

    Ok((LineSender { tx, dropped: 0 }, Worker { handle }))
}

/// Handle one "data ready" event of `source` on the reading side: assemble
/// the available bytes and offer complete lines to the parsing thread.
///
/// Returns `Ok(false)` once the source has ended.
pub fn pump<S: ByteSource>(
    source: &mut S,
    assembler: &mut LineAssembler,
    lines: &mut LineSender,
) -> Result<bool, Error> {
    if !source.data_ready()? {
        return Ok(false);
    }
    while let Some(byte) = source.read_byte() {
        if let Some(line) = assembler.feed(byte) {
            lines.offer(line);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ReadSource;
    use std::io::Cursor;

    const GGA: &str = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,,,,*\r\n";
    const RMC: &str = "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A\r\n";

    fn line(text: &str) -> Line {
        text.bytes().collect()
    }

    #[test]
    fn parses_on_worker_thread() {
        let config = Config {
            report_every: 2,
            queue_depth: 64,
            ..Config::default()
        };
        let shared = SharedFix::new();
        let (report_tx, report_rx) = mpsc::channel();
        let (mut lines, worker) = spawn(&config, shared.clone(), move |fix: &Fix| {
            report_tx.send(fix.clone()).unwrap();
        })
        .unwrap();

        // a queue of 64 lines takes every sentence below, nothing is dropped
        let input = format!("{}{}", GGA, RMC).repeat(3);
        let mut source = ReadSource::new(Cursor::new(input.into_bytes()));
        let mut assembler = LineAssembler::new();
        while pump(&mut source, &mut assembler, &mut lines).unwrap() {}
        assert_eq!(lines.dropped(), 0);

        drop(lines);
        worker.join().unwrap();

        let reports: Vec<Fix> = report_rx.iter().collect();
        assert_eq!(reports.len(), 3);
        assert!(reports.iter().all(Fix::has_fix));

        let fix = shared.snapshot();
        assert_eq!(fix.time_text(), "12:35:19");
        assert_eq!(fix.satellites_tracked(), 8);
        assert!(fix.is_valid());
    }

    #[test]
    fn full_queue_drops_lines() {
        let (tx, rx) = mpsc::sync_channel(1);
        let mut lines = LineSender { tx, dropped: 0 };

        assert!(lines.offer(line("$GPGGA,1")));
        assert!(!lines.offer(line("$GPGGA,2")));
        assert!(!lines.offer(line("$GPGGA,3")));
        assert_eq!(lines.dropped(), 2);

        assert_eq!(rx.recv().unwrap().as_slice(), b"$GPGGA,1");
        assert!(lines.offer(line("$GPGGA,4")));
    }

    #[test]
    fn stopped_worker_drops_lines() {
        let (tx, rx) = mpsc::sync_channel(1);
        drop(rx);
        let mut lines = LineSender { tx, dropped: 0 };
        assert!(!lines.offer(line("$GPGGA,1")));
        assert_eq!(lines.dropped(), 0);
    }
}
