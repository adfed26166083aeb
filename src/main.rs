#[macro_use]
extern crate log;

use gpsfix::source::{self, ByteSource};
use gpsfix::task::{self, SharedFix};
use gpsfix::{Config, Error, LineAssembler, Receiver, Report};
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("{}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let config = Config::from_env()?;
    let mut source = source::open(config.device.as_deref())?;

    info!(
        "GPS receiver ready on {} ({})",
        config
            .device
            .as_ref()
            .map_or_else(|| "stdin".to_owned(), |p| p.display().to_string()),
        config.serial
    );
    info!(
        "talkers {}, report every {} sentences",
        config
            .talkers
            .iter()
            .map(|t| String::from_utf8_lossy(t).into_owned())
            .collect::<Vec<_>>()
            .join(","),
        config.report_every
    );
    info!("waiting for GPS data");

    if config.parse_thread {
        run_threaded(&config, &mut source)
    } else {
        let mut receiver: Receiver = Receiver::from_config(&config);
        while receiver.service(&mut source, |fix| println!("{}\n", Report(fix)))? {}
        Ok(())
    }
}

fn run_threaded<S: ByteSource>(config: &Config, source: &mut S) -> Result<(), Error> {
    let shared = SharedFix::new();
    let (mut lines, worker) = task::spawn(config, shared.clone(), |fix| {
        println!("{}\n", Report(fix))
    })?;

    let mut assembler = LineAssembler::new();
    while task::pump(source, &mut assembler, &mut lines)? {}

    if lines.dropped() > 0 {
        info!("{} lines dropped on a full queue", lines.dropped());
    }
    drop(lines);
    worker.join()?;

    debug!("last fix: {:?}", shared.snapshot());
    Ok(())
}
