#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate gpsfix;

use gpsfix::{render, Receiver, LINE_CAPACITY};

fuzz_target!(|data: &[u8]| {
    let mut receiver: Receiver = Receiver::default();

    for &b in data {
        if receiver.feed(b) {
            let _ = render(receiver.fix());
        }
        assert!(receiver.assembler().len() < LINE_CAPACITY);
    }
});
