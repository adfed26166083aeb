extern crate gpsfix;

use gpsfix::source::ReadSource;
use gpsfix::{render, to_decimal_degrees, Fix, Receiver, LINE_CAPACITY};
use std::io::Cursor;

const GGA: &str = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,,,,*";
const RMC: &str = "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A";

/// Feed `input` byte by byte and return the number of reports that were due.
fn feed(rx: &mut Receiver, input: &str) -> usize {
    input.bytes().filter(|&b| rx.feed(b)).count()
}

fn close(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

#[test]
fn gga_updates_position_group() {
    let mut rx: Receiver = Receiver::default();
    feed(&mut rx, &format!("{}\r\n", GGA));

    let fix = rx.fix();
    assert_eq!(fix.time_text(), "12:35:19");
    assert_eq!(fix.latitude_raw(), "4807.038");
    assert_eq!(fix.lat_hemisphere(), Some('N'));
    assert_eq!(fix.longitude_raw(), "01131.000");
    assert_eq!(fix.lon_hemisphere(), Some('E'));
    assert_eq!(fix.fix_quality(), 1);
    assert_eq!(fix.satellites_tracked(), 8);
    assert!(close(fix.horizontal_dilution(), 0.9, 1e-9));
    assert!(close(fix.altitude_meters(), 545.4, 1e-9));
}

#[test]
fn rmc_updates_motion_group() {
    let mut rx: Receiver = Receiver::default();
    feed(&mut rx, &format!("{}\n", RMC));

    assert!(rx.fix().is_valid());
    assert!(close(rx.fix().speed_knots(), 22.4, 1e-9));
    assert!(close(rx.fix().course_degrees(), 84.4, 1e-9));

    feed(&mut rx, "$GPRMC,123519,V,,,,,,,,,,\n");
    assert!(!rx.fix().is_valid());
}

#[test]
fn decimal_degrees() {
    assert!(close(to_decimal_degrees("4807.038", false), 48.1173, 1e-4));
    assert!(close(to_decimal_degrees("01131.000", true), 11.5167, 1e-4));
}

#[test]
fn overlong_line_does_not_corrupt_the_next() {
    let mut rx: Receiver = Receiver::default();
    let overlong = format!("$GPGGA,{}", "9".repeat(LINE_CAPACITY * 2));
    feed(&mut rx, &format!("{}\r\n{}\r\n", overlong, GGA));

    assert!(rx.assembler().overflows() > 0);
    assert_eq!(rx.fix().time_text(), "12:35:19");
    assert_eq!(rx.fix().latitude_raw(), "4807.038");
    assert_eq!(rx.fix().satellites_tracked(), 8);
}

#[test]
fn line_at_capacity_limit() {
    // LINE_CAPACITY - 1 bytes still fit
    let mut line = String::from(GGA);
    line.push_str(&",".repeat(LINE_CAPACITY - 1 - GGA.len()));
    assert_eq!(line.len(), LINE_CAPACITY - 1);

    let mut rx: Receiver = Receiver::default();
    feed(&mut rx, &format!("{}\n", line));
    assert_eq!(rx.assembler().overflows(), 0);
    assert_eq!(rx.fix().satellites_tracked(), 8);
}

#[test]
fn report_every_ten_sentences() {
    let mut rx: Receiver = Receiver::default();
    let nine = format!("{}\r\n", GGA).repeat(9);
    assert_eq!(feed(&mut rx, &nine), 0);
    assert_eq!(feed(&mut rx, &format!("{}\r\n", RMC)), 1);

    // unrecognized sentences in between are not counted
    let mut rx: Receiver = Receiver::default();
    let mut input = String::new();
    for _ in 0..9 {
        input.push_str(GGA);
        input.push_str("\n$GPGSV,3,1,11*74\n");
    }
    assert_eq!(feed(&mut rx, &input), 0);
}

#[test]
fn truncated_gga_keeps_later_fields() {
    let mut rx: Receiver = Receiver::default();
    feed(&mut rx, &format!("{}\n", GGA));
    feed(&mut rx, "$GPGGA,081500,5230.500,N,01322.000\n");

    let fix = rx.fix();
    assert_eq!(fix.time_text(), "08:15:00");
    assert_eq!(fix.latitude_raw(), "5230.500");
    assert_eq!(fix.longitude_raw(), "01322.000");
    assert_eq!(fix.lon_hemisphere(), Some('E'));
    assert_eq!(fix.fix_quality(), 1);
    assert_eq!(fix.satellites_tracked(), 8);
    assert!(close(fix.horizontal_dilution(), 0.9, 1e-9));
}

#[test]
fn reports_from_a_stream() {
    let input = format!("{}\r\n{}\r\n", GGA, RMC).repeat(10);
    let mut source = ReadSource::new(Cursor::new(input.into_bytes()));
    let mut rx: Receiver = Receiver::default();

    let mut reports: Vec<String> = Vec::new();
    while rx
        .service(&mut source, |fix: &Fix| reports.push(render(fix)))
        .unwrap()
    {}

    assert_eq!(reports.len(), 2);
    for report in &reports {
        assert!(report.contains("fix acquired"));
        assert!(report.contains("Latitude:   4807.038 N = 48.117300"));
        assert!(report.contains("Longitude:  01131.000 E = 11.516667"));
    }
}
