//! Integration tests for the log output of the library.
//!
//! Installs a capturing `log::Log` implementation for this test binary and
//! checks what the library emits.

use std::sync::{Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};

use colorful::checks::CheckLevel;
use colorful::descriptor::AttributeDict;
use colorful::field::RgbColorField;
use colorful::logging::{CHECKS_TARGET, report_checks};

struct CaptureLogger {
    records: Mutex<Vec<(Level, String, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        self.records.lock().unwrap().push((
            record.level(),
            record.target().to_string(),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

fn init_capture() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
}

/// Records for `target` whose message contains `needle`.
fn captured(target: &str, needle: &str) -> Vec<(Level, String, String)> {
    LOGGER
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(_, t, message)| t == target && message.contains(needle))
        .cloned()
        .collect()
}

#[test]
fn test_report_checks_logs_errors_with_checks_target() {
    init_capture();

    let field = RgbColorField::new("logged_e001").colors("notalist");
    let serious = report_checks(&field.check());
    assert_eq!(serious, 1);

    let records = captured(CHECKS_TARGET, "logged_e001");
    assert_eq!(records.len(), 1);
    let (level, target, message) = &records[0];
    assert_eq!(*level, Level::Error);
    assert_eq!(target, CHECKS_TARGET);
    assert!(message.contains("(colorful.E001) colors is not iterable"));
    assert!(message.contains("HINT: Define the colors param as list of strings."));
}

#[test]
fn test_report_checks_maps_warning_level() {
    init_capture();

    let field = RgbColorField::new("logged_warning").colors(["#nothex"]);
    let mut messages = field.check();
    messages[0].level = CheckLevel::Warning;
    assert_eq!(report_checks(&messages), 0);

    let records = captured(CHECKS_TARGET, "logged_warning");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].0, Level::Warn);
}

#[test]
fn test_pass_through_write_warns_on_unnormalized_value() {
    init_capture();

    let field = RgbColorField::new("logged_passthrough");
    let mut record = AttributeDict::new();
    field
        .legacy_descriptor()
        .set(&mut record, Some("not-a-color".into()))
        .unwrap();

    let records = captured("colorful::descriptor", "logged_passthrough");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].0, Level::Warn);
    assert_eq!(records[0].1, "colorful::descriptor");
}

#[test]
fn test_default_resolution_is_logged_at_debug() {
    init_capture();

    let field = RgbColorField::new("logged_default").default("#010101");
    let color = field.descriptor().read(&AttributeDict::new()).unwrap();
    assert_eq!(color.hex(), "#010101");

    let records = captured("colorful::field", "logged_default");
    assert!(
        records
            .iter()
            .any(|(level, target, _)| *level == Level::Debug && target == "colorful::field")
    );
}
