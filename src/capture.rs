//! Per-thread log capture for tests.
//!
//! `#[tokio::test]` runs on the test's own thread, so records logged
//! during one test never mix with another's.
use std::cell::RefCell;
use std::sync::Once;

thread_local! {
    static RECORDS: RefCell<Vec<(log::Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct Capture;

impl log::Log for Capture {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }
    fn log(&self, record: &log::Record) {
        RECORDS.with(|r| {
            r.borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }
    fn flush(&self) {}
}

static CAPTURE: Capture = Capture;
static INSTALL: Once = Once::new();

/// Clears this thread's records and makes sure the capture is installed.
pub fn start() {
    INSTALL.call_once(|| {
        log::set_logger(&CAPTURE).expect("no other logger in tests");
        log::set_max_level(log::LevelFilter::Trace);
    });
    RECORDS.with(|r| r.borrow_mut().clear());
}

/// Records logged on this thread since [`start`].
pub fn records() -> Vec<(log::Level, String)> {
    RECORDS.with(|r| r.borrow().clone())
}

/// Records at `Info` or more severe, which the user sees by default.
pub fn visible() -> Vec<(log::Level, String)> {
    records()
        .into_iter()
        .filter(|(level, _)| *level <= log::Level::Info)
        .collect()
}
