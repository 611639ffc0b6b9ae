//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::RefCell;
use std::sync::Once;

pub const EPSILON: f64 = 1e-12;

/// A log record captured during a test
#[derive(Debug, Clone)]
pub struct CapturedRecord {
    pub level: Level,
    pub target: String,
    pub message: String,
}

thread_local! {
    static CAPTURED: RefCell<Vec<CapturedRecord>> = const { RefCell::new(Vec::new()) };
}

/// Logger that keeps records per thread, so parallel tests don't see each
/// other's output
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        CAPTURED.with(|records| {
            records.borrow_mut().push(CapturedRecord {
                level: record.level(),
                target: record.target().to_string(),
                message: record.args().to_string(),
            })
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Run `f` and return its result together with everything it logged
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, Vec<CapturedRecord>) {
    INIT.call_once(|| {
        // Another logger may already be installed by a demo; then nothing is captured.
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
    CAPTURED.with(|records| records.borrow_mut().clear());
    let out = f();
    let records = CAPTURED.with(|records| records.borrow_mut().drain(..).collect());
    (out, records)
}

/// Warnings among the captured records
pub fn warnings(records: &[CapturedRecord]) -> Vec<&CapturedRecord> {
    records.iter().filter(|r| r.level == Level::Warn).collect()
}

/// Insert NaN after every `stride`-th element
pub fn sprinkle_nan(data: &[f64], stride: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(data.len() + data.len() / stride.max(1) + 1);
    for (i, &x) in data.iter().enumerate() {
        if stride > 0 && i % stride == 0 {
            out.push(f64::NAN);
        }
        out.push(x);
    }
    out
}

/// Generate test data with specific patterns
pub fn generate_test_data(len: usize) -> Vec<f64> {
    (0..len).map(|i| (i as f64 * 0.37).sin() * 10.0 + 0.1).collect()
}
