//! Test logger that forwards to `env_logger` and keeps every message for assertions.

use std::sync::{Mutex, Once};

use log::{LevelFilter, Log, Metadata, Record};

static RECORDS: Mutex<Vec<String>> = Mutex::new(Vec::new());
static INIT: Once = Once::new();

struct CapturingLogger {
    inner: env_logger::Logger,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if let Ok(mut records) = RECORDS.lock() {
            records.push(format!("{} {}", record.level(), record.args()));
        }
        self.inner.log(record);
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

pub(crate) fn init_logging() {
    INIT.call_once(|| {
        let inner = env_logger::Builder::from_default_env()
            .is_test(true)
            .build();
        let logger: &'static CapturingLogger = Box::leak(Box::new(CapturingLogger { inner }));
        if log::set_logger(logger).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
}

/// True if any message logged so far contains `fragment`.
pub(crate) fn logged(fragment: &str) -> bool {
    RECORDS
        .lock()
        .map(|records| records.iter().any(|line| line.contains(fragment)))
        .unwrap_or(false)
}
