use std::{
    collections::VecDeque,
    io::Write,
    sync::{Arc, Mutex},
};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

pub static LOG: Mutex<Option<Arc<Mutex<dyn Repository>>>> = Mutex::new(None);

/// Number of entries kept in the application log.
pub const CAPACITY: usize = 100;

#[allow(clippy::missing_errors_doc)]
pub trait Service {
    fn get_log_entries(&self) -> Result<VecDeque<Entry>, Error>;
}

#[allow(clippy::missing_errors_doc)]
pub trait Repository: Send + Sync + 'static {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
pub enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

static LOGGER: Logger = Logger;

/// Installs the logger. Records up to `level` are printed to stderr, records up to `Info`
/// are also stored in the repository.
///
/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(
    storage: Arc<Mutex<dyn Repository>>,
    level: LevelFilter,
) -> Result<(), SetLoggerError> {
    if let Ok(mut log) = LOG.lock() {
        *log = Some(storage);
    }
    if let Ok(mut stderr_level) = STDERR_LEVEL.lock() {
        *stderr_level = level;
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Trace))
}

static STDERR_LEVEL: Mutex<LevelFilter> = Mutex::new(LevelFilter::Warn);

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let stderr_level = STDERR_LEVEL.lock().map_or(LevelFilter::Warn, |l| *l);
        if record.level() <= stderr_level {
            let _ = writeln!(
                std::io::stderr(),
                "[{}] {}",
                record.level().as_str().to_lowercase(),
                record.args()
            );
        }

        if record.level() <= Level::Info {
            if let Ok(log) = LOG.lock() {
                if let Some(ref log) = *log {
                    if let Ok(log) = log.lock() {
                        let _ = log.write_entry(Entry {
                            time: Local::now().format("%b %d %H:%M:%S").to_string(),
                            level: record.level(),
                            message: record.args().to_string(),
                        });
                    }
                }
            }
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_entry_serialization() {
        let entry = Entry {
            time: "Feb 12 08:30:00".to_string(),
            level: Level::Warn,
            message: "file not found: exercises.csv".to_string(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"time":"Feb 12 08:30:00","level":"Warn","message":"file not found: exercises.csv"}"#
        );
        assert_eq!(serde_json::from_str::<Entry>(&json).unwrap(), entry);
    }
}
