#![warn(clippy::pedantic)]

//! File storage
//!
//! The exercise catalog and the completion log are CSV files that can be edited by hand. The
//! session state, the settings and the application log are JSON files kept next to them.

use std::{
    io,
    path::{Path, PathBuf},
};

use workout_domain as domain;

pub mod csv_file;
pub mod json_file;


pub const CATALOG_FILE: &str = "exercises.csv";
pub const COMPLETIONS_FILE: &str = "stat_save.csv";
pub const SESSION_FILE: &str = "session.json";
pub const SETTINGS_FILE: &str = "settings.json";
pub const LOG_FILE: &str = "log.json";

#[derive(Debug, Clone)]
pub struct FileStorage {
    catalog: PathBuf,
    completions: PathBuf,
    session: PathBuf,
    settings: PathBuf,
    log: PathBuf,
}

impl FileStorage {
    /// Places all files into `data_dir`.
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            catalog: data_dir.join(CATALOG_FILE),
            completions: data_dir.join(COMPLETIONS_FILE),
            session: data_dir.join(SESSION_FILE),
            settings: data_dir.join(SETTINGS_FILE),
            log: data_dir.join(LOG_FILE),
        }
    }

    #[must_use]
    pub fn with_catalog(self, catalog: PathBuf) -> Self {
        Self { catalog, ..self }
    }

    #[must_use]
    pub fn with_completions(self, completions: PathBuf) -> Self {
        Self {
            completions,
            ..self
        }
    }

    #[must_use]
    pub fn completions_path(&self) -> &Path {
        &self.completions
    }
}

fn storage_error(path: &Path, err: io::Error) -> domain::StorageError {
    if err.kind() == io::ErrorKind::NotFound {
        domain::StorageError::NotFound(path.display().to_string())
    } else {
        domain::StorageError::Other(Box::new(err))
    }
}

fn create_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
