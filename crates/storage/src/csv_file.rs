//! CSV files
//!
//! The catalog has the columns `Bodypart` and `Exercises`, where the exercises of a body
//! part are separated by commas inside one field. The completion log has the columns `WOY`,
//! `WOD`, `Date`, `Exercise`, `Reps` and `Weight`. Surrounding whitespace in headers and
//! fields is ignored.

use std::{fs::File, path::Path};

use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use workout_domain as domain;

use super::{FileStorage, create_parent_dir, storage_error};

pub const COMPLETIONS_HEADER: [&str; 6] = ["WOY", "WOD", "Date", "Exercise", "Reps", "Weight"];

#[derive(Debug, Deserialize)]
struct Bodypart {
    #[serde(rename = "Bodypart")]
    bodypart: String,
    #[serde(rename = "Exercises")]
    exercises: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Completion {
    #[serde(rename = "WOY")]
    week_of_year: u32,
    #[serde(rename = "WOD")]
    day_of_week: u32,
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "Exercise")]
    exercise: String,
    #[serde(rename = "Reps")]
    reps: u32,
    #[serde(rename = "Weight")]
    weight: String,
}

impl From<domain::Completion> for Completion {
    fn from(value: domain::Completion) -> Self {
        Self {
            week_of_year: value.week_of_year.into(),
            day_of_week: value.day_of_week.into(),
            date: value.date,
            exercise: value.exercise.to_string(),
            reps: value.reps.into(),
            weight: value.weight.to_string(),
        }
    }
}

impl TryFrom<Completion> for domain::Completion {
    type Error = Box<dyn std::error::Error>;

    fn try_from(value: Completion) -> Result<Self, Self::Error> {
        Ok(Self {
            week_of_year: domain::WeekOfYear::new(value.week_of_year)?,
            day_of_week: domain::DayOfWeek::new(value.day_of_week)?,
            date: value.date,
            exercise: domain::Name::new(&value.exercise)?,
            reps: domain::Reps::new(value.reps)?,
            weight: domain::Weight::new(&value.weight)?,
        })
    }
}

fn reader(path: &Path) -> Result<csv::Reader<File>, domain::StorageError> {
    let file = File::open(path).map_err(|err| storage_error(path, err))?;
    Ok(csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file))
}

fn parse_error(path: &Path, err: impl std::fmt::Display) -> domain::ReadError {
    domain::ReadError::Other(format!("failed to parse {}: {err}", path.display()).into())
}

impl FileStorage {
    fn read_completion_records(&self) -> Result<Vec<Completion>, domain::ReadError> {
        let path = &self.completions;
        let mut reader = reader(path)?;
        reader
            .deserialize::<Completion>()
            .map(|record| record.map_err(|err| parse_error(path, err)))
            .collect()
    }

    /// Writes all records to a temporary file next to the log and replaces the log with it,
    /// so a failed write leaves the previous log intact.
    fn write_completion_records(&self, records: &[Completion]) -> Result<(), domain::StorageError> {
        let path = &self.completions;
        create_parent_dir(path).map_err(|err| storage_error(path, err))?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let file = NamedTempFile::new_in(dir).map_err(|err| storage_error(path, err))?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer
            .write_record(COMPLETIONS_HEADER)
            .map_err(|err| domain::StorageError::Other(err.into()))?;
        for record in records {
            writer
                .serialize(record)
                .map_err(|err| domain::StorageError::Other(err.into()))?;
        }
        let file = writer
            .into_inner()
            .map_err(|err| domain::StorageError::Other(Box::new(err.into_error())))?;
        file.persist(path)
            .map_err(|err| storage_error(path, err.error))?;
        Ok(())
    }
}

impl domain::CatalogRepository for FileStorage {
    fn read_catalog(&self) -> Result<domain::Catalog, domain::ReadError> {
        let path = &self.catalog;
        let mut reader = reader(path)?;
        let mut bodyparts = Vec::new();
        for record in reader.deserialize::<Bodypart>() {
            let record = record.map_err(|err| parse_error(path, err))?;
            match domain::Bodypart::parse(&record.bodypart, &record.exercises) {
                Ok(bodypart) => bodyparts.push(bodypart),
                Err(err) => warn!("ignoring catalog entry in {}: {err}", path.display()),
            }
        }
        debug!("read {} body parts from {}", bodyparts.len(), path.display());
        Ok(domain::Catalog::new(bodyparts))
    }
}

impl domain::CompletionRepository for FileStorage {
    fn read_completions(&self) -> Result<Vec<domain::Completion>, domain::ReadError> {
        let path = &self.completions;
        self.read_completion_records()?
            .into_iter()
            .map(|record| domain::Completion::try_from(record).map_err(|err| parse_error(path, err)))
            .collect()
    }

    fn append_completion(
        &self,
        completion: domain::Completion,
    ) -> Result<domain::Completion, domain::CreateError> {
        let mut records = match self.read_completion_records() {
            Ok(records) => records,
            Err(err) if err.is_not_found() => {
                debug!("creating {}", self.completions.display());
                vec![]
            }
            Err(err) => return Err(err.into()),
        };
        records.push(Completion::from(completion.clone()));
        self.write_completion_records(&records)?;
        Ok(completion)
    }
}
