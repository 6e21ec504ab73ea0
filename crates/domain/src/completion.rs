use chrono::NaiveDate;
use derive_more::{AsRef, Display, Into};

use crate::{CreateError, DateInfo, DayOfWeek, Name, ReadError, ValidationError, WeekOfYear};

pub trait CompletionService {
    fn get_completions(&self) -> Result<Vec<Completion>, ReadError>;
    fn append_completion(&self, completion: Completion) -> Result<Completion, CreateError>;

    /// Checks that the exercise is one of the exercises offered for logging.
    fn validate_completion_exercise(
        &self,
        exercise: &str,
        pending: &[Name],
    ) -> Result<Name, ValidationError> {
        if exercise.trim().is_empty() {
            return Err(ValidationError::NoExercise);
        }
        let exercise = Name::new(exercise).map_err(|err| ValidationError::Other(err.into()))?;
        if pending.contains(&exercise) {
            Ok(exercise)
        } else {
            Err(ValidationError::NotPending(exercise.to_string()))
        }
    }

    fn validate_completion_reps(&self, reps: &str) -> Result<Reps, ValidationError> {
        Reps::try_from(reps.trim()).map_err(|err| ValidationError::Other(err.into()))
    }

    fn validate_completion_weight(&self, weight: &str) -> Result<Weight, ValidationError> {
        Weight::new(weight).map_err(|err| ValidationError::Other(err.into()))
    }
}

pub trait CompletionRepository {
    fn read_completions(&self) -> Result<Vec<Completion>, ReadError>;
    fn append_completion(&self, completion: Completion) -> Result<Completion, CreateError>;
}

/// A completed exercise as recorded in the completion log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub week_of_year: WeekOfYear,
    pub day_of_week: DayOfWeek,
    pub date: NaiveDate,
    pub exercise: Name,
    pub reps: Reps,
    pub weight: Weight,
}

impl Completion {
    #[must_use]
    pub fn new(date: NaiveDate, exercise: Name, reps: Reps, weight: Weight) -> Self {
        let DateInfo {
            date,
            week_of_year,
            day_of_week,
        } = DateInfo::from(date);
        Self {
            week_of_year,
            day_of_week,
            date,
            exercise,
            reps,
            weight,
        }
    }
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub const DEFAULT: Reps = Reps(6);

    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(1..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl Default for Reps {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 1 to 999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

/// Free text load description, e.g. "25 lbs" or "bodyweight".
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq)]
pub struct Weight(String);

impl Weight {
    pub const DEFAULT: &'static str = "25 lbs";

    pub fn new(value: &str) -> Result<Self, WeightError> {
        let trimmed_value = value.trim();

        if trimmed_value.is_empty() {
            return Err(WeightError::Empty);
        }

        Ok(Self(trimmed_value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must not be empty")]
    Empty,
}
