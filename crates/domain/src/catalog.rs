use std::collections::HashSet;

use log::warn;

use crate::{Name, NameError, ReadError};

pub trait CatalogService {
    fn get_catalog(&self) -> Result<Catalog, ReadError>;
}

pub trait CatalogRepository {
    fn read_catalog(&self) -> Result<Catalog, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bodypart {
    pub name: Name,
    pub exercises: Vec<Name>,
}

impl Bodypart {
    /// Builds a body part from the comma-separated exercise list of a catalog row.
    pub fn parse(name: &str, exercises: &str) -> Result<Self, CatalogError> {
        let name = Name::new(name).map_err(CatalogError::Bodypart)?;
        let mut seen = HashSet::new();
        let mut result = Vec::new();
        for exercise in exercises.split(',').filter(|e| !e.trim().is_empty()) {
            let exercise = Name::new(exercise).map_err(|err| CatalogError::Exercise {
                bodypart: name.to_string(),
                source: err,
            })?;
            if seen.insert(exercise.clone()) {
                result.push(exercise);
            } else {
                warn!("ignoring duplicate exercise {exercise} of {name}");
            }
        }
        Ok(Self {
            name,
            exercises: result,
        })
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalog {
    bodyparts: Vec<Bodypart>,
}

impl Catalog {
    #[must_use]
    pub fn new(bodyparts: Vec<Bodypart>) -> Self {
        let mut seen = HashSet::new();
        let bodyparts = bodyparts
            .into_iter()
            .filter(|bp| {
                let first = seen.insert(bp.name.clone());
                if !first {
                    warn!("ignoring duplicate body part {}", bp.name);
                }
                first
            })
            .collect();
        Self { bodyparts }
    }

    /// True if no body part lists any exercise.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodyparts.iter().all(|bp| bp.exercises.is_empty())
    }

    pub fn bodypart_names(&self) -> impl Iterator<Item = &Name> {
        self.bodyparts.iter().map(|bp| &bp.name)
    }

    #[must_use]
    pub fn exercises_of(&self, bodypart: &Name) -> Option<&[Name]> {
        self.bodyparts
            .iter()
            .find(|bp| bp.name == *bodypart)
            .map(|bp| bp.exercises.as_slice())
    }

    /// All exercises in catalog order. Exercises listed under several body parts occur
    /// several times.
    #[must_use]
    pub fn all_exercises(&self) -> Vec<Name> {
        self.bodyparts
            .iter()
            .flat_map(|bp| bp.exercises.iter().cloned())
            .collect()
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("invalid body part: {0}")]
    Bodypart(NameError),
    #[error("invalid exercise of {bodypart}: {source}")]
    Exercise { bodypart: String, source: NameError },
}
