use chrono::NaiveDate;
use log::{debug, error, info};

use crate::{
    Catalog, CatalogRepository, CatalogService, Completion, CompletionRepository,
    CompletionService, CreateError, Name, Pending, ReadError, Session, SessionRepository,
    SessionService, ValidationError, WeekOfYear, WeeklyPlan, distribute, flatten, pending,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Computes the pending exercises and offers them for logging in the returned session.
    #[must_use]
    pub fn request_pending(
        &self,
        session: Session,
        catalog: &Catalog,
        completions: &[Completion],
        week: WeekOfYear,
        bodyparts: &[Name],
    ) -> (Pending, Session) {
        let pending = pending(catalog, completions, week, Some(bodyparts));
        let session = Session {
            pending: flatten(&pending),
            ..session
        };
        (pending, session)
    }

    /// Proposes the training plan of `week`. With `refresh` the exercises assigned in the
    /// current cycle are released first.
    #[must_use]
    pub fn plan_week(
        &self,
        session: Session,
        catalog: &Catalog,
        week: WeekOfYear,
        refresh: bool,
    ) -> (WeeklyPlan, Session) {
        let mut excluded = session.excluded;
        if refresh {
            debug!("releasing {} excluded exercises", excluded.len());
            excluded.clear();
        }
        let (plan, excluded) = distribute(catalog, &excluded, week);
        (
            plan,
            Session {
                excluded,
                ..session
            },
        )
    }
}

impl<R: CompletionRepository> Service<R> {
    /// Validates the user input, appends the completion and removes the exercise from the
    /// offered exercises. Nothing is written if the validation fails.
    ///
    /// Only exercises of the catalog without a completion in the week of `date` can be
    /// logged. If the session offers exercises, the choice is further limited to those.
    pub fn log_completion(
        &self,
        session: Session,
        catalog: &Catalog,
        date: NaiveDate,
        exercise: &str,
        reps: &str,
        weight: &str,
    ) -> Result<(Completion, Session), LogCompletionError> {
        let completions = match self.get_completions() {
            Ok(completions) => completions,
            Err(err) if err.is_not_found() => vec![],
            Err(err) => return Err(CreateError::from(err).into()),
        };
        let mut offered = flatten(&pending(catalog, &completions, date.into(), None));
        if !session.pending.is_empty() {
            offered.retain(|e| session.pending.contains(e));
        }

        let exercise = self.validate_completion_exercise(exercise, &offered)?;
        let reps = self.validate_completion_reps(reps)?;
        let weight = self.validate_completion_weight(weight)?;

        let completion = CompletionService::append_completion(
            self,
            Completion::new(date, exercise, reps, weight),
        )?;
        info!("{} logged successfully", completion.exercise);

        let mut session = session;
        session.complete(&completion.exercise);

        Ok((completion, session))
    }
}

#[derive(thiserror::Error, Debug)]
pub enum LogCompletionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Error saving exercise: {0}")]
    Create(#[from] CreateError),
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NotFound(_)) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: CatalogRepository> CatalogService for Service<R> {
    fn get_catalog(&self) -> Result<Catalog, ReadError> {
        log_on_error!(self.repository.read_catalog(), ReadError, "get", "catalog")
    }
}

impl<R: CompletionRepository> CompletionService for Service<R> {
    fn get_completions(&self) -> Result<Vec<Completion>, ReadError> {
        log_on_error!(
            self.repository.read_completions(),
            ReadError,
            "get",
            "completions"
        )
    }

    fn append_completion(&self, completion: Completion) -> Result<Completion, CreateError> {
        log_on_error!(
            self.repository.append_completion(completion),
            CreateError,
            "append",
            "completion"
        )
    }
}

impl<R: SessionRepository> SessionService for Service<R> {
    fn get_session(&self) -> Result<Session, ReadError> {
        log_on_error!(self.repository.read_session(), ReadError, "get", "session")
    }

    fn set_session(&self, session: Session) -> Result<(), CreateError> {
        log_on_error!(
            self.repository.write_session(&session),
            CreateError,
            "set",
            "session"
        )
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use crate::{Bodypart, Excluded, Reps, StorageError, Weight};

    use super::*;

    #[derive(Default)]
    struct Repository {
        completions: RefCell<Vec<Completion>>,
        fail: bool,
    }

    impl CompletionRepository for Repository {
        fn read_completions(&self) -> Result<Vec<Completion>, ReadError> {
            Ok(self.completions.borrow().clone())
        }

        fn append_completion(&self, completion: Completion) -> Result<Completion, CreateError> {
            if self.fail {
                return Err(CreateError::Storage(StorageError::Other("disk full".into())));
            }
            self.completions.borrow_mut().push(completion.clone());
            Ok(completion)
        }
    }

    static CATALOG: std::sync::LazyLock<Catalog> = std::sync::LazyLock::new(|| {
        Catalog::new(vec![
            Bodypart::parse("Legs", "Squat, Lunge").unwrap(),
            Bodypart::parse("Back", "Row").unwrap(),
        ])
    });

    const DATE: NaiveDate = NaiveDate::from_ymd_opt(2025, 2, 12).unwrap();

    fn name(value: &str) -> Name {
        Name::new(value).unwrap()
    }

    #[test]
    fn test_request_pending_and_log_completion() {
        let service = Service::new(Repository::default());
        let week = WeekOfYear::from(DATE);

        let (pending, session) = service.request_pending(
            Session::default(),
            &CATALOG,
            &service.get_completions().unwrap(),
            week,
            &[name("Legs"), name("Back")],
        );
        assert_eq!(pending.len(), 2);
        assert_eq!(session.pending, vec![name("Squat"), name("Lunge"), name("Row")]);

        let (completion, session) = service
            .log_completion(session, &CATALOG, DATE, "Squat", "5", "100 lbs")
            .unwrap();
        assert_eq!(
            completion,
            Completion::new(
                DATE,
                name("Squat"),
                Reps::new(5).unwrap(),
                Weight::new("100 lbs").unwrap()
            )
        );
        assert_eq!(session.pending, vec![name("Lunge"), name("Row")]);

        let (pending, _) = service.request_pending(
            session,
            &CATALOG,
            &service.get_completions().unwrap(),
            week,
            &[name("Legs")],
        );
        assert_eq!(
            pending.get(&name("Legs")),
            Some(&vec![name("Lunge")])
        );
    }

    #[test]
    fn test_log_completion_rejects_invalid_input() {
        let service = Service::new(Repository::default());
        let session = Session {
            pending: vec![name("Squat")],
            excluded: Excluded::new(),
        };

        assert!(matches!(
            service.log_completion(session.clone(), &CATALOG, DATE, "", "5", "100 lbs"),
            Err(LogCompletionError::Validation(ValidationError::NoExercise))
        ));
        assert!(matches!(
            service.log_completion(session.clone(), &CATALOG, DATE, "Row", "5", "100 lbs"),
            Err(LogCompletionError::Validation(ValidationError::NotPending(_)))
        ));
        assert!(matches!(
            service.log_completion(session.clone(), &CATALOG, DATE, "Squat", "0", "100 lbs"),
            Err(LogCompletionError::Validation(ValidationError::Other(_)))
        ));
        assert!(matches!(
            service.log_completion(session, &CATALOG, DATE, "Squat", "5", " "),
            Err(LogCompletionError::Validation(ValidationError::Other(_)))
        ));
        assert!(service.get_completions().unwrap().is_empty());
    }

    #[test]
    fn test_log_completion_without_offered_exercises() {
        let service = Service::new(Repository::default());

        assert!(matches!(
            service.log_completion(
                Session::default(),
                &CATALOG,
                DATE,
                "Bench Press",
                "5",
                "100 lbs"
            ),
            Err(LogCompletionError::Validation(ValidationError::NotPending(exercise)))
                if exercise == "Bench Press"
        ));

        let (_, session) = service
            .log_completion(Session::default(), &CATALOG, DATE, "Row", "8", "60 lbs")
            .unwrap();
        assert!(session.pending.is_empty());

        assert!(matches!(
            service.log_completion(session, &CATALOG, DATE, "Row", "8", "60 lbs"),
            Err(LogCompletionError::Validation(ValidationError::NotPending(exercise)))
                if exercise == "Row"
        ));
        assert_eq!(service.get_completions().unwrap().len(), 1);
    }

    #[test]
    fn test_log_completion_after_week_change() {
        let service = Service::new(Repository::default());
        let next_week = NaiveDate::from_ymd_opt(2025, 2, 19).unwrap();

        service
            .log_completion(Session::default(), &CATALOG, DATE, "Row", "8", "60 lbs")
            .unwrap();

        assert!(
            service
                .log_completion(
                    Session::default(),
                    &CATALOG,
                    next_week,
                    "Row",
                    "8",
                    "60 lbs"
                )
                .is_ok()
        );
    }

    #[test]
    fn test_log_completion_storage_failure() {
        let service = Service::new(Repository {
            fail: true,
            ..Repository::default()
        });
        let session = Session {
            pending: vec![name("Squat")],
            excluded: Excluded::new(),
        };

        let result = service.log_completion(session, &CATALOG, DATE, "Squat", "5", "100 lbs");
        assert!(matches!(result, Err(LogCompletionError::Create(_))));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Error saving exercise: disk full"
        );
    }

    #[test]
    fn test_plan_week() {
        let service = Service::new(Repository::default());
        let week = WeekOfYear::new(10).unwrap();

        let (plan, session) = service.plan_week(Session::default(), &CATALOG, week, false);
        assert_eq!(plan.len(), 3);
        assert_eq!(session.excluded.len(), 3);

        let (next_plan, next_session) = service.plan_week(session.clone(), &CATALOG, week, false);
        assert_eq!(next_plan, plan);
        assert_eq!(next_session.excluded, session.excluded);

        let (refreshed_plan, refreshed_session) =
            service.plan_week(session, &CATALOG, week, true);
        assert_eq!(refreshed_plan, plan);
        assert_eq!(refreshed_session.excluded.len(), 3);
    }

    #[test]
    fn test_plan_week_keeps_pending() {
        let service = Service::new(Repository::default());
        let session = Session {
            pending: vec![name("Row")],
            excluded: Excluded::from([name("Squat")]),
        };

        let (plan, session) =
            service.plan_week(session, &CATALOG, WeekOfYear::new(3).unwrap(), false);
        assert_eq!(plan.len(), 2);
        assert_eq!(session.pending, vec![name("Row")]);
        assert_eq!(session.excluded.len(), 3);
    }
}
