use std::io::Write;

use anyhow::{Result, bail};
use chrono::NaiveDate;
use log::{info, warn};
use workout_app::{self as app, Settings, SettingsService, log::Service as _};
use workout_domain::{
    self as domain, CatalogService, CompletionService, LogCompletionError, Name, ReadError,
    SessionService, StorageError,
};
use workout_storage::FileStorage;

/// Executes the subcommands and renders their results to `out`.
pub struct Handler<W> {
    domain: domain::Service<FileStorage>,
    app: app::Service<FileStorage>,
    today: domain::DateInfo,
    out: W,
}

impl<W: Write> Handler<W> {
    pub fn new(storage: FileStorage, today: NaiveDate, out: W) -> Self {
        Self {
            domain: domain::Service::new(storage.clone()),
            app: app::Service::new(storage),
            today: today.into(),
            out,
        }
    }

    pub fn progress(&mut self) -> Result<()> {
        let completions = self.completions()?;
        let progress = domain::week_progress(&completions, self.today.week_of_year);

        if progress.is_empty() {
            writeln!(
                self.out,
                "Begin your week! Get started with your workout routine."
            )?;
            return Ok(());
        }

        writeln!(self.out, "Exercises Completed This Week:")?;
        for (day, exercises) in progress {
            writeln!(self.out, "Day {day}: {}", join(&exercises))?;
        }
        Ok(())
    }

    pub fn bodyparts(&mut self) -> Result<()> {
        let catalog = self.catalog()?;
        let completions = self.completions()?;
        let bodyparts =
            domain::available_bodyparts(&catalog, &completions, self.today.week_of_year);

        if bodyparts.is_empty() {
            writeln!(self.out, "No pending exercises this week.")?;
            return Ok(());
        }

        writeln!(self.out, "Select Body Parts to Train:")?;
        for bodypart in bodyparts {
            writeln!(self.out, "- {bodypart}")?;
        }
        Ok(())
    }

    pub fn pending(&mut self, bodyparts: &[String], all: bool) -> Result<()> {
        let catalog = self.catalog()?;
        let completions = self.completions()?;
        let week = self.today.week_of_year;

        let selected = if all {
            domain::available_bodyparts(&catalog, &completions, week)
        } else {
            let selected = bodyparts
                .iter()
                .filter_map(|bodypart| {
                    Name::new(bodypart)
                        .map_err(|err| warn!("ignoring body part {bodypart:?}: {err}"))
                        .ok()
                })
                .collect::<Vec<_>>();
            if selected.is_empty() {
                writeln!(self.out, "Please select at least one body part.")?;
                return Ok(());
            }
            selected
        };

        let session = self.session()?;
        let (pending, session) =
            self.domain
                .request_pending(session, &catalog, &completions, week, &selected);
        self.save_session(session)?;

        if pending.is_empty() {
            writeln!(
                self.out,
                "No pending exercises for the selected body parts."
            )?;
            return Ok(());
        }

        writeln!(self.out, "Pending Exercises:")?;
        for (bodypart, exercises) in &pending {
            writeln!(self.out, "{bodypart}:")?;
            for exercise in exercises {
                writeln!(self.out, "- {exercise}")?;
            }
        }
        Ok(())
    }

    /// Missing reps or weight are taken from the settings.
    pub fn log(
        &mut self,
        exercise: &str,
        reps: Option<String>,
        weight: Option<String>,
    ) -> Result<()> {
        let settings = self.settings()?;
        let reps = reps.unwrap_or_else(|| settings.default_reps.to_string());
        let weight = weight.unwrap_or(settings.default_weight);
        let catalog = self.catalog()?;
        let session = self.session()?;

        let (completion, session) = match self.domain.log_completion(
            session,
            &catalog,
            self.today.date,
            exercise,
            &reps,
            &weight,
        ) {
            Ok(result) => result,
            Err(LogCompletionError::Validation(err)) => {
                bail!("Please fill all fields before saving: {err}")
            }
            Err(err) => bail!("{err}"),
        };
        self.save_session(session)?;

        writeln!(self.out, "{} logged successfully!", completion.exercise)?;
        Ok(())
    }

    pub fn plan(&mut self, refresh: bool) -> Result<()> {
        let catalog = self.catalog()?;

        if catalog.is_empty() {
            writeln!(self.out, "No exercises found. Please check the CSV file.")?;
            return Ok(());
        }

        let session = self.session()?;
        let (plan, session) =
            self.domain
                .plan_week(session, &catalog, self.today.week_of_year, refresh);
        self.save_session(session)?;

        writeln!(self.out, "Your Suggested Workout Plan for the Week:")?;
        for (day, exercises) in plan.iter() {
            writeln!(self.out, "{day}")?;
            if plan.is_rest_day(day) {
                writeln!(self.out, "  Rest Day!")?;
            }
            for exercise in exercises {
                writeln!(self.out, "  - {exercise}")?;
            }
        }
        Ok(())
    }

    /// Newest entries first.
    pub fn history(&mut self) -> Result<()> {
        let entries = match self.app.get_log_entries() {
            Ok(entries) => entries,
            Err(err) => bail!("Error reading log: {err}"),
        };

        if entries.is_empty() {
            writeln!(self.out, "No log entries.")?;
            return Ok(());
        }

        for entry in entries {
            writeln!(
                self.out,
                "{} {:<5} {}",
                entry.time,
                entry.level.as_str(),
                entry.message
            )?;
        }
        Ok(())
    }

    /// Shows the settings, or updates them if any value is given.
    pub fn settings_command(&mut self, reps: Option<u32>, weight: Option<String>) -> Result<()> {
        let mut settings = self.settings()?;

        if reps.is_some() || weight.is_some() {
            if let Some(reps) = reps {
                settings.default_reps = domain::Reps::new(reps)?.into();
            }
            if let Some(weight) = weight {
                settings.default_weight = domain::Weight::new(&weight)?.to_string();
            }
            if let Err(err) = self.app.set_settings(settings.clone()) {
                bail!("Error saving settings: {err}");
            }
            info!(
                "default values changed to {} reps and {}",
                settings.default_reps, settings.default_weight
            );
        }

        writeln!(self.out, "Default reps: {}", settings.default_reps)?;
        writeln!(self.out, "Default weight: {}", settings.default_weight)?;
        Ok(())
    }

    fn catalog(&mut self) -> Result<domain::Catalog> {
        match self.domain.get_catalog() {
            Ok(catalog) => Ok(catalog),
            Err(err) => {
                self.report(&err)?;
                Ok(domain::Catalog::default())
            }
        }
    }

    fn completions(&mut self) -> Result<Vec<domain::Completion>> {
        match self.domain.get_completions() {
            Ok(completions) => Ok(completions),
            Err(err) => {
                self.report(&err)?;
                Ok(vec![])
            }
        }
    }

    fn session(&mut self) -> Result<domain::Session> {
        match self.domain.get_session() {
            Ok(session) => Ok(session),
            Err(err) => {
                self.report(&err)?;
                Ok(domain::Session::default())
            }
        }
    }

    fn save_session(&mut self, session: domain::Session) -> Result<()> {
        if let Err(err) = self.domain.set_session(session) {
            writeln!(self.out, "Error saving session: {err}")?;
        }
        Ok(())
    }

    fn settings(&mut self) -> Result<Settings> {
        match self.app.get_settings() {
            Ok(settings) => Ok(settings),
            Err(err) => {
                writeln!(self.out, "Error reading settings: {err}")?;
                Ok(Settings::default())
            }
        }
    }

    fn report(&mut self, err: &ReadError) -> Result<()> {
        match err {
            ReadError::Storage(StorageError::NotFound(path)) => {
                writeln!(self.out, "File not found: {path}")?;
            }
            _ => writeln!(self.out, "Error: {err}")?,
        }
        Ok(())
    }
}

fn join(names: &[Name]) -> String {
    names.iter().map(Name::as_str).collect::<Vec<_>>().join(", ")
}
