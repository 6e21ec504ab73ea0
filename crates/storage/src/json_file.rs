use std::{collections::VecDeque, fs, io, path::Path};

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use workout_app::{Settings, log};
use workout_domain as domain;

use super::{FileStorage, create_parent_dir, storage_error};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct Session {
    pending: Vec<String>,
    excluded: Vec<String>,
}

impl From<&domain::Session> for Session {
    fn from(value: &domain::Session) -> Self {
        let mut excluded = value
            .excluded
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        excluded.sort();
        Self {
            pending: value.pending.iter().map(ToString::to_string).collect(),
            excluded,
        }
    }
}

impl TryFrom<Session> for domain::Session {
    type Error = domain::NameError;

    fn try_from(value: Session) -> Result<Self, Self::Error> {
        Ok(Self {
            pending: value
                .pending
                .iter()
                .map(|name| domain::Name::new(name))
                .collect::<Result<_, _>>()?,
            excluded: value
                .excluded
                .iter()
                .map(|name| domain::Name::new(name))
                .collect::<Result<_, _>>()?,
        })
    }
}

/// Reads a JSON file. A missing file yields `None`.
fn read<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, io::Error> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

fn write<T: Serialize>(path: &Path, value: &T) -> Result<(), io::Error> {
    create_parent_dir(path)?;
    fs::write(path, serde_json::to_string_pretty(value)?)
}

impl domain::SessionRepository for FileStorage {
    fn read_session(&self) -> Result<domain::Session, domain::ReadError> {
        match read::<Session>(&self.session) {
            Ok(Some(session)) => Ok(domain::Session::try_from(session)
                .map_err(|err| domain::ReadError::Other(err.into()))?),
            Ok(None) => Ok(domain::Session::default()),
            Err(err) => Err(storage_error(&self.session, err).into()),
        }
    }

    fn write_session(&self, session: &domain::Session) -> Result<(), domain::CreateError> {
        write(&self.session, &Session::from(session))
            .map_err(|err| storage_error(&self.session, err).into())
    }
}

impl workout_app::SettingsRepository for FileStorage {
    fn read_settings(&self) -> Result<Settings, String> {
        read(&self.settings)
            .map(Option::unwrap_or_default)
            .map_err(|err| err.to_string())
    }

    fn write_settings(&self, settings: Settings) -> Result<(), String> {
        write(&self.settings, &settings).map_err(|err| err.to_string())
    }
}

impl log::Repository for FileStorage {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        read(&self.log)
            .map(Option::unwrap_or_default)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(log::CAPACITY);
        write(&self.log, &entries).map_err(|err| log::Error::Unknown(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use workout_app::{SettingsRepository, log::Repository};
    use workout_domain::SessionRepository;

    use crate::tests::data::SESSION;

    use super::*;

    #[test]
    fn test_session() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        assert_eq!(storage.read_session().unwrap(), domain::Session::default());

        storage.write_session(&SESSION).unwrap();
        assert_eq!(storage.read_session().unwrap(), *SESSION);
        assert_eq!(
            fs::read_to_string(dir.path().join("session.json")).unwrap(),
            "{\n  \"pending\": [\n    \"Lunge\",\n    \"Row\"\n  ],\n  \"excluded\": [\n    \"Lunge\",\n    \"Squat\"\n  ]\n}"
        );
    }

    #[test]
    fn test_session_invalid() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("session.json"), "{\"pending\": [\"\"]}").unwrap();

        assert!(matches!(
            FileStorage::new(dir.path()).read_session(),
            Err(domain::ReadError::Other(_))
        ));

        fs::write(dir.path().join("session.json"), "[").unwrap();

        assert!(matches!(
            FileStorage::new(dir.path()).read_session(),
            Err(domain::ReadError::Storage(domain::StorageError::Other(_)))
        ));
    }

    #[test]
    fn test_settings() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        let settings = Settings {
            default_reps: 10,
            default_weight: "20 kg".to_string(),
        };

        assert_eq!(storage.read_settings().unwrap(), Settings::default());

        storage.write_settings(settings.clone()).unwrap();
        assert_eq!(storage.read_settings().unwrap(), settings);
    }

    #[test]
    fn test_log() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        assert!(storage.read_entries().unwrap().is_empty());

        for i in 0..=log::CAPACITY {
            storage
                .write_entry(log::Entry {
                    time: String::from("Feb 12 08:30:00"),
                    level: ::log::Level::Info,
                    message: format!("{i}"),
                })
                .unwrap();
        }

        let entries = storage.read_entries().unwrap();
        assert_eq!(entries.len(), log::CAPACITY);
        assert_eq!(entries[0].message, format!("{}", log::CAPACITY));
        assert_eq!(entries[log::CAPACITY - 1].message, "1");
    }
}
