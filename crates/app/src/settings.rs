use workout_domain::{Reps, Weight};

pub trait SettingsService {
    fn get_settings(&self) -> Result<Settings, String>;
    fn set_settings(&self, settings: Settings) -> Result<(), String>;
}

pub trait SettingsRepository {
    fn read_settings(&self) -> Result<Settings, String>;
    fn write_settings(&self, settings: Settings) -> Result<(), String>;
}

/// Values prefilled when logging an exercise.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub default_reps: u32,
    pub default_weight: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_reps: Reps::DEFAULT.into(),
            default_weight: Weight::DEFAULT.to_string(),
        }
    }
}
