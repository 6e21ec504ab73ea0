#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod log;
mod service;
mod settings;

pub use service::Service;
pub use settings::{Settings, SettingsRepository, SettingsService};
