mod errors;
mod model;
mod storage;

pub(crate) use model::ShellSettings;
use storage::{SettingsLoadStatus, load_settings, settings_path};

/// Load settings for startup, falling back to defaults on any failure.
pub(crate) fn load_initial_settings() -> ShellSettings {
    match load_settings() {
        Ok(load) => {
            let (settings, status) = load.into_parts();
            match status {
                SettingsLoadStatus::Loaded => {
                    log::info!(
                        "settings loaded from {}",
                        settings_path().display()
                    );
                },
                SettingsLoadStatus::Missing => {
                    log::debug!("no settings file, using defaults");
                },
                SettingsLoadStatus::Invalid(message) => {
                    log::warn!("settings file is invalid: {message}");
                },
            }
            settings
        },
        Err(err) => {
            log::warn!("failed to read settings: {err}");
            ShellSettings::default()
        },
    }
}
