use crate::config::{Settings, ThemeChoice};

#[derive(Debug)]
pub struct AppState {
    pub theme: ThemeChoice,
}

impl From<&Settings> for AppState {
    fn from(settings: &Settings) -> Self {
        Self {
            theme: settings.theme,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}
