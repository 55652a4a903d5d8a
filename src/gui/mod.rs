mod app;
mod message;
mod screens;
mod state;
mod widgets;

pub use app::RecipeBoxApp;
pub use message::Message;
pub use state::AppState;

use tracing::info;

use crate::config::Settings;

/// Opens the recipe box window and blocks until it is closed.
pub fn run(settings: Settings) -> anyhow::Result<()> {
    info!(recipes = settings.seed.len(), theme = ?settings.theme, "starting recipe box");
    iced::application(
        move || RecipeBoxApp::new(&settings),
        RecipeBoxApp::update,
        RecipeBoxApp::view,
    )
    .title(RecipeBoxApp::title)
    .theme(RecipeBoxApp::theme)
    .run()
    .map_err(|e| anyhow::anyhow!("Failed to run recipe box window: {}", e))
}
