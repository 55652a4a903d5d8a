use iced::{
    Element, Task, Theme,
    widget::column,
};

use super::{
    AppState, Message,
    screens::{Screen, ScreenMessage, nav_bar::NavBar, recipe_list::RecipeListScreen},
};
use crate::config::{Settings, ThemeChoice};

/// Root of the window: the nav bar above the recipe list.
pub struct RecipeBoxApp {
    state: AppState,
    nav_bar: NavBar,
    recipe_list: RecipeListScreen,
}

impl RecipeBoxApp {
    pub fn new(settings: &Settings) -> (Self, Task<Message>) {
        (
            Self {
                state: AppState::from(settings),
                nav_bar: NavBar,
                recipe_list: RecipeListScreen::new(settings.recipe_list()),
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        "Recipe Box".to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NavBar(ScreenMessage::ScreenMessage(msg)) => {
                self.nav_bar.update(msg).map(Message::NavBar)
            }
            Message::NavBar(ScreenMessage::ParentMessage(never)) => match never {},
            Message::RecipeList(ScreenMessage::ScreenMessage(msg)) => {
                self.recipe_list.update(msg).map(Message::RecipeList)
            }
            Message::RecipeList(ScreenMessage::ParentMessage(never)) => match never {},
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        column![
            self.nav_bar.view().map(Message::NavBar),
            self.recipe_list.view().map(Message::RecipeList),
        ]
        .into()
    }

    pub fn theme(&self) -> Theme {
        match self.state.theme {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
        }
    }
}
