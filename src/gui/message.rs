use crate::gui::screens::{ScreenMessage, nav_bar::NavBar, recipe_list::RecipeListScreen};

#[derive(Debug, Clone)]
pub enum Message {
    NavBar(ScreenMessage<NavBar>),
    RecipeList(ScreenMessage<RecipeListScreen>),
}
