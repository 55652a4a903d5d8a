pub mod nav_bar;
pub mod recipe;
pub mod recipe_list;
pub mod recipe_modal;

use iced::{Element, Task};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

/// A component with its own messages that reports upward through
/// `ParentMessage`.
pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view(&self) -> Element<'_, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message) -> Task<ScreenMessage<Self>>;
}
