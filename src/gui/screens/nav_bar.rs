use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{container, row, text},
};
use iced_widget::container::bordered_box;

use crate::gui::screens::{Screen, ScreenMessage};

/// Static title bar above the recipe list.
#[derive(Debug, Clone)]
pub struct NavBar;

impl Screen for NavBar {
    type Message = Infallible;
    type ParentMessage = Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        container(
            row![
                text("Recipe Box").size(28),
                text("Your recipes, in one place"),
            ]
            .spacing(20)
            .align_y(Center),
        )
        .style(bordered_box)
        .padding(15)
        .width(Length::Fill)
        .into()
    }

    fn update(&mut self, message: Self::Message) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}
