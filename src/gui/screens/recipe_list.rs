use std::convert::Infallible;

use iced::{
    Element, Length, Task,
    widget::{Column, button, column, mouse_area, scrollable},
};
use tracing::{debug, warn};

use crate::{
    core::{CREATE_BUTTON_LABEL, ModalRequest, Mode, RecipeList},
    gui::{
        screens::{
            Screen, ScreenMessage,
            recipe::recipe,
            recipe_modal::{RecipeModal, RecipeModalMessage},
        },
        widgets::overlay,
    },
};

/// The recipe list with its create button and modal.
#[derive(Debug, Clone)]
pub struct RecipeListScreen {
    list: RecipeList,
    modal: RecipeModal,
}

#[derive(Debug, Clone)]
pub enum RecipeListMessage {
    ShowModal(Option<usize>, Mode),
    Modal(ScreenMessage<RecipeModal>),
}

impl RecipeListScreen {
    pub fn new(list: RecipeList) -> Self {
        let modal = RecipeModal::new(list.modal_props());
        Self { list, modal }
    }

    fn apply(&mut self, request: ModalRequest) {
        debug!(?request, "recipe modal request");
        if let Err(error) = request.apply(&mut self.list) {
            warn!(%error, "recipe modal request rejected");
        }
        self.modal.sync(self.list.modal_props());
    }
}

impl Screen for RecipeListScreen {
    type Message = RecipeListMessage;
    type ParentMessage = Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let send = |message: RecipeListMessage| ScreenMessage::ScreenMessage(message);
        let rows = Column::with_children(self.list.rows().into_iter().map(|row| {
            let index = row.index;
            mouse_area(recipe(row))
                .on_press(send(RecipeListMessage::ShowModal(Some(index), Mode::Read)))
                .into()
        }))
        .spacing(10);

        let content = column![
            scrollable(rows).height(Length::Fill),
            button(CREATE_BUTTON_LABEL)
                .on_press(send(RecipeListMessage::ShowModal(None, Mode::Create))),
        ]
        .spacing(20)
        .padding(20);

        if self.list.recipe_modal().is_hidden() {
            return content.into();
        }
        let modal = self
            .modal
            .view()
            .map(|message| ScreenMessage::ScreenMessage(RecipeListMessage::Modal(message)));
        overlay(
            content,
            modal,
            send(RecipeListMessage::Modal(ScreenMessage::ParentMessage(
                ModalRequest::Hide,
            ))),
        )
    }

    fn update(&mut self, message: Self::Message) -> Task<ScreenMessage<Self>> {
        match message {
            RecipeListMessage::ShowModal(index, mode) => {
                if let Err(error) = self.list.show_modal(index, mode) {
                    warn!(%error, "could not open recipe modal");
                }
                self.modal.sync(self.list.modal_props());
                Task::none()
            }
            RecipeListMessage::Modal(ScreenMessage::ScreenMessage(message)) => self
                .modal
                .update(message)
                .map(|message| ScreenMessage::ScreenMessage(RecipeListMessage::Modal(message))),
            RecipeListMessage::Modal(ScreenMessage::ParentMessage(request)) => {
                self.apply(request);
                Task::none()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Recipe;

    #[test]
    fn modal_requests_reach_the_list() {
        let mut screen = RecipeListScreen::new(RecipeList::new());
        let _ = screen.update(RecipeListMessage::ShowModal(None, Mode::Create));
        let _ = screen.update(RecipeListMessage::Modal(ScreenMessage::ParentMessage(
            ModalRequest::Create(Recipe::new("Toast", "Bread, but hot", "bread")),
        )));

        assert_eq!(screen.list.recipes().len(), 2);
        let props = screen.list.modal_props();
        assert_eq!(props.mode, Some(Mode::Read));
        assert_eq!(props.recipe_id, Some(1));
        assert_eq!(screen.modal, RecipeModal::new(props));
    }

    #[test]
    fn rejected_request_leaves_state_alone() {
        let mut screen = RecipeListScreen::new(RecipeList::new());
        let _ = screen.update(RecipeListMessage::ShowModal(Some(5), Mode::Read));
        assert!(screen.list.recipe_modal().is_hidden());

        let _ = screen.update(RecipeListMessage::Modal(ScreenMessage::ParentMessage(
            ModalRequest::SwitchMode(Mode::Update),
        )));
        assert!(screen.list.recipe_modal().is_hidden());
        assert_eq!(screen.list.recipes().len(), 1);
    }
}
