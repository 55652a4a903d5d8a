use iced::{
    Element, Length, Task,
    widget::{Column, button, column, container, row, text, text_input},
};
use iced_widget::container::bordered_box;

use crate::{
    core::{Field, ModalRequest, Mode, RecipeForm, RecipeModalProps},
    gui::screens::{Screen, ScreenMessage},
};

/// Create/read/update/delete form for a single recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeModal {
    props: RecipeModalProps,
    form: RecipeForm,
}

#[derive(Debug, Clone)]
pub enum RecipeModalMessage {
    Edit(Field, String),
    Submit,
    Cancel,
    SwitchMode(Mode),
}

impl RecipeModal {
    pub fn new(props: RecipeModalProps) -> Self {
        let form = RecipeForm::for_props(&props);
        Self { props, form }
    }

    /// Takes new props from the parent. The draft is only reset when the
    /// props actually changed, so typing is never lost to a redraw.
    pub fn sync(&mut self, props: RecipeModalProps) {
        if props != self.props {
            self.form = RecipeForm::for_props(&props);
            self.props = props;
        }
    }

    fn title(&self) -> String {
        let name = self.props.recipe.as_ref().map(|r| r.name.as_str());
        match (self.props.mode, name) {
            (Some(Mode::Create), _) => "New Recipe".to_string(),
            (Some(Mode::Update), Some(name)) => format!("Edit {}", name),
            (Some(Mode::Delete), Some(name)) => format!("Delete {}?", name),
            (_, Some(name)) => name.to_string(),
            (_, None) => String::new(),
        }
    }

    fn form_view(&self) -> Element<'_, ScreenMessage<Self>> {
        let edit = |field: Field| {
            move |value: String| ScreenMessage::ScreenMessage(RecipeModalMessage::Edit(field, value))
        };
        column![
            text("Name"),
            text_input("Recipe name", &self.form.name).on_input(edit(Field::Name)),
            text("Description"),
            text_input("What is it?", &self.form.description).on_input(edit(Field::Description)),
            text("Ingredients (comma separated)"),
            text_input("tomato, salt, water", &self.form.ingredients)
                .on_input(edit(Field::Ingredients))
                .on_submit(ScreenMessage::ScreenMessage(RecipeModalMessage::Submit)),
        ]
        .spacing(6)
        .into()
    }

    fn read_view(&self) -> Element<'_, ScreenMessage<Self>> {
        let Some(recipe) = &self.props.recipe else {
            return column![].into();
        };
        let ingredients = Column::with_children(
            recipe
                .ingredient_list()
                .map(|item| text(format!("- {}", item)).into()),
        )
        .spacing(2);
        column![text(recipe.description.as_str()), text("Ingredients").size(18), ingredients]
            .spacing(8)
            .into()
    }

    fn controls(&self) -> Element<'_, ScreenMessage<Self>> {
        let send = |message: RecipeModalMessage| ScreenMessage::ScreenMessage(message);
        let controls = match self.props.mode {
            Some(Mode::Read) => row![
                button("Edit").on_press(send(RecipeModalMessage::SwitchMode(Mode::Update))),
                button("Delete").on_press(send(RecipeModalMessage::SwitchMode(Mode::Delete))),
                button("Close").on_press(send(RecipeModalMessage::Cancel)),
            ],
            Some(Mode::Delete) => row![
                button("Delete").on_press(send(RecipeModalMessage::Submit)),
                button("Cancel").on_press(send(RecipeModalMessage::Cancel)),
            ],
            _ => row![
                button("Save").on_press(send(RecipeModalMessage::Submit)),
                button("Cancel").on_press(send(RecipeModalMessage::Cancel)),
            ],
        };
        controls.spacing(10).into()
    }
}

impl Screen for RecipeModal {
    type Message = RecipeModalMessage;
    type ParentMessage = ModalRequest;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let body = match self.props.mode {
            Some(Mode::Create) | Some(Mode::Update) => self.form_view(),
            Some(Mode::Read) => self.read_view(),
            Some(Mode::Delete) => text("This recipe will be removed from the list.").into(),
            None => column![].into(),
        };
        container(
            column![text(self.title()).size(24), body, self.controls()].spacing(16),
        )
        .style(bordered_box)
        .padding(20)
        .width(Length::Fixed(480.0))
        .into()
    }

    fn update(&mut self, message: Self::Message) -> Task<ScreenMessage<Self>> {
        let request = match message {
            RecipeModalMessage::Edit(field, value) => {
                self.form.set(field, value);
                None
            }
            RecipeModalMessage::Submit => self.form.submit(&self.props),
            RecipeModalMessage::Cancel => Some(RecipeForm::cancel(&self.props)),
            RecipeModalMessage::SwitchMode(mode) => Some(ModalRequest::SwitchMode(mode)),
        };
        match request {
            Some(request) => Task::done(ScreenMessage::ParentMessage(request)),
            None => Task::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Recipe, RecipeList};

    #[test]
    fn sync_keeps_draft_for_unchanged_props() -> anyhow::Result<()> {
        let mut list = RecipeList::new();
        list.show_modal(None, Mode::Create)?;
        let mut modal = RecipeModal::new(list.modal_props());
        let _ = modal.update(RecipeModalMessage::Edit(Field::Name, "Stew".to_string()));

        modal.sync(list.modal_props());
        assert_eq!(modal.form.name, "Stew");

        list.create_recipe(modal.form.to_recipe());
        modal.sync(list.modal_props());
        assert_eq!(modal.props.mode, Some(Mode::Read));
        assert_eq!(modal.props.recipe, Some(Recipe::new("Stew", "", "")));
        assert_eq!(modal.form, RecipeForm::default());
        Ok(())
    }

    #[test]
    fn titles_follow_mode() -> anyhow::Result<()> {
        let mut list = RecipeList::new();
        list.show_modal(Some(0), Mode::Delete)?;
        assert_eq!(RecipeModal::new(list.modal_props()).title(), "Delete Sample Recipe?");
        list.switch_modal(Mode::Update)?;
        assert_eq!(RecipeModal::new(list.modal_props()).title(), "Edit Sample Recipe");
        Ok(())
    }
}
