use crate::core::{
    actions::ModalRequest,
    list::RecipeModalProps,
    modal::Mode,
    recipe::{Recipe, RecipeId},
};

/// Which text input of the recipe form changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Description,
    Ingredients,
}

/// Draft values behind the modal's text inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeForm {
    pub name: String,
    pub description: String,
    pub ingredients: String,
}

impl RecipeForm {
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            ingredients: recipe.ingredients.clone(),
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Description => self.description = value,
            Field::Ingredients => self.ingredients = value,
        }
    }

    pub fn to_recipe(&self) -> Recipe {
        Recipe::new(
            self.name.clone(),
            self.description.clone(),
            self.ingredients.clone(),
        )
    }

    /// Draft for freshly received props: empty for create, the snapshot for
    /// update, untouched otherwise.
    pub fn for_props(props: &RecipeModalProps) -> Self {
        match (props.mode, &props.recipe) {
            (Some(Mode::Update), Some(recipe)) => Self::from_recipe(recipe),
            _ => Self::default(),
        }
    }

    /// The request the modal's confirm button sends in the current mode.
    pub fn submit(&self, props: &RecipeModalProps) -> Option<ModalRequest> {
        let key: Option<RecipeId> = props.recipe_key;
        match props.mode? {
            Mode::Create => Some(ModalRequest::Create(self.to_recipe())),
            Mode::Read => Some(ModalRequest::SwitchMode(Mode::Update)),
            Mode::Update => key.map(|id| ModalRequest::Update(id, self.to_recipe())),
            Mode::Delete => key.map(ModalRequest::Delete),
        }
    }

    /// The request the modal's cancel button sends in the current mode.
    pub fn cancel(props: &RecipeModalProps) -> ModalRequest {
        match props.mode {
            Some(Mode::Update) | Some(Mode::Delete) => ModalRequest::SwitchMode(Mode::Read),
            _ => ModalRequest::Hide,
        }
    }
}
