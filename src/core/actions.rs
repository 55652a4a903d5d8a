use crate::{
    core::{
        list::RecipeList,
        modal::Mode,
        recipe::{Recipe, RecipeId},
    },
    error::RecipeError,
};

/// What the recipe modal is allowed to do to its parent.
pub trait RecipeActions {
    fn create(&mut self, recipe: Recipe) -> usize;
    fn update(&mut self, id: RecipeId, recipe: Recipe) -> Result<(), RecipeError>;
    fn delete(&mut self, id: RecipeId) -> Result<Recipe, RecipeError>;
    fn hide(&mut self);
    fn switch_mode(&mut self, mode: Mode) -> Result<(), RecipeError>;
}

impl RecipeActions for RecipeList {
    fn create(&mut self, recipe: Recipe) -> usize {
        self.create_recipe(recipe)
    }

    fn update(&mut self, id: RecipeId, recipe: Recipe) -> Result<(), RecipeError> {
        self.update_recipe_by_id(id, recipe)
    }

    fn delete(&mut self, id: RecipeId) -> Result<Recipe, RecipeError> {
        self.delete_recipe_by_id(id)
    }

    fn hide(&mut self) {
        self.hide_modal()
    }

    fn switch_mode(&mut self, mode: Mode) -> Result<(), RecipeError> {
        self.switch_modal(mode)
    }
}

/// A request raised by the modal on user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalRequest {
    Create(Recipe),
    Update(RecipeId, Recipe),
    Delete(RecipeId),
    Hide,
    SwitchMode(Mode),
}

impl ModalRequest {
    /// Routes the request to the matching capability.
    pub fn apply<A: RecipeActions + ?Sized>(self, actions: &mut A) -> Result<(), RecipeError> {
        match self {
            ModalRequest::Create(recipe) => {
                actions.create(recipe);
                Ok(())
            }
            ModalRequest::Update(id, recipe) => actions.update(id, recipe),
            ModalRequest::Delete(id) => actions.delete(id).map(|_| ()),
            ModalRequest::Hide => {
                actions.hide();
                Ok(())
            }
            ModalRequest::SwitchMode(mode) => actions.switch_mode(mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl RecipeActions for Recorder {
        fn create(&mut self, recipe: Recipe) -> usize {
            self.calls.push(format!("create {}", recipe.name));
            0
        }

        fn update(&mut self, id: RecipeId, recipe: Recipe) -> Result<(), RecipeError> {
            self.calls.push(format!("update {} {}", id, recipe.name));
            Ok(())
        }

        fn delete(&mut self, id: RecipeId) -> Result<Recipe, RecipeError> {
            self.calls.push(format!("delete {}", id));
            Err(RecipeError::UnknownRecipe(id))
        }

        fn hide(&mut self) {
            self.calls.push("hide".to_string());
        }

        fn switch_mode(&mut self, mode: Mode) -> Result<(), RecipeError> {
            self.calls.push(format!("switch {}", mode));
            Ok(())
        }
    }

    #[test]
    fn requests_reach_matching_capability() {
        let mut recorder = Recorder::default();
        let id = RecipeId(4);
        let requests = [
            ModalRequest::Create(Recipe::new("Pie", "", "")),
            ModalRequest::Update(id, Recipe::new("Tart", "", "")),
            ModalRequest::SwitchMode(Mode::Update),
            ModalRequest::Hide,
        ];
        for request in requests {
            assert!(request.apply(&mut recorder).is_ok());
        }
        assert_eq!(
            ModalRequest::Delete(id).apply(&mut recorder),
            Err(RecipeError::UnknownRecipe(id))
        );
        assert_eq!(
            recorder.calls,
            vec!["create Pie", "update #4 Tart", "switch update", "hide", "delete #4"]
        );
    }
}
