use tracing::debug;

use crate::{
    core::{
        book::RecipeBook,
        modal::{ModalState, Mode, Selection},
        recipe::{Recipe, RecipeId},
    },
    error::RecipeError,
};

/// Label of the single control that opens the modal in create mode.
pub const CREATE_BUTTON_LABEL: &str = "Create Recipe";

/// One rendered row of the recipe list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRow {
    pub index: usize,
    pub id: RecipeId,
    pub name: String,
    pub description: String,
    pub ingredients: String,
    pub ingredient_count: usize,
}

/// Everything the recipe modal is given by its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeModalProps {
    pub is_hidden: bool,
    pub recipe: Option<Recipe>,
    pub recipe_id: Option<usize>,
    pub recipe_key: Option<RecipeId>,
    pub mode: Option<Mode>,
}

/// Owner of the recipe collection and the modal state.
///
/// Every mutation goes through the methods below and is fully applied
/// before the method returns.
#[derive(Debug, Clone)]
pub struct RecipeList {
    recipes: RecipeBook,
    recipe_modal: ModalState,
}

impl RecipeList {
    /// A list holding only [`Recipe::sample`].
    pub fn new() -> Self {
        Self::with_recipes([Recipe::sample()])
    }

    pub fn with_recipes(recipes: impl IntoIterator<Item = Recipe>) -> Self {
        Self {
            recipes: recipes.into_iter().collect(),
            recipe_modal: ModalState::hidden(),
        }
    }

    pub fn recipes(&self) -> &RecipeBook {
        &self.recipes
    }

    pub fn recipe_modal(&self) -> &ModalState {
        &self.recipe_modal
    }

    pub fn index_of(&self, id: RecipeId) -> Option<usize> {
        self.recipes.index_of(id)
    }

    /// Appends `recipe` and opens it in read mode. Returns its index.
    pub fn create_recipe(&mut self, recipe: Recipe) -> usize {
        let (index, id) = self.recipes.push(recipe.clone());
        debug!(index, %id, name = %recipe.name, "created recipe");
        self.recipe_modal = ModalState::open(Mode::Read, Some(Selection { index, id, recipe }));
        index
    }

    /// Replaces the recipe at `index` and reopens it in read mode.
    pub fn update_recipe(&mut self, index: usize, recipe: Recipe) -> Result<(), RecipeError> {
        let id = self.recipes.replace(index, recipe.clone())?;
        debug!(index, %id, name = %recipe.name, "updated recipe");
        self.recipe_modal = ModalState::open(Mode::Read, Some(Selection { index, id, recipe }));
        Ok(())
    }

    /// Removes the recipe at `index` and closes the modal.
    pub fn delete_recipe(&mut self, index: usize) -> Result<Recipe, RecipeError> {
        let (id, recipe) = self.recipes.remove(index)?;
        debug!(index, %id, name = %recipe.name, "deleted recipe");
        self.hide_modal();
        Ok(recipe)
    }

    pub fn update_recipe_by_id(&mut self, id: RecipeId, recipe: Recipe) -> Result<(), RecipeError> {
        let index = self.index_of(id).ok_or(RecipeError::UnknownRecipe(id))?;
        self.update_recipe(index, recipe)
    }

    pub fn delete_recipe_by_id(&mut self, id: RecipeId) -> Result<Recipe, RecipeError> {
        let index = self.index_of(id).ok_or(RecipeError::UnknownRecipe(id))?;
        self.delete_recipe(index)
    }

    /// Opens the modal in `mode`, snapshotting the recipe at `index`.
    ///
    /// Create mode takes no index; every other mode requires one.
    pub fn show_modal(&mut self, index: Option<usize>, mode: Mode) -> Result<(), RecipeError> {
        let selection = match (index, mode.needs_selection()) {
            (None, false) => None,
            (Some(index), false) => return Err(RecipeError::UnexpectedSelection { index }),
            (None, true) => return Err(RecipeError::MissingSelection(mode)),
            (Some(index), true) => Some(self.snapshot(index)?),
        };
        debug!(?index, %mode, "showing recipe modal");
        self.recipe_modal = ModalState::open(mode, selection);
        Ok(())
    }

    pub fn hide_modal(&mut self) {
        debug!("hiding recipe modal");
        self.recipe_modal = ModalState::hidden();
    }

    /// Changes the mode of the open modal, keeping its recipe.
    ///
    /// The recipe is looked up again by id, so the snapshot follows it if
    /// other recipes were removed in the meantime.
    pub fn switch_modal(&mut self, mode: Mode) -> Result<(), RecipeError> {
        if self.recipe_modal.is_hidden() {
            return Err(RecipeError::ModalHidden);
        }
        if !mode.needs_selection() {
            return self.show_modal(None, mode);
        }
        let id = self
            .recipe_modal
            .selected_key()
            .ok_or(RecipeError::MissingSelection(mode))?;
        let index = self.index_of(id).ok_or(RecipeError::UnknownRecipe(id))?;
        self.show_modal(Some(index), mode)
    }

    /// Rows in display order, one per recipe.
    pub fn rows(&self) -> Vec<RecipeRow> {
        self.recipes
            .iter()
            .enumerate()
            .map(|(index, (id, recipe))| RecipeRow {
                index,
                id,
                name: recipe.name.clone(),
                description: recipe.description.clone(),
                ingredients: recipe.ingredients.clone(),
                ingredient_count: recipe.ingredient_count(),
            })
            .collect()
    }

    pub fn modal_props(&self) -> RecipeModalProps {
        let modal = &self.recipe_modal;
        RecipeModalProps {
            is_hidden: modal.is_hidden(),
            recipe: modal.selected_recipe().cloned(),
            recipe_id: modal.selected_id(),
            recipe_key: modal.selected_key(),
            mode: modal.mode(),
        }
    }

    fn snapshot(&self, index: usize) -> Result<Selection, RecipeError> {
        let out_of_range = RecipeError::IndexOutOfRange {
            index,
            len: self.recipes.len(),
        };
        let id = self.recipes.id_at(index).ok_or(out_of_range.clone())?;
        let recipe = self.recipes.get(index).cloned().ok_or(out_of_range)?;
        Ok(Selection { index, id, recipe })
    }
}

impl Default for RecipeList {
    fn default() -> Self {
        Self::new()
    }
}
