use std::collections::HashMap;

use crate::{
    core::recipe::{Recipe, RecipeId},
    error::RecipeError,
};

/// Ordered recipe collection.
///
/// Recipes live in an arena keyed by [`RecipeId`]; `order` holds the ids in
/// display order, so a positional index is only ever a view onto `order`.
#[derive(Debug, Clone, Default)]
pub struct RecipeBook {
    entries: HashMap<RecipeId, Recipe>,
    order: Vec<RecipeId>,
    next_id: u64,
}

impl RecipeBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Recipe> {
        self.order.get(index).and_then(|id| self.entries.get(id))
    }

    pub fn get_by_id(&self, id: RecipeId) -> Option<&Recipe> {
        self.entries.get(&id)
    }

    pub fn id_at(&self, index: usize) -> Option<RecipeId> {
        self.order.get(index).copied()
    }

    pub fn index_of(&self, id: RecipeId) -> Option<usize> {
        self.order.iter().position(|candidate| *candidate == id)
    }

    /// Appends a recipe and returns its index and new id.
    pub fn push(&mut self, recipe: Recipe) -> (usize, RecipeId) {
        let id = RecipeId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, recipe);
        self.order.push(id);
        (self.order.len() - 1, id)
    }

    /// Replaces the recipe at `index`, keeping its id.
    pub fn replace(&mut self, index: usize, recipe: Recipe) -> Result<RecipeId, RecipeError> {
        let id = self.checked_id(index)?;
        self.entries.insert(id, recipe);
        Ok(id)
    }

    /// Removes the recipe at `index`; later recipes shift down by one.
    pub fn remove(&mut self, index: usize) -> Result<(RecipeId, Recipe), RecipeError> {
        let id = self.checked_id(index)?;
        self.order.remove(index);
        let recipe = self
            .entries
            .remove(&id)
            .ok_or(RecipeError::UnknownRecipe(id))?;
        Ok((id, recipe))
    }

    pub fn iter(&self) -> impl Iterator<Item = (RecipeId, &Recipe)> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.entries.get(id).map(|recipe| (*id, recipe)))
    }

    /// Recipes in display order, cloned.
    pub fn to_vec(&self) -> Vec<Recipe> {
        self.iter().map(|(_, recipe)| recipe.clone()).collect()
    }

    fn checked_id(&self, index: usize) -> Result<RecipeId, RecipeError> {
        self.id_at(index).ok_or(RecipeError::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }
}

impl FromIterator<Recipe> for RecipeBook {
    fn from_iter<I: IntoIterator<Item = Recipe>>(iter: I) -> Self {
        let mut book = Self::new();
        for recipe in iter {
            book.push(recipe);
        }
        book
    }
}
