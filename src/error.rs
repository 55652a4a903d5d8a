use thiserror::Error;

use crate::core::{Mode, RecipeId};

/// Errors raised by the recipe list when a request does not match its state.
///
/// A failed operation never applies part of its change.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecipeError {
    /// Positional index past the end of the collection
    #[error("recipe index {index} is out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Stable id that no longer (or never did) name a recipe
    #[error("no recipe with id {0}")]
    UnknownRecipe(RecipeId),

    /// Read/update/delete requested without a recipe to act on
    #[error("{0} mode requires a selected recipe")]
    MissingSelection(Mode),

    /// Create mode opened with a recipe selected
    #[error("create mode cannot select recipe {index}")]
    UnexpectedSelection { index: usize },

    /// Mode switch requested while the modal is closed
    #[error("the recipe modal is hidden")]
    ModalHidden,
}
