mod actions;
mod book;
mod form;
mod list;
mod modal;
mod recipe;

pub use actions::{ModalRequest, RecipeActions};
pub use book::RecipeBook;
pub use form::{Field, RecipeForm};
pub use list::{CREATE_BUTTON_LABEL, RecipeList, RecipeModalProps, RecipeRow};
pub use modal::{ModalState, Mode, Selection};
pub use recipe::{Recipe, RecipeId};
