pub mod config;
pub mod core;
pub mod error;

pub use config::{Settings, ThemeChoice};
pub use crate::core::{
    CREATE_BUTTON_LABEL, ModalRequest, ModalState, Mode, Recipe, RecipeActions, RecipeBook,
    RecipeId, RecipeList, RecipeModalProps, RecipeRow,
};
pub use error::RecipeError;

#[cfg(feature = "gui")]
pub mod gui;
