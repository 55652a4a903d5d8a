mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from recipebox for tests
pub use recipebox::{
    CREATE_BUTTON_LABEL, ModalRequest, ModalState, Mode, Recipe, RecipeActions, RecipeError,
    RecipeId, RecipeList, RecipeModalProps, Settings, ThemeChoice,
};
