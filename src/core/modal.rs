use std::{fmt, str::FromStr};

use crate::core::recipe::{Recipe, RecipeId};

/// What the recipe modal is doing with its recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Create,
    Read,
    Update,
    Delete,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Create => "create",
            Mode::Read => "read",
            Mode::Update => "update",
            Mode::Delete => "delete",
        }
    }

    /// Every mode except `Create` works on an existing recipe.
    pub fn needs_selection(self) -> bool {
        !matches!(self, Mode::Create)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "create" => Ok(Mode::Create),
            "read" => Ok(Mode::Read),
            "update" => Ok(Mode::Update),
            "delete" => Ok(Mode::Delete),
            _ => Err(anyhow::anyhow!("Invalid modal mode: {}", value)),
        }
    }
}

/// Snapshot of the recipe the modal was opened on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
    pub id: RecipeId,
    pub recipe: Recipe,
}

/// Visibility, mode and selection of the recipe modal.
///
/// Only [`RecipeList`](super::RecipeList) builds non-hidden states, which
/// keeps "create has no selection, everything else has one" true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalState {
    is_hidden: bool,
    mode: Option<Mode>,
    selection: Option<Selection>,
}

impl ModalState {
    /// The canonical closed state. Mode is left unset.
    pub fn hidden() -> Self {
        Self {
            is_hidden: true,
            mode: None,
            selection: None,
        }
    }

    pub(super) fn open(mode: Mode, selection: Option<Selection>) -> Self {
        debug_assert_eq!(mode.needs_selection(), selection.is_some());
        Self {
            is_hidden: false,
            mode: Some(mode),
            selection,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.is_hidden
    }

    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.selection.as_ref().map(|s| &s.recipe)
    }

    /// Positional index of the selected recipe when the modal was opened.
    pub fn selected_id(&self) -> Option<usize> {
        self.selection.as_ref().map(|s| s.index)
    }

    pub fn selected_key(&self) -> Option<RecipeId> {
        self.selection.as_ref().map(|s| s.id)
    }
}

impl Default for ModalState {
    fn default() -> Self {
        Self::hidden()
    }
}
