use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Stable key of a recipe inside one [`RecipeBook`](super::RecipeBook).
///
/// Ids come from a monotonically increasing counter and are never reused,
/// so a selection made before a delete cannot silently point at a
/// different recipe afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecipeId(pub(super) u64);

impl RecipeId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Comma-delimited ingredient text
    #[serde(default, deserialize_with = "ingredients_text")]
    pub ingredients: String,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        ingredients: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ingredients: ingredients.into(),
        }
    }

    /// The recipe every new list starts with.
    pub fn sample() -> Self {
        Self::new(
            "Sample Recipe",
            "This is a sample recipe",
            "tomato, salt, water",
        )
    }

    /// Ingredients split on commas, trimmed, blanks skipped.
    pub fn ingredient_list(&self) -> impl Iterator<Item = &str> {
        self.ingredients
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
    }

    pub fn ingredient_count(&self) -> usize {
        self.ingredient_list().count()
    }
}

// Seed files may list ingredients as an array; they are stored as text either way.
fn ingredients_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Ingredients {
        Text(String),
        List(Vec<String>),
    }

    Ok(match Ingredients::deserialize(deserializer)? {
        Ingredients::Text(text) => text,
        Ingredients::List(items) => items.join(", "),
    })
}
