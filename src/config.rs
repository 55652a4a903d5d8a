use std::{fs, path::Path};

use anyhow::Context;
use clap::ValueEnum;
use tracing::info;

use crate::core::{Recipe, RecipeList};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Light,
    #[default]
    Dark,
}

/// Start-up settings for the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub theme: ThemeChoice,
    pub seed: Vec<Recipe>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            seed: vec![Recipe::sample()],
        }
    }
}

impl Settings {
    /// Settings with the seed recipes replaced by the contents of `seed_file`.
    pub fn with_seed_file<P: AsRef<Path>>(mut self, seed_file: P) -> anyhow::Result<Self> {
        self.seed = load_seed(seed_file)?;
        Ok(self)
    }

    pub fn recipe_list(&self) -> RecipeList {
        RecipeList::with_recipes(self.seed.iter().cloned())
    }
}

/// Reads a JSON array of recipes. The file is only ever read.
pub fn load_seed<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Recipe>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {:?}", path))?;
    let recipes: Vec<Recipe> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse seed file {:?}", path))?;
    info!(count = recipes.len(), ?path, "loaded seed recipes");
    Ok(recipes)
}
