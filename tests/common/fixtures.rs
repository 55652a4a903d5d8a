#![allow(dead_code)]

use std::io::Write;

use recipebox::{Recipe, RecipeList};
use tempfile::NamedTempFile;

pub fn test_recipe() -> Recipe {
    Recipe::new("Test recipe", "This is a test recipe", "pizza, spaghetti, drinks")
}

pub fn test_recipe2() -> Recipe {
    Recipe::new("Test recipe2", "This is a test recipe2", "pizzas, spaghettis, drinks")
}

pub fn updated_recipe() -> Recipe {
    Recipe::new(
        "Updated recipe",
        "This is an updated recipe",
        "updated pizza, updated spaghetti, updated drinks",
    )
}

/// The default list plus the two test recipes: indices 0, 1 and 2.
pub fn three_recipe_list() -> RecipeList {
    RecipeList::with_recipes([Recipe::sample(), test_recipe(), test_recipe2()])
}

/// Writes `contents` to a temporary `.json` file that lives as long as the handle.
pub fn write_seed_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("Failed to create temp seed file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write seed file");
    file
}
