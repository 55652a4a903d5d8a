//! Tests for start-up settings and seed files.

mod common;

use common::*;

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.theme, ThemeChoice::Dark);

    let list = settings.recipe_list();
    assert_eq!(list.recipes().to_vec(), vec![Recipe::sample()]);
    assert!(list.recipe_modal().is_hidden());
}

#[test]
fn test_seed_file_replaces_sample() -> anyhow::Result<()> {
    let seed = write_seed_file(
        r#"[
            {"name": "Test recipe", "description": "This is a test recipe", "ingredients": "pizza, spaghetti, drinks"},
            {"name": "Test recipe2", "description": "This is a test recipe2", "ingredients": ["pizzas", "spaghettis", "drinks"]}
        ]"#,
    );

    let settings = Settings::default().with_seed_file(seed.path())?;
    let list = settings.recipe_list();

    assert_eq!(list.recipes().to_vec(), vec![test_recipe(), test_recipe2()]);
    Ok(())
}

#[test]
fn test_empty_seed_file() -> anyhow::Result<()> {
    let seed = write_seed_file("[]");
    let list = Settings::default().with_seed_file(seed.path())?.recipe_list();
    assert!(list.recipes().is_empty());
    assert!(list.rows().is_empty());
    Ok(())
}

#[test]
fn test_bad_seed_files_are_errors() {
    let seed = write_seed_file(r#"{"name": "not a list"}"#);
    let err = Settings::default()
        .with_seed_file(seed.path())
        .expect_err("object is not a recipe list");
    assert!(err.to_string().contains("Failed to parse seed file"));

    let missing = Settings::default().with_seed_file("/definitely/not/here.json");
    assert!(missing.is_err());
}
