//! Tests for the row and modal view models the window is drawn from.

mod common;

use common::*;

fn assert_props_mirror_state(list: &RecipeList) {
    let props = list.modal_props();
    let modal = list.recipe_modal();
    assert_eq!(props.is_hidden, modal.is_hidden());
    assert_eq!(props.mode, modal.mode());
    assert_eq!(props.recipe.as_ref(), modal.selected_recipe());
    assert_eq!(props.recipe_id, modal.selected_id());
    assert_eq!(props.recipe_key, modal.selected_key());
}

#[test]
fn test_initial_props() {
    let list = RecipeList::new();
    let props: RecipeModalProps = list.modal_props();

    assert!(props.is_hidden);
    assert_eq!(props.recipe, None);
    assert_eq!(props.recipe_id, None);
    assert_eq!(props.mode, None);
}

#[test]
fn test_one_row_per_recipe_through_mutations() -> anyhow::Result<()> {
    let mut list = RecipeList::new();
    assert_eq!(list.rows().len(), 1);
    assert_props_mirror_state(&list);

    list.create_recipe(test_recipe());
    assert_eq!(list.rows().len(), list.recipes().len());
    assert_props_mirror_state(&list);

    list.create_recipe(test_recipe2());
    list.update_recipe(0, updated_recipe())?;
    assert_eq!(list.rows().len(), 3);
    assert_props_mirror_state(&list);

    list.delete_recipe(1)?;
    assert_eq!(list.rows().len(), list.recipes().len());
    assert_props_mirror_state(&list);
    Ok(())
}

#[test]
fn test_rows_follow_collection_order() {
    let list = three_recipe_list();
    let rows = list.rows();

    let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, vec!["Sample Recipe", "Test recipe", "Test recipe2"]);

    for (index, row) in rows.iter().enumerate() {
        assert_eq!(row.index, index);
        assert_eq!(list.recipes().id_at(index), Some(row.id));
        assert_eq!(row.ingredient_count, 3);
    }
}

#[test]
fn test_create_button_label() {
    assert_eq!(CREATE_BUTTON_LABEL, "Create Recipe");
}
