use iced::{
    Element, Length,
    widget::{column, container, text},
};
use iced_widget::container::bordered_box;

use crate::core::RecipeRow;

/// One read-only recipe summary.
pub fn recipe<'a, Message: 'a>(row: RecipeRow) -> Element<'a, Message> {
    let ingredients = match row.ingredient_count {
        1 => "1 ingredient".to_string(),
        count => format!("{} ingredients", count),
    };
    container(
        column![
            text(row.name).size(20),
            text(row.description),
            text(ingredients).size(12),
        ]
        .spacing(4),
    )
    .style(bordered_box)
    .padding(10)
    .width(Length::Fill)
    .into()
}
