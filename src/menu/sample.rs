//! Hardcoded sample menu

use crate::models::{Course, MenuItem};

fn sample_item(id: &str, dish_name: &str, description: &str, course: Course, price: &str) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        dish_name: dish_name.to_string(),
        description: description.to_string(),
        course,
        price: price.to_string(),
        image_url: None,
    }
}

/// The literal sample records, one per course
pub fn sample_menu() -> Vec<MenuItem> {
    vec![
        sample_item(
            "1",
            "Garlic Shrimp",
            "Juicy shrimp sautéed in garlic butter sauce.",
            Course::Starters,
            "12.50",
        ),
        sample_item(
            "2",
            "Grilled Ribeye Steak",
            "Tender steak grilled to perfection with herbs.",
            Course::Mains,
            "28.00",
        ),
        sample_item(
            "3",
            "Chocolate Lava Cake",
            "Warm chocolate cake with molten center.",
            Course::Dessert,
            "9.50",
        ),
    ]
}
