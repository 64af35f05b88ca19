//! Shared test fixtures and mock infrastructure.

#![allow(dead_code)]

pub mod mock_menu;

use menucard::menu::{Category, Dish, DishKind, Menu};

/// One restaurant, two categories with one dish each. The second dish is
/// unavailable and has add-ons; ids mix string and numeric encodings.
pub const SAMPLE_RESPONSE: &str = r#"[
  {
    "restaurant_id": "5",
    "restaurant_name": "UNI Resto Cafe",
    "table_menu_list": [
      {
        "menu_category": "Salads and Soup",
        "menu_category_id": "11",
        "category_dishes": [
          {
            "dish_id": "100000001",
            "dish_name": "Spinach Salad",
            "dish_price": 7.95,
            "dish_image": "https://example.com/spinach.jpg",
            "dish_currency": "SAR",
            "dish_calories": 15.0,
            "dish_description": "Fresh spinach, mushrooms, and hard-boiled egg",
            "dish_Availability": true,
            "dish_Type": 2,
            "addonCat": []
          }
        ]
      },
      {
        "menu_category": "From The Barnyard",
        "menu_category_id": 12,
        "category_dishes": [
          {
            "dish_id": 100000015,
            "dish_name": "Chicken Parmesan",
            "dish_price": 21.0,
            "dish_image": "https://example.com/parm.jpg",
            "dish_currency": "SAR",
            "dish_calories": 520.5,
            "dish_description": "Breaded chicken with marinara",
            "dish_Availability": false,
            "dish_Type": 1,
            "addonCat": [
              {
                "addon_category": "Sides",
                "addon_category_id": "104",
                "addon_selection": 0,
                "nexturl": "",
                "addons": []
              }
            ]
          }
        ]
      }
    ]
  }
]"#;

pub fn dish(id: &str, name: &str, available: bool, kind: DishKind) -> Dish {
    Dish {
        id: id.to_string(),
        name: name.to_string(),
        image: format!("https://example.com/{id}.jpg"),
        currency: "SAR".to_string(),
        price: 9.5,
        description: format!("{name} description"),
        calories: 120.0,
        available,
        addon_categories: None,
        kind,
    }
}

/// Three categories: starters (two dishes), mains (one), desserts (none).
pub fn sample_menu() -> Menu {
    Menu {
        restaurant_name: "Test Kitchen".to_string(),
        categories: vec![
            Category {
                id: "starters".to_string(),
                name: "Starters".to_string(),
                dishes: vec![
                    dish("s1", "Tomato Soup", true, DishKind::Veg),
                    dish("s2", "Wings", false, DishKind::NonVeg),
                ],
            },
            Category {
                id: "mains".to_string(),
                name: "Mains".to_string(),
                dishes: vec![dish("m1", "Steak", true, DishKind::NonVeg)],
            },
            Category {
                id: "desserts".to_string(),
                name: "Desserts".to_string(),
                dishes: vec![],
            },
        ],
    }
}
