//! Upstream response schema and its normalization into [`Menu`].
//!
//! The endpoint returns a JSON list of restaurants. Only the first entry is
//! used; the rest are ignored.

use serde::{Deserialize, Deserializer};

use crate::menu::error::LoadError;
use crate::menu::types::{AddonCategory, Category, Dish, DishKind, Menu};

#[derive(Debug, Deserialize)]
pub struct Restaurant {
    pub restaurant_name: String,
    pub table_menu_list: Vec<MenuCategory>,
}

#[derive(Debug, Deserialize)]
pub struct MenuCategory {
    #[serde(deserialize_with = "opaque_id")]
    pub menu_category_id: String,
    pub menu_category: String,
    pub category_dishes: Vec<CategoryDish>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryDish {
    #[serde(deserialize_with = "opaque_id")]
    pub dish_id: String,
    pub dish_name: String,
    pub dish_image: String,
    pub dish_currency: String,
    pub dish_price: f64,
    pub dish_description: String,
    pub dish_calories: f64,
    #[serde(rename = "dish_Availability")]
    pub dish_availability: bool,
    #[serde(rename = "addonCat", default)]
    pub addon_cat: Option<Vec<AddonCat>>,
    #[serde(rename = "dish_Type")]
    pub dish_type: i64,
}

#[derive(Debug, Deserialize)]
pub struct AddonCat {
    #[serde(default, deserialize_with = "opaque_id")]
    pub addon_category_id: String,
    #[serde(default)]
    pub addon_category: String,
}

/// Ids show up both as JSON strings and as numbers.
fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Int(value) => value.to_string(),
        RawId::Float(value) => value.to_string(),
    })
}

/// Decodes a raw response body and normalizes it.
pub fn parse_menu(body: &[u8]) -> Result<Menu, LoadError> {
    let restaurants: Vec<Restaurant> = serde_json::from_slice(body)?;
    normalize(restaurants)
}

/// Picks the first restaurant and converts it to the domain model.
pub fn normalize(restaurants: Vec<Restaurant>) -> Result<Menu, LoadError> {
    restaurants
        .into_iter()
        .next()
        .map(Menu::from)
        .ok_or(LoadError::NoRestaurant)
}

impl From<Restaurant> for Menu {
    fn from(restaurant: Restaurant) -> Self {
        Menu {
            restaurant_name: restaurant.restaurant_name,
            categories: restaurant
                .table_menu_list
                .into_iter()
                .map(Category::from)
                .collect(),
        }
    }
}

impl From<MenuCategory> for Category {
    fn from(category: MenuCategory) -> Self {
        Category {
            id: category.menu_category_id,
            name: category.menu_category,
            dishes: category
                .category_dishes
                .into_iter()
                .map(Dish::from)
                .collect(),
        }
    }
}

impl From<CategoryDish> for Dish {
    fn from(dish: CategoryDish) -> Self {
        let addon_categories = dish
            .addon_cat
            .filter(|addons| !addons.is_empty())
            .map(|addons| {
                addons
                    .into_iter()
                    .map(|addon| AddonCategory {
                        id: addon.addon_category_id,
                        name: addon.addon_category,
                    })
                    .collect()
            });

        Dish {
            id: dish.dish_id,
            name: dish.dish_name,
            image: dish.dish_image,
            currency: dish.dish_currency,
            price: dish.dish_price,
            description: dish.dish_description,
            calories: dish.dish_calories,
            available: dish.dish_availability,
            addon_categories,
            kind: DishKind::from_code(dish.dish_type),
        }
    }
}
