mod common;

use common::SAMPLE_RESPONSE;
use menucard::menu::wire::{normalize, parse_menu};
use menucard::menu::{DishKind, LoadError};

#[test]
fn sample_response_normalizes_in_order() {
    let menu = parse_menu(SAMPLE_RESPONSE.as_bytes()).expect("sample should parse");

    assert_eq!(menu.restaurant_name, "UNI Resto Cafe");
    let names: Vec<_> = menu.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Salads and Soup", "From The Barnyard"]);
    assert_eq!(menu.categories[0].id, "11");
    assert_eq!(menu.categories[1].id, "12");
}

#[test]
fn dish_fields_are_mapped() {
    let menu = parse_menu(SAMPLE_RESPONSE.as_bytes()).expect("sample should parse");
    let salad = &menu.categories[0].dishes[0];

    assert_eq!(salad.id, "100000001");
    assert_eq!(salad.name, "Spinach Salad");
    assert_eq!(salad.image, "https://example.com/spinach.jpg");
    assert_eq!(salad.currency, "SAR");
    assert_eq!(salad.price, 7.95);
    assert_eq!(salad.calories, 15.0);
    assert!(salad.available);
    assert_eq!(salad.kind, DishKind::Veg);
}

#[test]
fn empty_addon_list_means_no_customizations() {
    let menu = parse_menu(SAMPLE_RESPONSE.as_bytes()).expect("sample should parse");
    let salad = &menu.categories[0].dishes[0];
    assert!(salad.addon_categories.is_none());
    assert!(!salad.has_customizations());
}

#[test]
fn addon_categories_and_numeric_ids_are_kept() {
    let menu = parse_menu(SAMPLE_RESPONSE.as_bytes()).expect("sample should parse");
    let parm = &menu.categories[1].dishes[0];

    assert_eq!(parm.id, "100000015");
    assert!(!parm.available);
    assert_eq!(parm.kind, DishKind::NonVeg);
    let addons = parm.addon_categories.as_ref().expect("addons present");
    assert_eq!(addons.len(), 1);
    assert_eq!(addons[0].id, "104");
    assert_eq!(addons[0].name, "Sides");
}

#[test]
fn missing_addon_field_is_tolerated() {
    let body = r#"[{"restaurant_name": "R", "table_menu_list": [{
        "menu_category_id": "1", "menu_category": "C", "category_dishes": [{
            "dish_id": "d", "dish_name": "D", "dish_image": "", "dish_currency": "INR",
            "dish_price": 10, "dish_description": "", "dish_calories": 0,
            "dish_Availability": true, "dish_Type": 3
        }]}]}]"#;
    let menu = parse_menu(body.as_bytes()).expect("should parse");
    let dish = &menu.categories[0].dishes[0];
    assert!(dish.addon_categories.is_none());
    assert_eq!(dish.kind, DishKind::NonVeg);
    assert_eq!(dish.price_label(), "INR 10");
}

#[test]
fn only_first_restaurant_is_used() {
    let body = r#"[
        {"restaurant_name": "First", "table_menu_list": []},
        {"restaurant_name": "Second", "table_menu_list": []}
    ]"#;
    let menu = parse_menu(body.as_bytes()).expect("should parse");
    assert_eq!(menu.restaurant_name, "First");
    assert!(menu.categories.is_empty());
}

#[test]
fn empty_list_is_no_restaurant() {
    assert!(matches!(normalize(Vec::new()), Err(LoadError::NoRestaurant)));
    assert!(matches!(parse_menu(b"[]"), Err(LoadError::NoRestaurant)));
}

#[test]
fn missing_required_field_is_decode_error() {
    let body = r#"[{"table_menu_list": []}]"#;
    assert!(matches!(parse_menu(body.as_bytes()), Err(LoadError::Decode(_))));
}

#[test]
fn non_json_body_is_decode_error() {
    let err = parse_menu(b"<html>oops</html>").unwrap_err();
    assert!(matches!(err, LoadError::Decode(_)));
    assert!(err.to_string().starts_with("Malformed menu response"));
}
