/// Vegetarian marker of a dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DishKind {
    Veg,
    NonVeg,
}

impl DishKind {
    /// Upstream type code for vegetarian dishes.
    pub const VEG_CODE: i64 = 2;

    /// Maps the upstream type code. Anything other than 2 is non-vegetarian.
    pub fn from_code(code: i64) -> Self {
        if code == Self::VEG_CODE {
            DishKind::Veg
        } else {
            DishKind::NonVeg
        }
    }
}

/// Reference to a group of add-ons offered for a dish.
#[derive(Debug, Clone, PartialEq)]
pub struct AddonCategory {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dish {
    pub id: String,
    pub name: String,
    /// Image URI.
    pub image: String,
    pub currency: String,
    pub price: f64,
    pub description: String,
    pub calories: f64,
    pub available: bool,
    /// `None` when the dish has no add-ons; never `Some(vec![])`.
    pub addon_categories: Option<Vec<AddonCategory>>,
    pub kind: DishKind,
}

impl Dish {
    pub fn has_customizations(&self) -> bool {
        self.addon_categories.is_some()
    }

    /// "SAR 7.95"
    pub fn price_label(&self) -> String {
        format!("{} {}", self.currency, self.price)
    }

    /// "15 cal"
    pub fn calories_label(&self) -> String {
        format!("{} cal", self.calories)
    }
}

/// A named tab of dishes, in upstream order.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub dishes: Vec<Dish>,
}

/// One restaurant's menu. Built once per successful load and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    pub restaurant_name: String,
    pub categories: Vec<Category>,
}

impl Menu {
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn category_index(&self, id: &str) -> Option<usize> {
        self.categories.iter().position(|category| category.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(price: f64, calories: f64) -> Dish {
        Dish {
            id: "1".into(),
            name: "Soup".into(),
            image: String::new(),
            currency: "SAR".into(),
            price,
            description: String::new(),
            calories,
            available: true,
            addon_categories: None,
            kind: DishKind::Veg,
        }
    }

    #[test]
    fn type_code_two_is_veg() {
        assert_eq!(DishKind::from_code(2), DishKind::Veg);
        assert_eq!(DishKind::from_code(1), DishKind::NonVeg);
        assert_eq!(DishKind::from_code(0), DishKind::NonVeg);
        assert_eq!(DishKind::from_code(-7), DishKind::NonVeg);
    }

    #[test]
    fn labels_drop_trailing_zero_fraction() {
        let dish = dish(7.95, 15.0);
        assert_eq!(dish.price_label(), "SAR 7.95");
        assert_eq!(dish.calories_label(), "15 cal");
    }
}
