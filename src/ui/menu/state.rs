use std::collections::HashMap;

use crate::menu::{Dish, Menu};
use crate::ui::mvi::UiState;

/// Everything the menu screen renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuViewState {
    /// True until the single fetch attempt finishes, successfully or not.
    pub loading: bool,
    pub menu: Option<Menu>,
    /// Active category id.
    pub selection: Option<String>,
    /// Dish id to count. Entries are created on first touch and never removed.
    pub quantities: HashMap<String, u32>,
    /// Highlighted row within `visible_dishes()`.
    pub cursor: usize,
}

impl Default for MenuViewState {
    fn default() -> Self {
        Self {
            loading: true,
            menu: None,
            selection: None,
            quantities: HashMap::new(),
            cursor: 0,
        }
    }
}

impl UiState for MenuViewState {}

impl MenuViewState {
    /// Dishes of the selected category in upstream order, or nothing when
    /// the selection matches no category.
    pub fn visible_dishes(&self) -> &[Dish] {
        match (&self.menu, &self.selection) {
            (Some(menu), Some(selection)) => menu
                .category(selection)
                .map(|category| category.dishes.as_slice())
                .unwrap_or(&[]),
            _ => &[],
        }
    }

    /// Sum of every count in the quantity map, recomputed on each call.
    pub fn cart_total(&self) -> u64 {
        self.quantities.values().map(|&count| u64::from(count)).sum()
    }

    pub fn quantity(&self, dish_id: &str) -> u32 {
        self.quantities.get(dish_id).copied().unwrap_or(0)
    }

    pub fn focused_dish(&self) -> Option<&Dish> {
        self.visible_dishes().get(self.cursor)
    }

    pub fn selected_index(&self) -> Option<usize> {
        let menu = self.menu.as_ref()?;
        menu.category_index(self.selection.as_deref()?)
    }

    pub fn restaurant_name(&self) -> &str {
        self.menu
            .as_ref()
            .map(|menu| menu.restaurant_name.as_str())
            .unwrap_or("")
    }
}
