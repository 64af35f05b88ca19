use crate::menu::Menu;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum MenuIntent {
    /// Fetch succeeded. Replaces any previous menu and selects the first tab.
    Loaded { menu: Menu },
    /// Fetch failed. Leaves the loading state with no menu.
    LoadFailed,
    /// Tab clicked. Not validated against the current menu.
    SelectCategory { id: String },
    /// Select the tab at `index` (0-based). Ignored when out of range.
    SelectCategoryAt { index: usize },
    NextCategory,
    PrevCategory,
    CursorUp,
    CursorDown,
    Increment { dish_id: String },
    /// Clamped at zero.
    Decrement { dish_id: String },
}

impl Intent for MenuIntent {}
