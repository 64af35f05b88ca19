use crate::menu::Menu;
use crate::ui::menu::{MenuIntent, MenuReducer, MenuViewState};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Menu screen state (MVI pattern).
    menu: MenuViewState,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            menu: MenuViewState::default(),
        }
    }

    pub fn state(&self) -> &MenuViewState {
        &self.menu
    }

    pub fn dispatch(&mut self, intent: MenuIntent) {
        dispatch_mvi!(self, menu, MenuReducer, intent);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Result of the one-shot fetch. `None` means the load failed.
    pub fn on_menu_loaded(&mut self, menu: Option<Menu>) {
        match menu {
            Some(menu) => {
                tracing::debug!(
                    categories = menu.categories.len(),
                    "Menu delivered to view"
                );
                self.dispatch(MenuIntent::Loaded { menu });
            }
            None => self.dispatch(MenuIntent::LoadFailed),
        }
    }

    /// Increments the highlighted dish. Unavailable dishes have no stepper,
    /// so the request is dropped for them.
    pub fn increment_focused(&mut self) {
        if let Some(dish_id) = self.focused_available_dish() {
            self.dispatch(MenuIntent::Increment { dish_id });
        }
    }

    /// Decrements the highlighted dish. The minus control is disabled at zero.
    pub fn decrement_focused(&mut self) {
        let Some(dish_id) = self.focused_available_dish() else {
            return;
        };
        if self.menu.quantity(&dish_id) == 0 {
            return;
        }
        self.dispatch(MenuIntent::Decrement { dish_id });
    }

    fn focused_available_dish(&self) -> Option<String> {
        self.menu
            .focused_dish()
            .filter(|dish| dish.available)
            .map(|dish| dish.id.clone())
    }
}
