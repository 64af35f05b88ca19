use crate::ui::menu::intent::MenuIntent;
use crate::ui::menu::state::MenuViewState;
use crate::ui::mvi::Reducer;

pub struct MenuReducer;

impl Reducer for MenuReducer {
    type State = MenuViewState;
    type Intent = MenuIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MenuIntent::Loaded { menu } => {
                state.selection = menu.categories.first().map(|category| category.id.clone());
                state.menu = Some(menu);
                state.loading = false;
                state.cursor = 0;
                state
            }
            MenuIntent::LoadFailed => {
                state.loading = false;
                state
            }
            MenuIntent::SelectCategory { id } => {
                state.selection = Some(id);
                state.cursor = 0;
                state
            }
            MenuIntent::SelectCategoryAt { index } => {
                let id = state
                    .menu
                    .as_ref()
                    .and_then(|menu| menu.categories.get(index))
                    .map(|category| category.id.clone());
                match id {
                    Some(id) => Self::reduce(state, MenuIntent::SelectCategory { id }),
                    None => state,
                }
            }
            MenuIntent::NextCategory => shift_category(state, true),
            MenuIntent::PrevCategory => shift_category(state, false),
            MenuIntent::CursorUp => {
                let len = state.visible_dishes().len();
                if len > 0 {
                    state.cursor = if state.cursor == 0 || state.cursor >= len {
                        len - 1
                    } else {
                        state.cursor - 1
                    };
                }
                state
            }
            MenuIntent::CursorDown => {
                let len = state.visible_dishes().len();
                if len > 0 {
                    state.cursor = if state.cursor + 1 >= len {
                        0
                    } else {
                        state.cursor + 1
                    };
                }
                state
            }
            MenuIntent::Increment { dish_id } => {
                let count = state.quantities.entry(dish_id).or_insert(0);
                *count = count.saturating_add(1);
                state
            }
            MenuIntent::Decrement { dish_id } => {
                let count = state.quantities.entry(dish_id).or_insert(0);
                *count = count.saturating_sub(1);
                state
            }
        }
    }
}

/// Moves the selection one tab forward or back, wrapping at the ends.
/// With no current match, forward lands on the first tab and back on the last.
fn shift_category(state: MenuViewState, forward: bool) -> MenuViewState {
    let count = state
        .menu
        .as_ref()
        .map(|menu| menu.categories.len())
        .unwrap_or(0);
    if count == 0 {
        return state;
    }

    let index = match (state.selected_index(), forward) {
        (Some(current), true) => (current + 1) % count,
        (Some(current), false) => (current + count - 1) % count,
        (None, true) => 0,
        (None, false) => count - 1,
    };
    MenuReducer::reduce(state, MenuIntent::SelectCategoryAt { index })
}
