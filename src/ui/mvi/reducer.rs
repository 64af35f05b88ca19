use super::intent::Intent;
use super::state::UiState;

/// Pure state transition: `(State, Intent) -> State`.
///
/// Reductions are total. Invalid requests (decrementing a zero count,
/// cycling tabs before a menu exists) leave the state as it was instead of
/// failing.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
