use crate::ui::mvi::Reducer;

use super::intent::AuthIntent;
use super::state::AuthFormState;

pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthFormState;
    type Intent = AuthIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        let field_count = state.kind.fields().len();
        match intent {
            AuthIntent::Insert(ch) => {
                let field = state.focused_field();
                state.value_mut(field).push(ch);
            }
            AuthIntent::Backspace => {
                let field = state.focused_field();
                state.value_mut(field).pop();
            }
            AuthIntent::FocusNext => {
                state.focused = (state.focused + 1) % field_count;
            }
            AuthIntent::FocusPrev => {
                state.focused = (state.focused + field_count - 1) % field_count;
            }
        }
        state
    }
}
