use crate::cart::Cart;
use crate::ui::mvi::Reducer;

use super::intent::CartIntent;
use super::state::CartScreenState;

pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartScreenState;
    type Intent = CartIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CartIntent::Load { lines } => {
                return CartScreenState {
                    cart: Cart::from_lines(lines),
                    selected: 0,
                };
            }
            CartIntent::Increase { id } => state.cart.increase(id),
            CartIntent::Decrease { id } => state.cart.decrease(id),
            CartIntent::Remove { id } => {
                state.cart.remove(id);
                let len = state.cart.len();
                if state.selected >= len {
                    state.selected = len.saturating_sub(1);
                }
            }
            CartIntent::MoveUp => {
                state.selected = if state.selected == 0 {
                    state.cart.len().saturating_sub(1)
                } else {
                    state.selected - 1
                };
            }
            CartIntent::MoveDown => {
                state.selected = if state.selected + 1 >= state.cart.len() {
                    0
                } else {
                    state.selected + 1
                };
            }
        }
        state
    }
}
