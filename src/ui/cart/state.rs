use crate::cart::{Cart, CartLine};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartScreenState {
    pub cart: Cart,
    pub selected: usize,
}

impl UiState for CartScreenState {}

impl CartScreenState {
    pub fn selected_line(&self) -> Option<&CartLine> {
        self.cart.lines().get(self.selected)
    }
}
