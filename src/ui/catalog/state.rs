use crate::cart::Cart;
use crate::catalog::{Category, Product};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq)]
pub struct ProductListState {
    /// Full catalog as fetched.
    pub products: Vec<Product>,
    /// What the list currently shows.
    pub filtered: Vec<Product>,
    pub query: String,
    pub search_focused: bool,
    pub category: Category,
    pub selected: usize,
    pub loading: bool,
    pub cart: Cart,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            filtered: Vec::new(),
            query: String::new(),
            search_focused: false,
            category: Category::All,
            selected: 0,
            loading: true,
            cart: Cart::new(),
        }
    }
}

impl UiState for ProductListState {}

impl ProductListState {
    pub fn selected_product(&self) -> Option<&Product> {
        self.filtered.get(self.selected)
    }

    /// Number shown on the cart badge.
    pub fn cart_badge(&self) -> usize {
        self.cart.len()
    }
}
