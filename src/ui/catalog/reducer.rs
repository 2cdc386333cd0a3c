use crate::cart::Cart;
use crate::catalog::{filter_by_category, search_by_title};
use crate::ui::mvi::Reducer;

use super::intent::ProductListIntent;
use super::state::ProductListState;

pub struct ProductListReducer;

impl Reducer for ProductListReducer {
    type State = ProductListState;
    type Intent = ProductListIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProductListIntent::Loaded { products } => {
                state.filtered = products.clone();
                state.products = products;
                state.selected = 0;
                state.loading = false;
            }
            ProductListIntent::FocusSearch => state.search_focused = true,
            ProductListIntent::BlurSearch => state.search_focused = false,
            ProductListIntent::InsertChar(ch) => state.query.push(ch),
            ProductListIntent::DeleteChar => {
                state.query.pop();
            }
            ProductListIntent::SubmitSearch => {
                // Ignores the selected category on purpose: each filter
                // starts from the full catalog.
                state.filtered = search_by_title(&state.products, &state.query);
                state.selected = 0;
                state.search_focused = false;
            }
            ProductListIntent::SelectCategory(category) => {
                state.category = category;
                state.filtered = filter_by_category(&state.products, category);
                state.selected = 0;
            }
            ProductListIntent::MoveUp => {
                state.selected = if state.selected == 0 {
                    state.filtered.len().saturating_sub(1)
                } else {
                    state.selected - 1
                };
            }
            ProductListIntent::MoveDown => {
                state.selected = if state.selected + 1 >= state.filtered.len() {
                    0
                } else {
                    state.selected + 1
                };
            }
            ProductListIntent::AddToCart { product } => {
                tracing::debug!(product_id = product.id, "Add to cart");
                state.cart.add(product);
            }
            ProductListIntent::ReplaceCart { lines } => state.cart = Cart::from_lines(lines),
        }
        state
    }
}
