//! Product list screen: catalog, search bar, category chips and the list's cart.

mod intent;
mod reducer;
mod state;
pub mod view;

pub use intent::ProductListIntent;
pub use reducer::ProductListReducer;
pub use state::ProductListState;
