//! Cart screen. Works on a snapshot of the list's cart handed over on push.

mod intent;
mod reducer;
mod state;
pub mod view;

pub use intent::CartIntent;
pub use reducer::CartReducer;
pub use state::CartScreenState;
