//! Blocking alert box: title, message, dismissed with Enter or Esc.

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_alert;
pub use intent::AlertIntent;
pub use reducer::AlertReducer;
pub use state::AlertState;
