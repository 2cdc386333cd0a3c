//! Login and Register tabs.

mod intent;
mod reducer;
mod state;
pub mod view;

pub use intent::AuthIntent;
pub use reducer::AuthReducer;
pub use state::{AuthField, AuthFormState, FormKind};
