use crate::ui::mvi::Reducer;

use super::intent::AlertIntent;
use super::state::AlertState;

pub struct AlertReducer;

impl Reducer for AlertReducer {
    type State = AlertState;
    type Intent = AlertIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // A new alert replaces whatever is showing.
            AlertIntent::Show { title, message } => AlertState::Visible { title, message },
            AlertIntent::Dismiss => AlertState::Hidden,
        }
    }
}
