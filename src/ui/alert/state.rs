use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AlertState {
    #[default]
    Hidden,
    Visible { title: String, message: String },
}

impl UiState for AlertState {}

impl AlertState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}
