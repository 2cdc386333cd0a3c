use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum AuthIntent {
    /// Type into the focused field.
    Insert(char),
    Backspace,
    FocusNext,
    FocusPrev,
}

impl Intent for AuthIntent {}
