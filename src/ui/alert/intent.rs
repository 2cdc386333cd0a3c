use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum AlertIntent {
    Show { title: String, message: String },
    Dismiss,
}

impl Intent for AlertIntent {}
