use crate::cart::CartLine;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CartIntent {
    /// Screen pushed with a snapshot of the list's cart lines.
    Load { lines: Vec<CartLine> },
    Increase { id: u64 },
    /// Floors at quantity 1.
    Decrease { id: u64 },
    Remove { id: u64 },
    MoveUp,
    MoveDown,
}

impl Intent for CartIntent {}
