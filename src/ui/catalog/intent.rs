use crate::cart::CartLine;
use crate::catalog::{Category, Product};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ProductListIntent {
    /// Catalog load finished. An empty list also ends the loading state.
    Loaded { products: Vec<Product> },
    FocusSearch,
    BlurSearch,
    InsertChar(char),
    DeleteChar,
    /// Apply the typed query against the full catalog.
    SubmitSearch,
    SelectCategory(Category),
    MoveUp,
    MoveDown,
    AddToCart { product: Product },
    /// Snapshot pushed back from the cart screen. Overwrites the list's cart.
    ReplaceCart { lines: Vec<CartLine> },
}

impl Intent for ProductListIntent {}
