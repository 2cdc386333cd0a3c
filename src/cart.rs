//! In-memory shopping cart.
//!
//! Lines are kept in insertion order. Adding a product never merges with an
//! existing line: the same product added twice occupies two lines. All
//! id-addressed operations apply to every line carrying that product id.

use rust_decimal::Decimal;
use crate::catalog::Product;

/// One product entry in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn id(&self) -> u64 {
        self.product.id
    }

    pub fn subtotal(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from a snapshot. A quantity of zero is read as one.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let lines = lines
            .into_iter()
            .map(|mut line| {
                line.quantity = line.quantity.max(1);
                line
            })
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of lines (not units). Drives the cart badge.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Append a new line at quantity 1.
    pub fn add(&mut self, product: Product) {
        self.lines.push(CartLine::new(product));
    }

    pub fn increase(&mut self, id: u64) {
        for line in self.lines.iter_mut().filter(|line| line.id() == id) {
            line.quantity = line.quantity.saturating_add(1);
        }
    }

    /// Decrement quantity; never goes below 1.
    pub fn decrease(&mut self, id: u64) {
        for line in self
            .lines
            .iter_mut()
            .filter(|line| line.id() == id && line.quantity > 1)
        {
            line.quantity -= 1;
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.lines.retain(|line| line.id() != id);
    }

    pub fn total_price(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }
}
