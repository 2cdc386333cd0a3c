use rust_decimal::Decimal;
use serde::Deserialize;

/// One product record as served by the catalog endpoint.
///
/// Fields the storefront does not use (e.g. `rating`) are ignored on decode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: Decimal,
    pub description: String,
    /// Image URI. Terminals can't show it, so it is displayed as text.
    pub image: String,
    pub category: String,
}

/// Category chips shown above the product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Category {
    #[default]
    All,
    MensClothing,
    WomensClothing,
    Electronics,
    Jewelery,
}

/// Chip order, left to right.
pub const CATEGORIES: [Category; 5] = [
    Category::All,
    Category::MensClothing,
    Category::WomensClothing,
    Category::Electronics,
    Category::Jewelery,
];

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::MensClothing => "Men's Clothing",
            Category::WomensClothing => "Women's Clothing",
            Category::Electronics => "Electronics",
            Category::Jewelery => "Jewelery",
        }
    }

    /// Category string used by the catalog API. `None` for the "all" chip.
    pub fn api_name(self) -> Option<&'static str> {
        match self {
            Category::All => None,
            Category::MensClothing => Some("men's clothing"),
            Category::WomensClothing => Some("women's clothing"),
            Category::Electronics => Some("electronics"),
            Category::Jewelery => Some("jewelery"),
        }
    }

    pub fn matches(self, product: &Product) -> bool {
        match self.api_name() {
            None => true,
            Some(name) => product.category == name,
        }
    }

    /// Next chip to the right, wrapping around.
    pub fn next(self) -> Self {
        let idx = self.position();
        CATEGORIES[(idx + 1) % CATEGORIES.len()]
    }

    /// Previous chip to the left, wrapping around.
    pub fn prev(self) -> Self {
        let idx = self.position();
        CATEGORIES[(idx + CATEGORIES.len() - 1) % CATEGORIES.len()]
    }

    pub fn position(self) -> usize {
        CATEGORIES.iter().position(|c| *c == self).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const SAMPLE: &str = r#"{
        "id": 1,
        "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
        "price": 109.95,
        "description": "Your perfect pack for everyday use",
        "category": "men's clothing",
        "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
        "rating": { "rate": 3.9, "count": 120 }
    }"#;

    #[test]
    fn decodes_catalog_record_and_ignores_rating() {
        let product: Product = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.price, Decimal::from_str("109.95").unwrap());
        assert_eq!(product.category, "men's clothing");
    }

    #[test]
    fn integer_price_decodes() {
        let json = r#"{"id":2,"title":"t","price":10,"description":"d","category":"electronics","image":"i"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, Decimal::from(10));
    }

    #[test]
    fn all_matches_everything() {
        let product: Product = serde_json::from_str(SAMPLE).unwrap();
        assert!(Category::All.matches(&product));
        assert!(Category::MensClothing.matches(&product));
        assert!(!Category::Electronics.matches(&product));
    }

    #[test]
    fn chip_cycling_wraps() {
        assert_eq!(Category::All.prev(), Category::Jewelery);
        assert_eq!(Category::Jewelery.next(), Category::All);
        assert_eq!(Category::MensClothing.next(), Category::WomensClothing);
    }
}
