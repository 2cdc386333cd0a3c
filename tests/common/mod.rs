//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_catalog;

use rust_decimal::Decimal;
use shopterm::catalog::Product;
use shopterm::config::Config;
use shopterm::ui::app::App;
use std::path::PathBuf;
use std::str::FromStr;
use tempfile::TempDir;

pub fn product(id: u64, title: &str, price: &str, category: &str) -> Product {
    Product {
        id,
        title: title.to_string(),
        price: Decimal::from_str(price).expect("valid decimal"),
        description: format!("{title} description"),
        image: format!("https://fakestoreapi.com/img/{id}.jpg"),
        category: category.to_string(),
    }
}

/// A small catalog covering every category.
pub fn sample_catalog() -> Vec<Product> {
    vec![
        product(1, "Fjallraven Backpack", "109.95", "men's clothing"),
        product(2, "Mens Casual Slim Fit", "15.99", "men's clothing"),
        product(3, "Gold Dragon Bracelet", "695", "jewelery"),
        product(4, "WD 2TB External Hard Drive", "64", "electronics"),
        product(5, "Rain Jacket Women Windbreaker", "39.99", "women's clothing"),
    ]
}

/// Same shape as the real catalog endpoint, including the ignored `rating`.
pub fn catalog_json() -> String {
    r#"[
  {"id":1,"title":"Fjallraven Backpack","price":109.95,"description":"Your perfect pack","category":"men's clothing","image":"https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg","rating":{"rate":3.9,"count":120}},
  {"id":9,"title":"WD 2TB Elements Portable External Hard Drive","price":64,"description":"USB 3.0","category":"electronics","image":"https://fakestoreapi.com/img/61IBBVJvSDL._AC_SY879_.jpg","rating":{"rate":3.3,"count":203}}
]"#
    .to_string()
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- App helpers --------------------------------------------------------------

pub fn make_app() -> App {
    App::new(&Config::default())
}

pub fn loaded_app() -> App {
    let mut app = make_app();
    app.on_catalog_loaded(sample_catalog());
    app
}
