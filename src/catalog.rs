//! Sellable product catalog.
//!
//! Products are immutable records sourced from a static list; the cart engine
//! only reads them. `display_key` is the translation key used to resolve the
//! localized item name on receipts.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub display_key: String,
    pub unit_price: f64,
    pub category: String,
    pub description: String,
}

impl Product {
    fn new(id: &str, name: &str, display_key: &str, unit_price: f64, category: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            display_key: display_key.to_string(),
            unit_price,
            category: category.to_string(),
            description: description.to_string(),
        }
    }
}

/// The static demo catalog shipped with the terminal.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new("1", "Coffee", "products.coffee", 4.50, "beverages", "Fresh brewed coffee"),
        Product::new("2", "Tea", "products.tea", 3.00, "beverages", "Premium tea selection"),
        Product::new(
            "3",
            "Sandwich",
            "products.sandwich",
            8.50,
            "food",
            "Fresh sandwich with premium ingredients",
        ),
        Product::new("4", "Pastry", "products.pastry", 5.00, "food", "Freshly baked pastry"),
        Product::new(
            "5",
            "Fresh Juice",
            "products.juice",
            6.00,
            "beverages",
            "Freshly squeezed fruit juice",
        ),
        Product::new("6", "Water", "products.water", 2.00, "beverages", "Premium bottled water"),
        Product::new("7", "Cake", "products.cake", 12.00, "food", "Delicious homemade cake"),
        Product::new("8", "Cookie", "products.cookie", 3.50, "food", "Fresh baked cookies"),
    ]
}

/// Look up a product by id.
pub fn find_product<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.id == id)
}
