use crate::models::Product;

/// The five records every fresh process starts with, in insertion order.
static SEED_PRODUCTS: &[(&str, f64, i64)] = &[
    ("Surf-Excel", 200.0, 5),
    ("TATA Salt", 100.0, 10),
    ("Pears Soap", 30.0, 15),
    ("Nivea Body Lotion", 120.0, 8),
    ("Loreal Paris Shampoo", 180.0, 3),
];

pub fn initial_products() -> Vec<Product> {
    SEED_PRODUCTS
        .iter()
        .map(|&(item, price, quantity)| Product {
            item: item.to_string(),
            price,
            quantity,
        })
        .collect()
}
