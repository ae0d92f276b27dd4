use indexmap::IndexMap;

use crate::error::{AppError, AppResult};
use crate::models::{Product, UpdateProduct};

/// The in-memory catalog. Keyed by `item`, iteration follows insertion order,
/// and removal keeps the relative order of the remaining records.
#[derive(Debug, Default)]
pub struct ProductDirectory {
    products: IndexMap<String, Product>,
}

impl ProductDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory from records, keeping their order. A later record
    /// with an already-taken `item` is dropped.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut directory = Self::new();
        for product in products {
            directory
                .products
                .entry(product.item.clone())
                .or_insert(product);
        }
        directory
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Full ordered snapshot.
    pub fn all(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    pub fn get(&self, item: &str) -> Option<Product> {
        self.products.get(item).cloned()
    }

    /// Append a new record. Fails if the `item` key is already taken.
    pub fn create(&mut self, product: Product) -> AppResult<Product> {
        if self.products.contains_key(&product.item) {
            return Err(AppError::Conflict(format!(
                "Product '{}' already exists",
                product.item
            )));
        }
        self.products.insert(product.item.clone(), product.clone());
        Ok(product)
    }

    /// Overwrite only the fields present in the payload; `item` stays as-is.
    /// Returns `None` when no record matches.
    pub fn update(&mut self, item: &str, payload: &UpdateProduct) -> Option<Product> {
        let product = self.products.get_mut(item)?;
        if let Some(price) = payload.price {
            product.price = price;
        }
        if let Some(quantity) = payload.quantity {
            product.quantity = quantity;
        }
        Some(product.clone())
    }

    /// Remove the record for `item`, shifting the rest down so order holds.
    pub fn remove(&mut self, item: &str) -> Option<Product> {
        self.products.shift_remove(item)
    }
}
