use crate::domain::catalog::{Category, Item, Product};
use crate::domain::errors::DomainError;
use crate::domain::ports::{CategoryMapper, ItemMapper, ProductMapper, Store};

pub struct CatalogService<S> {
    store: S,
}

impl<S: Store> CatalogService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn get_category_list(&self) -> Result<Vec<Category>, DomainError> {
        self.store.read_only(|m| m.get_category_list())
    }

    pub fn get_category(&self, category_id: &str) -> Result<Option<Category>, DomainError> {
        self.store.read_only(|m| m.get_category(category_id))
    }

    pub fn get_product(&self, product_id: &str) -> Result<Option<Product>, DomainError> {
        self.store.read_only(|m| m.get_product(product_id))
    }

    pub fn get_product_list_by_category(
        &self,
        category_id: &str,
    ) -> Result<Vec<Product>, DomainError> {
        self.store
            .read_only(|m| m.get_product_list_by_category(category_id))
    }

    /// Matches for each whitespace-separated keyword, concatenated in keyword
    /// order. A product matching several keywords appears once per match.
    pub fn search_product_list(&self, keywords: &str) -> Result<Vec<Product>, DomainError> {
        self.store.read_only(|m| {
            let mut products = Vec::new();
            for keyword in keywords.split_whitespace() {
                products.extend(m.search_product_list(&keyword.to_lowercase())?);
            }
            Ok(products)
        })
    }

    pub fn get_item_list_by_product(&self, product_id: &str) -> Result<Vec<Item>, DomainError> {
        self.store.read_only(|m| m.get_item_list_by_product(product_id))
    }

    pub fn get_item(&self, item_id: &str) -> Result<Option<Item>, DomainError> {
        self.store.read_only(|m| m.get_item(item_id))
    }

    pub fn is_item_in_stock(&self, item_id: &str) -> Result<bool, DomainError> {
        let quantity = self
            .store
            .read_only(|m| m.get_inventory_quantity(item_id))?
            .ok_or_else(|| DomainError::ItemNotFound(item_id.to_string()))?;
        Ok(quantity > 0)
    }
}
