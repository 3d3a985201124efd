use diesel::prelude::*;

use crate::domain::catalog::{Category, Item, Product};
use crate::domain::errors::DomainError;
use crate::domain::ports::{CategoryMapper, ItemMapper, ProductMapper};
use crate::schema::{category, inventory, item, product};

use super::models::{CategoryRow, ItemRow, ProductRow};
use super::pg_store::{expect_row, PgMappers};

impl CategoryMapper for PgMappers<'_> {
    fn get_category_list(&mut self) -> Result<Vec<Category>, DomainError> {
        let rows = category::table
            .select(CategoryRow::as_select())
            .order(category::category_id)
            .load(self.conn)?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    fn get_category(&mut self, category_id: &str) -> Result<Option<Category>, DomainError> {
        let row = category::table
            .find(category_id)
            .select(CategoryRow::as_select())
            .first(self.conn)
            .optional()?;
        Ok(row.map(Category::from))
    }
}

impl ProductMapper for PgMappers<'_> {
    fn get_product(&mut self, product_id: &str) -> Result<Option<Product>, DomainError> {
        let row = product::table
            .find(product_id)
            .select(ProductRow::as_select())
            .first(self.conn)
            .optional()?;
        Ok(row.map(Product::from))
    }

    fn get_product_list_by_category(
        &mut self,
        category_id: &str,
    ) -> Result<Vec<Product>, DomainError> {
        let rows = product::table
            .filter(product::category_id.eq(category_id))
            .select(ProductRow::as_select())
            .order(product::product_id)
            .load(self.conn)?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    fn search_product_list(&mut self, keyword: &str) -> Result<Vec<Product>, DomainError> {
        let pattern = format!("%{}%", escape_like(keyword));
        let rows = product::table
            .filter(product::name.ilike(pattern))
            .select(ProductRow::as_select())
            .order(product::product_id)
            .load(self.conn)?;
        Ok(rows.into_iter().map(Product::from).collect())
    }
}

/// Keywords are matched literally, so LIKE wildcards in them are escaped.
fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl ItemMapper for PgMappers<'_> {
    fn get_item_list_by_product(&mut self, product_id: &str) -> Result<Vec<Item>, DomainError> {
        let rows: Vec<(ItemRow, Option<i32>)> = item::table
            .left_join(inventory::table)
            .filter(item::product_id.eq(product_id))
            .select((ItemRow::as_select(), inventory::quantity.nullable()))
            .order(item::item_id)
            .load(self.conn)?;
        Ok(rows
            .into_iter()
            .map(|(row, quantity)| row.into_item(quantity))
            .collect())
    }

    fn get_item(&mut self, item_id: &str) -> Result<Option<Item>, DomainError> {
        let row: Option<(ItemRow, Option<i32>)> = item::table
            .left_join(inventory::table)
            .filter(item::item_id.eq(item_id))
            .select((ItemRow::as_select(), inventory::quantity.nullable()))
            .first(self.conn)
            .optional()?;
        Ok(row.map(|(row, quantity)| row.into_item(quantity)))
    }

    fn get_inventory_quantity(&mut self, item_id: &str) -> Result<Option<i32>, DomainError> {
        Ok(inventory::table
            .find(item_id)
            .select(inventory::quantity)
            .first::<i32>(self.conn)
            .optional()?)
    }

    fn update_inventory_quantity(
        &mut self,
        item_id: &str,
        increment: i32,
    ) -> Result<(), DomainError> {
        let affected = diesel::update(inventory::table.find(item_id))
            .set(inventory::quantity.eq(inventory::quantity + increment))
            .execute(self.conn)?;
        expect_row(affected, "inventory", item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::escape_like;
    use crate::domain::ports::{CategoryMapper, ItemMapper, ProductMapper, Store};
    use crate::infrastructure::pg_store::PgStore;
    use crate::infrastructure::test_support::{seed_catalog, setup_db};

    #[test]
    fn escape_like_escapes_wildcards() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("fish"), "fish");
    }

    #[tokio::test]
    async fn reads_categories_products_and_items() {
        let (_container, pool) = setup_db().await;
        seed_catalog(&pool);
        let store = PgStore::new(pool);

        let (categories, fish, items) = store
            .read_only(|m| {
                Ok((
                    m.get_category_list()?,
                    m.get_product_list_by_category("FISH")?,
                    m.get_item_list_by_product("FI-SW-01")?,
                ))
            })
            .expect("read failed");

        assert_eq!(categories.len(), 2);
        assert_eq!(fish.len(), 2);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].item_id, "EST-1");
        assert_eq!(items[0].quantity, 10);
    }

    #[tokio::test]
    async fn search_is_case_insensitive() {
        let (_container, pool) = setup_db().await;
        seed_catalog(&pool);
        let store = PgStore::new(pool);

        let found = store
            .read_only(|m| m.search_product_list("ANGEL"))
            .expect("search failed");

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].product_id, "FI-SW-01");
    }

    #[tokio::test]
    async fn inventory_increment_adds_to_stored_quantity() {
        let (_container, pool) = setup_db().await;
        seed_catalog(&pool);
        let store = PgStore::new(pool);

        store
            .transaction(|m| m.update_inventory_quantity("EST-1", 3))
            .expect("update failed");
        let quantity = store
            .read_only(|m| m.get_inventory_quantity("EST-1"))
            .expect("read failed");

        assert_eq!(quantity, Some(13));
    }

    #[tokio::test]
    async fn inventory_increment_on_unknown_item_fails() {
        let (_container, pool) = setup_db().await;
        let store = PgStore::new(pool);

        let err = store
            .transaction(|m| m.update_inventory_quantity("EST-404", 1))
            .unwrap_err();

        assert!(err.to_string().contains("EST-404"));
    }
}
