mod account_mapper;
mod catalog_mapper;
pub mod memory;
pub mod models;
mod order_mapper;
pub mod pg_store;
mod sequence_mapper;
#[cfg(test)]
pub(crate) mod test_support;

pub use memory::MemoryStore;
pub use pg_store::{PgMappers, PgStore};
