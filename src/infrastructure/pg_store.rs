use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::ports::{Mappers, Store};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::Storage(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Storage(e.to_string())
    }
}

/// Fails unless an `UPDATE` touched a row.
pub(crate) fn expect_row(affected: usize, table: &str, key: &str) -> Result<(), DomainError> {
    if affected == 0 {
        return Err(DomainError::Storage(format!("no row in {table} for {key}")));
    }
    Ok(())
}

// ── Store ─────────────────────────────────────────────────────────────────────

/// PostgreSQL-backed store. Each transaction checks a connection out of the
/// pool and holds it until commit or rollback.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl Store for PgStore {
    fn transaction<T, F>(&self, f: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut dyn Mappers) -> Result<T, DomainError>,
    {
        let mut pooled = self.pool.get()?;
        let conn: &mut PgConnection = &mut pooled;
        conn.transaction::<_, DomainError, _>(|conn| f(&mut PgMappers::new(conn)))
    }

    fn read_only<T, F>(&self, f: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut dyn Mappers) -> Result<T, DomainError>,
    {
        let mut pooled = self.pool.get()?;
        let conn: &mut PgConnection = &mut pooled;
        conn.build_transaction()
            .read_only()
            .repeatable_read()
            .run(|conn| f(&mut PgMappers::new(conn)))
    }
}

/// The mapper set bound to one open connection. Mapper impls live next to
/// the tables they touch.
pub struct PgMappers<'c> {
    pub(crate) conn: &'c mut PgConnection,
}

impl<'c> PgMappers<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }
}
