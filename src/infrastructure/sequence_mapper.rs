use diesel::prelude::*;

use crate::domain::errors::DomainError;
use crate::domain::ports::SequenceMapper;
use crate::domain::sequence::Sequence;
use crate::schema::sequence;

use super::models::SequenceRow;
use super::pg_store::{expect_row, PgMappers};

impl SequenceMapper for PgMappers<'_> {
    fn get_sequence(&mut self, name: &str) -> Result<Option<Sequence>, DomainError> {
        // FOR UPDATE: a concurrent issuer blocks here until we commit and then
        // sees the incremented value.
        let row = sequence::table
            .find(name)
            .select(SequenceRow::as_select())
            .for_update()
            .get_result(self.conn)
            .optional()?;
        Ok(row.map(Sequence::from))
    }

    fn update_sequence(&mut self, seq: &Sequence) -> Result<(), DomainError> {
        let affected = diesel::update(sequence::table.find(&seq.name))
            .set(sequence::next_id.eq(seq.next_id))
            .execute(self.conn)?;
        expect_row(affected, "sequence", &seq.name)
    }
}
