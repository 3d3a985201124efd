use crate::domain::errors::DomainError;
use crate::domain::ports::SequenceMapper;
use crate::domain::sequence::Sequence;

/// Issues ids from named counter rows.
///
/// Two callers can only be told apart by the row lock taken in
/// [`SequenceMapper::get_sequence`], so the generator must run inside the
/// same transaction as the writes that use the id.
pub struct SequenceGenerator<'a, M: ?Sized> {
    mapper: &'a mut M,
}

impl<'a, M: SequenceMapper + ?Sized> SequenceGenerator<'a, M> {
    pub fn new(mapper: &'a mut M) -> Self {
        Self { mapper }
    }

    /// Returns the counter's current value and stores the value after it.
    pub fn next_id(&mut self, name: &str) -> Result<i32, DomainError> {
        let current = self
            .mapper
            .get_sequence(name)?
            .ok_or_else(|| DomainError::MissingSequence(name.to_string()))?;
        let candidate = current
            .next_id
            .checked_add(1)
            .ok_or_else(|| DomainError::SequenceExhausted(name.to_string()))?;

        self.mapper.update_sequence(&Sequence {
            name: name.to_string(),
            next_id: candidate,
        })?;

        log::debug!("Issued id {} from sequence '{}'", current.next_id, name);
        Ok(current.next_id)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct Counters {
        rows: HashMap<String, i32>,
        writes: usize,
    }

    impl SequenceMapper for Counters {
        fn get_sequence(&mut self, name: &str) -> Result<Option<Sequence>, DomainError> {
            Ok(self.rows.get(name).map(|&next_id| Sequence {
                name: name.to_string(),
                next_id,
            }))
        }

        fn update_sequence(&mut self, sequence: &Sequence) -> Result<(), DomainError> {
            self.writes += 1;
            self.rows.insert(sequence.name.clone(), sequence.next_id);
            Ok(())
        }
    }

    fn counters(name: &str, next_id: i32) -> Counters {
        Counters {
            rows: HashMap::from([(name.to_string(), next_id)]),
            writes: 0,
        }
    }

    #[test]
    fn consecutive_calls_return_consecutive_ids() {
        let mut mapper = counters("ordernum", 1000);
        let mut generator = SequenceGenerator::new(&mut mapper);

        let a = generator.next_id("ordernum").unwrap();
        let b = generator.next_id("ordernum").unwrap();

        assert_eq!(a, 1000);
        assert_eq!(b, a + 1);
        assert_eq!(mapper.rows["ordernum"], 1002);
    }

    #[test]
    fn counters_are_independent() {
        let mut mapper = counters("ordernum", 1000);
        mapper.rows.insert("invoicenum".to_string(), 7);
        let mut generator = SequenceGenerator::new(&mut mapper);

        assert_eq!(generator.next_id("invoicenum").unwrap(), 7);
        assert_eq!(generator.next_id("ordernum").unwrap(), 1000);
    }

    #[test]
    fn missing_counter_fails_without_writing() {
        let mut mapper = Counters::default();

        let err = SequenceGenerator::new(&mut mapper)
            .next_id("ordernum")
            .unwrap_err();

        assert!(matches!(err, DomainError::MissingSequence(name) if name == "ordernum"));
        assert_eq!(mapper.writes, 0);
    }

    #[test]
    fn exhausted_counter_fails_without_writing() {
        let mut mapper = counters("ordernum", i32::MAX);

        let err = SequenceGenerator::new(&mut mapper)
            .next_id("ordernum")
            .unwrap_err();

        assert!(matches!(err, DomainError::SequenceExhausted(_)));
        assert_eq!(mapper.writes, 0);
    }
}
