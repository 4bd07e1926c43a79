//! Rejection of lines longer than their record.

use alloc::string::ToString;

use super::{Decoder, Error, Field, Reader};

/// Decoder for the field ending a record, failing when the line continues
/// past that field.
///
/// Only the guard on the outermost record governs line length; a guard
/// nested elsewhere checks the line against its own field's end.
#[derive(Debug, Clone)]
pub struct Guard<T, R> {
    field: Field<T, R>,
}

impl<T, R> Guard<T, R> {
    pub fn new(field: Field<T, R>) -> Self {
        Self { field }
    }

    pub fn into_inner(self) -> Field<T, R> {
        self.field
    }
}

impl<T: Clone, R: Reader<T>> Decoder for Guard<T, R> {
    type Output = T;

    fn max_length(&self) -> usize {
        self.field.max_length()
    }

    fn decode(&self, line: &str) -> Result<T, Error> {
        let value = self.field.decode(line)?;

        if let Some(excess) = self.field.remainder(line) {
            log::debug!(
                "line continues for {} characters past the record end ({})",
                excess.chars().count(),
                self.field.end()
            );

            Err(Error::LineLongerThanExpected {
                line: line.to_string(),
                excess: excess.to_string(),
            })?;
        }

        Ok(value)
    }
}
