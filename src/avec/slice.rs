//! String-based line source.

use core::str::Lines;

use thiserror::Error;

use crate::sans::{self, Decoder};

/// An error decoding a line of a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to decode line {number}: {source}")]
pub struct Error {
    /// Line number, counting from one.
    pub number: usize,
    pub source: sans::Error,
}

/// Decode every line of `text`, yielding one result per line.
///
/// Lines are split as by [`str::lines`], so a trailing line ending does not
/// produce an empty record. This method is also re-exported as
/// `flatline::avec::decode_slice`.
pub fn decode<D: Decoder>(text: &str, decoder: D) -> Records<'_, D> {
    Records {
        lines: text.lines(),
        number: 0,
        decoder,
    }
}

/// Iterator over the records of a string.
#[derive(Debug, Clone)]
pub struct Records<'a, D> {
    lines: Lines<'a>,
    number: usize,
    decoder: D,
}

impl<D: Decoder> Iterator for Records<'_, D> {
    type Item = Result<D::Output, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.number += 1;

        Some(self.decoder.decode(line).map_err(|source| {
            log::debug!("line {} failed to decode: {source}", self.number);

            Error {
                number: self.number,
                source,
            }
        }))
    }
}
