//! Reader-based line source.
//!
//! _Requires Cargo feature `std`._

use std::io::{BufRead, Lines};

use thiserror::Error;

use crate::sans::{self, Decoder};

extern crate std;

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A line failed to decode.
    #[error("Failed to decode line {number}: {source}")]
    Line { number: usize, source: sans::Error },
}

/// Decode every line of a reader, yielding one result per line.
///
/// Line endings (`\n` or `\r\n`) are removed before decoding. This method is
/// also re-exported as `flatline::avec::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode<B: BufRead, D: Decoder>(r: B, decoder: D) -> Records<B, D> {
    Records {
        lines: r.lines(),
        number: 0,
        decoder,
    }
}

/// Iterator over the records of a reader.
#[derive(Debug)]
pub struct Records<B, D> {
    lines: Lines<B>,
    number: usize,
    decoder: D,
}

impl<B: BufRead, D: Decoder> Iterator for Records<B, D> {
    type Item = Result<D::Output, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.number += 1;

        let line = match line {
            Ok(line) => line,
            Err(err) => return Some(Err(err.into())),
        };

        Some(self.decoder.decode(&line).map_err(|source| {
            log::debug!("line {} failed to decode: {source}", self.number);

            Error::Line {
                number: self.number,
                source,
            }
        }))
    }
}
