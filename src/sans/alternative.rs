//! Choice between record layouts.

use either::Either::{self, Left, Right};

use super::{Decoder, Error};

/// Decoder trying one decoder, then another on failure.
///
/// Useful for files mixing several record layouts, such as header and detail
/// lines. When both decoders fail, the error of the second is returned.
#[derive(Debug, Clone)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<L, R> Or<L, R> {
    pub(super) fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L: Decoder, R: Decoder> Decoder for Or<L, R> {
    type Output = Either<L::Output, R::Output>;

    fn max_length(&self) -> usize {
        self.left.max_length().max(self.right.max_length())
    }

    fn decode(&self, line: &str) -> Result<Self::Output, Error> {
        match self.left.decode(line) {
            Ok(value) => Ok(Left(value)),
            Err(_) => self.right.decode(line).map(Right),
        }
    }
}
