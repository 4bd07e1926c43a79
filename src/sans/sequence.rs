//! Ordered field sequences and the combinator building them.

use core::ops::Shl;

use super::{Decoder, Error, Field, FromFields, Guard, MapInto, Reader};

/// The empty field sequence, and the decoder producing it.
///
/// As a decoder, `Nil` consumes no characters and always succeeds. It is the
/// starting point of every composition.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nil;

/// A field value followed by the values of the remaining fields.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cons<H, T>(pub H, pub T);

impl Decoder for Nil {
    type Output = Nil;

    fn max_length(&self) -> usize {
        0
    }

    fn decode(&self, _line: &str) -> Result<Nil, Error> {
        Ok(Nil)
    }
}

/// Decoder for a field followed by an existing sequence.
#[derive(Debug, Clone)]
pub struct Prepend<F, S> {
    field: F,
    tail: S,
}

impl<F: Decoder, S: Decoder> Decoder for Prepend<F, S> {
    type Output = Cons<F::Output, S::Output>;

    fn max_length(&self) -> usize {
        self.field.max_length() + self.tail.max_length()
    }

    fn decode(&self, line: &str) -> Result<Self::Output, Error> {
        let head = self.field.decode(line)?;
        let tail = self.tail.decode(line)?;

        Ok(Cons(head, tail))
    }
}

/// A decoder producing an ordered field sequence, to which fields can be
/// prepended.
pub trait Sequence: Decoder + Sized {
    /// Prepend a field, producing a decoder for the longer sequence.
    fn prepend<F: Decoder>(self, field: F) -> Prepend<F, Self> {
        Prepend { field, tail: self }
    }

    /// Prepend the field ending the record.
    ///
    /// The field is wrapped in a [`Guard`], rejecting lines that continue
    /// past its end.
    fn prepend_last<T, R>(self, field: Field<T, R>) -> Prepend<Guard<T, R>, Self>
    where
        T: Clone,
        R: Reader<T>,
    {
        self.prepend(Guard::new(field))
    }

    /// Build records from the decoded sequence.
    fn map_into<R: FromFields<Fields = Self::Output>>(self) -> MapInto<Self, R> {
        MapInto::new(self)
    }
}

impl Sequence for Nil {}

impl<F: Decoder, S: Sequence> Sequence for Prepend<F, S> {}

impl<F: Decoder> Shl<F> for Nil {
    type Output = Prepend<F, Nil>;

    fn shl(self, field: F) -> Self::Output {
        self.prepend(field)
    }
}

impl<G: Decoder, F: Decoder, S: Sequence> Shl<G> for Prepend<F, S> {
    type Output = Prepend<G, Self>;

    fn shl(self, field: G) -> Self::Output {
        self.prepend(field)
    }
}
