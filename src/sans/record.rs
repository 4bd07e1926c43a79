//! Mapping decoded sequences into records.

use core::marker::PhantomData;

use super::{Cons, Decoder, Error, Nil};

/// Build a value from an ordered field sequence.
///
/// The sequence type fixes both the number and the types of the fields, so a
/// mismatch between a record and its decoder is a compile-time error.
/// Implemented for tuples of up to twelve elements.
///
/// See the [`FromFields`](macro@crate::avec::FromFields) derive macro for an
/// automatic implementation on structs.
pub trait FromFields {
    /// The sequence this value is built from, such as
    /// `Fields![String, u32]`.
    type Fields;

    fn from_fields(fields: Self::Fields) -> Self;
}

/// Decoder applying a function to the output of another.
#[derive(Debug, Clone)]
pub struct Map<D, F> {
    decoder: D,
    f: F,
}

impl<D, F> Map<D, F> {
    pub(super) fn new(decoder: D, f: F) -> Self {
        Self { decoder, f }
    }
}

impl<R, D: Decoder, F: Fn(D::Output) -> R> Decoder for Map<D, F> {
    type Output = R;

    fn max_length(&self) -> usize {
        self.decoder.max_length()
    }

    fn decode(&self, line: &str) -> Result<R, Error> {
        self.decoder.decode(line).map(&self.f)
    }
}

/// Decoder building a [`FromFields`] value from a sequence.
#[derive(Debug)]
pub struct MapInto<D, R> {
    decoder: D,
    _phantom: PhantomData<fn() -> R>,
}

impl<D, R> MapInto<D, R> {
    pub(super) fn new(decoder: D) -> Self {
        Self {
            decoder,
            _phantom: PhantomData,
        }
    }
}

impl<D: Clone, R> Clone for MapInto<D, R> {
    fn clone(&self) -> Self {
        Self::new(self.decoder.clone())
    }
}

impl<D: Decoder, R: FromFields<Fields = D::Output>> Decoder for MapInto<D, R> {
    type Output = R;

    fn max_length(&self) -> usize {
        self.decoder.max_length()
    }

    fn decode(&self, line: &str) -> Result<R, Error> {
        self.decoder.decode(line).map(R::from_fields)
    }
}

macro_rules! pattern {
    () => { Nil };
    ($head:ident $(, $tail:ident)*) => { Cons($head, pattern!($($tail),*)) };
}

macro_rules! tuple_from_fields {
    ($($t:ident $v:ident),*) => {
        impl<$($t),*> FromFields for ($($t,)*) {
            type Fields = crate::Fields!($($t),*);

            #[allow(clippy::unused_unit)]
            fn from_fields(fields: Self::Fields) -> Self {
                let pattern!($($v),*) = fields;
                ($($v,)*)
            }
        }
    };
}

tuple_from_fields!();
tuple_from_fields!(A a);
tuple_from_fields!(A a, B b);
tuple_from_fields!(A a, B b, C c);
tuple_from_fields!(A a, B b, C c, D d);
tuple_from_fields!(A a, B b, C c, D d, E e);
tuple_from_fields!(A a, B b, C c, D d, E e, F f);
tuple_from_fields!(A a, B b, C c, D d, E e, F f, G g);
tuple_from_fields!(A a, B b, C c, D d, E e, F f, G g, H h);
tuple_from_fields!(A a, B b, C c, D d, E e, F f, G g, H h, I i);
tuple_from_fields!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j);
tuple_from_fields!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k);
tuple_from_fields!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k, L l);
