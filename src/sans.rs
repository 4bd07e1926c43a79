//! Decoder building blocks, free of any line source.
//!
//! Every decoder implements [`Decoder`]: a pure function from one line of
//! text to a value, together with the maximum number of characters it is
//! declared to consume. Decoders are immutable once built and may be shared
//! freely between threads.
//!
//! # Architecture
//!
//! A record decoder is assembled from right to left:
//!
//! - A [`Field`] decodes one half-open character range, strips its padding
//! and hands the remaining text to a [`Reader`].
//!
//! - [`Nil`] is the empty record. Fields are prepended to it with
//! [`Sequence::prepend`] (or the `<<` operator), each producing a decoder for
//! a longer [`Cons`] list. Every field sees the full line, so the order of
//! composition only affects the order of values and which error surfaces
//! first.
//!
//! - The field that ends the record is added with [`Sequence::prepend_last`],
//! which wraps it in a [`Guard`]. The guard rejects lines carrying characters
//! past the end of that field.
//!
//! - Finally, [`Decoder::map`] or [`Sequence::map_into`] turns the list into
//! the caller's record type.
//!
//! The [`fields!`](crate::fields) macro performs the whole composition from a
//! list of fields in declaration order.

use alloc::string::String;

use thiserror::Error;

pub mod alternative;
pub mod field;
pub mod guard;
pub mod read;
pub mod record;
pub mod sequence;

pub use alternative::Or;
pub use field::{Alignment, Field};
pub use guard::Guard;
pub use read::{ReadError, Reader};
pub use record::{FromFields, Map, MapInto};
pub use sequence::{Cons, Nil, Prepend, Sequence};

/// Decode a value from a single line of text.
pub trait Decoder {
    /// The decoded value.
    type Output;

    /// The maximum number of characters this decoder is declared to consume.
    ///
    /// This is fixed at construction and never depends on the input.
    fn max_length(&self) -> usize;

    /// Decode a value from a full line.
    fn decode(&self, line: &str) -> Result<Self::Output, Error>;

    /// Transform the decoded value.
    fn map<R, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> R,
    {
        Map::new(self, f)
    }

    /// Fall back to another decoder when this one fails.
    fn or<D: Decoder>(self, other: D) -> Or<Self, D>
    where
        Self: Sized,
    {
        Or::new(self, other)
    }
}

impl<D: Decoder + ?Sized> Decoder for &D {
    type Output = D::Output;

    fn max_length(&self) -> usize {
        (**self).max_length()
    }

    fn decode(&self, line: &str) -> Result<Self::Output, Error> {
        (**self).decode(line)
    }
}

/// An error decoding a line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A field could not be extracted or read, and has no default.
    #[error(
        "Failed to parse field {start}..{end} ({alignment:?}, padded with {padding:?}) from {raw:?}: {cause}"
    )]
    ParsingFailed {
        /// The field text before padding removal, cut short if the line ends
        /// within the field.
        raw: String,
        start: usize,
        end: usize,
        alignment: Alignment,
        padding: char,
        #[source]
        cause: FieldError,
    },
    /// The line continues past the end of the last field.
    #[error("Line {line:?} is longer than expected, found {excess:?} after the last field.")]
    LineLongerThanExpected { line: String, excess: String },
}

/// The cause of a field failing to decode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The line ends before the field does.
    #[error("Line of {length} characters ends before the field.")]
    FieldExtractionFailed { length: usize },
    /// The reader rejected the field text.
    #[error(transparent)]
    Read(#[from] ReadError),
}
