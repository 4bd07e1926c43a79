#![no_std]

//! Composable decoders for fixed-width text records.
//!
//! Flatline turns flat, fixed-width lines (mainframe extracts, EDI-style
//! records) into strongly-typed values. Each field is declared as a character
//! range with an alignment, a padding character and a reader; fields are then
//! composed into a decoder for the whole record, which knows its total width
//! and rejects lines carrying anything past it.
//!
//! Most users should begin with the [`FixedWidth`](macro@avec::FixedWidth)
//! derive macro and the line sources in the [`avec`] module. Decoders can
//! also be composed by hand from the building blocks in the [`sans`] module.
//!
//! ```
//! use flatline::sans::{Alignment, Decoder, Field, read};
//!
//! let person = flatline::fields![
//!     Field::new(0, 5, Alignment::Left, ' ', read::text),
//!     Field::new(5, 8, Alignment::Right, '0', read::integer::<u32>),
//! ]
//! .map(|flatline::sans::Cons(name, flatline::sans::Cons(age, _))| (name, age));
//!
//! assert_eq!(person.decode("Bob  042")?, ("Bob".to_string(), 42));
//! ```
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `derive`: enable derive macros (default).
//! - `std`: enable reader-based line source (default).
//! - `decimal`: enable decimal readers backed by `rust_decimal` (default).
//! - `jiff`: enable the date reader backed by `jiff` (default, implies `std`).

extern crate alloc;

pub mod avec;
pub mod sans;

/// Compose field decoders, in declaration order, into a sequence decoder.
///
/// The last field is guarded, so the resulting decoder rejects lines longer
/// than the sum of the field widths. `fields![a, b, c]` is equivalent to
/// `Nil.prepend_last(c).prepend(b).prepend(a)`.
#[macro_export]
macro_rules! fields {
    ($last:expr $(,)?) => {
        $crate::sans::Sequence::prepend_last($crate::sans::Nil, $last)
    };
    ($head:expr, $($tail:expr),+ $(,)?) => {
        $crate::sans::Sequence::prepend($crate::fields!($($tail),+), $head)
    };
}

/// Name the ordered field sequence holding the given types.
///
/// `Fields![String, u32]` is `Cons<String, Cons<u32, Nil>>`.
#[macro_export]
macro_rules! Fields {
    () => {
        $crate::sans::Nil
    };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::sans::Cons<$head, $crate::Fields!($($tail),*)>
    };
}
