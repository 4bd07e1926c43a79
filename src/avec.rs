//! Convenience interfaces for common decoding patterns.
//!
//! The functions in this module decode every line of a string or reader with
//! a single decoder, numbering the lines in any error they report.
//!
//! In many cases (when records are of a known shape), the decoder can be
//! derived. See the [`FixedWidth`](macro@FixedWidth) and
//! [`FromFields`](macro@FromFields) macros for details.

#[cfg(feature = "std")]
pub mod reader;
pub mod slice;

#[cfg(feature = "std")]
pub use reader::decode as decode_reader;
pub use slice::decode as decode_slice;

pub use crate::sans::FromFields;

use crate::sans::Decoder;

/// Derive [`FixedWidth`] for a struct describing one record layout.
///
/// _Requires Cargo feature `derive`._
///
/// # Example
///
/// Add the `field(START..END, ...)` attribute to every struct field, where
/// `START..END` is the half-open character range holding the value. The
/// remaining arguments are:
///
/// - `read = EXPR`: the [`Reader`](crate::sans::Reader) converting the
/// stripped text (required).
/// - `align = left` or `align = right`: the side carrying padding (default
/// `left`).
/// - `pad = 'C'`: the padding character (default `' '`).
/// - `default = EXPR`: a value used when the field cannot be read.
///
/// The last-declared field ends the record: lines continuing past it are
/// rejected.
///
/// ```
/// #[derive(Debug, FixedWidth)]
/// struct Person {
///     #[field(0..5, read = read::text)]
///     name: String,
///     #[field(5..8, align = right, pad = '0', read = read::integer, default = 0)]
///     age: u32,
/// }
///
/// let person = Person::decoder().decode("Bob  042")?;
/// ```
#[cfg(feature = "derive")]
pub use flatline_derive::FixedWidth;

/// Derive [`FromFields`](crate::sans::FromFields) for a struct, building it
/// from a sequence holding its field types in declaration order.
///
/// _Requires Cargo feature `derive`._
///
/// ```
/// #[derive(Debug, FromFields)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// let decoder = flatline::fields![name, age].map_into::<Person>();
/// ```
#[cfg(feature = "derive")]
pub use flatline_derive::FromFields;

/// A record with a fixed-width layout.
///
/// See the [`FixedWidth`](macro@FixedWidth) derive macro for an automatic
/// implementation of this trait.
pub trait FixedWidth: Sized {
    /// Build the decoder for this layout.
    fn decoder() -> impl Decoder<Output = Self>;
}

/// Decode every line of `text` as a `T`.
pub fn decode_str<T: FixedWidth>(text: &str) -> slice::Records<'_, impl Decoder<Output = T>> {
    slice::decode(text, T::decoder())
}
