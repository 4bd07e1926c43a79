//! Conversion of stripped field text into values.
//!
//! Any function or closure of type `Fn(&str) -> Result<T, ReadError>` is a
//! [`Reader`] for `T`. The functions in this module cover common field types
//! and are passed to [`Field::new`](super::Field::new) like any other reader.

use alloc::string::{String, ToString};
use core::{fmt::Display, str::FromStr};

use thiserror::Error;

/// Convert the stripped text of a field into a value.
///
/// Readers must be deterministic and free of side effects.
pub trait Reader<T> {
    fn read(&self, text: &str) -> Result<T, ReadError>;
}

impl<T, F> Reader<T> for F
where
    F: Fn(&str) -> Result<T, ReadError>,
{
    fn read(&self, text: &str) -> Result<T, ReadError> {
        self(text)
    }
}

/// A reader rejected the text of a field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ReadError {
    message: String,
}

impl ReadError {
    pub fn new(message: impl Display) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Read the text as is.
pub fn text(text: &str) -> Result<String, ReadError> {
    Ok(text.into())
}

/// Read an integer.
pub fn integer<T>(text: &str) -> Result<T, ReadError>
where
    T: FromStr,
    T::Err: Display,
{
    text.parse()
        .map_err(|err| ReadError::new(format_args!("Invalid integer {text:?}: {err}.")))
}

/// Read a floating-point number.
pub fn float<T>(text: &str) -> Result<T, ReadError>
where
    T: FromStr,
    T::Err: Display,
{
    text.parse()
        .map_err(|err| ReadError::new(format_args!("Invalid number {text:?}: {err}.")))
}

/// Read a decimal written with an explicit decimal point.
///
/// _Requires Cargo feature `decimal`._
#[cfg(feature = "decimal")]
pub fn decimal(text: &str) -> Result<rust_decimal::Decimal, ReadError> {
    text.parse()
        .map_err(|err| ReadError::new(format_args!("Invalid decimal {text:?}: {err}.")))
}

/// Build a reader for decimals written as digits with an implied decimal
/// point, `scale` digits from the right (as in a COBOL `PIC 9(5)V99` item).
///
/// An optional leading sign is accepted.
///
/// _Requires Cargo feature `decimal`._
#[cfg(feature = "decimal")]
pub fn implied_decimal(
    scale: u32,
) -> impl Fn(&str) -> Result<rust_decimal::Decimal, ReadError> + Clone {
    move |text: &str| {
        let digits = text.strip_prefix(['+', '-']).unwrap_or(text);

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            Err(ReadError::new(format_args!(
                "Invalid implied decimal {text:?}: expected digits."
            )))?;
        }

        let mantissa: i64 = text.parse().map_err(|err| {
            ReadError::new(format_args!("Invalid implied decimal {text:?}: {err}."))
        })?;

        rust_decimal::Decimal::try_new(mantissa, scale)
            .map_err(|err| ReadError::new(format_args!("Invalid implied decimal {text:?}: {err}.")))
    }
}

/// Build a reader for dates in the given `strptime` format, such as
/// `"%Y%m%d"`.
///
/// _Requires Cargo feature `jiff`._
#[cfg(feature = "jiff")]
pub fn date(
    format: &'static str,
) -> impl Fn(&str) -> Result<jiff::civil::Date, ReadError> + Clone {
    move |text: &str| {
        jiff::civil::Date::strptime(format, text)
            .map_err(|err| ReadError::new(format_args!("Invalid date {text:?}: {err}.")))
    }
}
