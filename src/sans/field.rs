//! Decoding a single fixed character range.

use alloc::string::ToString;

use super::{Decoder, Error, FieldError, Reader};

/// The side of a field holding its padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Content starts at the field start; trailing padding is removed.
    Left,
    /// Content ends at the field end; leading padding is removed.
    Right,
}

impl Alignment {
    /// Remove the run of padding characters on the padded side of `text`.
    pub fn strip(self, text: &str, padding: char) -> &str {
        match self {
            Self::Left => text.trim_end_matches(padding),
            Self::Right => text.trim_start_matches(padding),
        }
    }
}

/// A field whose start is after its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Field start ({start}) is after its end ({end}).")]
pub struct InvalidRange {
    pub start: usize,
    pub end: usize,
}

/// Decoder for the half-open character range `start..end` of a line.
///
/// Offsets count characters, not bytes.
#[derive(Debug, Clone)]
pub struct Field<T, R> {
    start: usize,
    end: usize,
    alignment: Alignment,
    padding: char,
    default: Option<T>,
    reader: R,
}

impl<T, R: Reader<T>> Field<T, R> {
    /// Declare a field over `start..end`.
    ///
    /// # Panics
    ///
    /// Panics if `start` is greater than `end`. See [`Field::try_new`] for a
    /// fallible alternative.
    pub fn new(start: usize, end: usize, alignment: Alignment, padding: char, reader: R) -> Self {
        match Self::try_new(start, end, alignment, padding, reader) {
            Ok(field) => field,
            Err(err) => panic!("{err}"),
        }
    }

    /// Declare a field over `start..end`, failing if `start` is greater than
    /// `end`.
    pub fn try_new(
        start: usize,
        end: usize,
        alignment: Alignment,
        padding: char,
        reader: R,
    ) -> Result<Self, InvalidRange> {
        if start > end {
            Err(InvalidRange { start, end })?;
        }

        Ok(Self {
            start,
            end,
            alignment,
            padding,
            default: None,
            reader,
        })
    }
}

impl<T, R> Field<T, R> {
    /// Return `value` whenever the field cannot be extracted or read.
    pub fn with_default(self, value: T) -> Self {
        Self {
            default: Some(value),
            ..self
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn padding(&self) -> char {
        self.padding
    }

    pub fn default(&self) -> Option<&T> {
        self.default.as_ref()
    }

    /// The text following the field, if the line reaches past it.
    pub(crate) fn remainder<'a>(&self, line: &'a str) -> Option<&'a str> {
        let i = offset(line, self.end)?;
        Some(&line[i..]).filter(|rest| !rest.is_empty())
    }

    /// The field text, or the part of the line from the field start if the
    /// line ends too early.
    fn extract<'a>(&self, line: &'a str) -> Result<&'a str, &'a str> {
        let Some(s) = offset(line, self.start) else {
            return Err("");
        };

        match offset(&line[s..], self.end - self.start) {
            Some(e) => Ok(&line[s..s + e]),
            None => Err(&line[s..]),
        }
    }
}

impl<T: Clone, R: Reader<T>> Decoder for Field<T, R> {
    type Output = T;

    fn max_length(&self) -> usize {
        self.end - self.start
    }

    fn decode(&self, line: &str) -> Result<T, Error> {
        let (raw, cause) = match self.extract(line) {
            Ok(raw) => match self.reader.read(self.alignment.strip(raw, self.padding)) {
                Ok(value) => return Ok(value),
                Err(err) => (raw, FieldError::Read(err)),
            },
            Err(raw) => {
                let length = line.chars().count();
                (raw, FieldError::FieldExtractionFailed { length })
            }
        };

        if let Some(default) = &self.default {
            log::trace!(
                "field {}..{} fell back to its default: {cause}",
                self.start,
                self.end
            );
            return Ok(default.clone());
        }

        Err(Error::ParsingFailed {
            raw: raw.to_string(),
            start: self.start,
            end: self.end,
            alignment: self.alignment,
            padding: self.padding,
            cause,
        })
    }
}

/// Byte offset of the `n`th character of `text`, where `n` may be one past
/// the last character.
fn offset(text: &str, n: usize) -> Option<usize> {
    text.char_indices()
        .map(|(i, _)| i)
        .chain(core::iter::once(text.len()))
        .nth(n)
}
