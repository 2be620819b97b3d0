//! The chord data model.
//!
//! A chord diagram is described by three pieces of data:
//!
//! - [`Tuning`]: the ordered string names of the instrument, left to right
//! - [`ChordPattern`]: one fret value per string, using the wire encoding
//!   `-1` = muted, `0` = open, `>0` = pressed at that fret number
//! - a capo position (`u32`), where `0` means no capo
//!
//! The integer encoding is kept at this level; it is decoded into the
//! tagged [`MarkerKind`](crate::draw::MarkerKind) variant when fingertip
//! markers are laid out.

use std::{fmt, str::FromStr};

use serde::Deserialize;

/// Pattern value for a muted string.
pub const MUTED: i32 = -1;

/// Pattern value for an open string.
pub const OPEN: i32 = 0;

/// The ordered string names of the instrument, in left-to-right diagram order.
///
/// The default is the standard ukulele tuning G C E A.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Tuning(Vec<String>);

impl Tuning {
    /// Creates a tuning from string names.
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Returns the number of strings.
    pub fn string_count(&self) -> usize {
        self.0.len()
    }

    /// Returns the name of the string at the given index, if any.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Iterates over the string names in diagram order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::new(["G", "C", "E", "A"])
    }
}

impl fmt::Display for Tuning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

/// One fret value per string, in tuning order.
///
/// Values follow the wire encoding `-1` = muted, `0` = open, `>0` = pressed
/// at that fret number. The pattern length must match the tuning's string
/// count; the layout engine rejects mismatched lengths rather than
/// truncating.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ChordPattern(Vec<i32>);

impl ChordPattern {
    /// Creates a pattern from per-string fret values.
    pub fn new(values: impl Into<Vec<i32>>) -> Self {
        Self(values.into())
    }

    /// Returns the number of per-string values.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the per-string fret values.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.0.iter().copied()
    }

    /// Returns the fret value for the string at the given index, if any.
    pub fn value(&self, index: usize) -> Option<i32> {
        self.0.get(index).copied()
    }
}

impl From<&[i32]> for ChordPattern {
    fn from(values: &[i32]) -> Self {
        Self(values.to_vec())
    }
}

impl<const N: usize> From<[i32; N]> for ChordPattern {
    fn from(values: [i32; N]) -> Self {
        Self(values.to_vec())
    }
}

/// Error produced when a pattern literal cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid pattern value `{value}`, expected a fret number, `0`, or `x`")]
pub struct PatternParseError {
    value: String,
}

impl FromStr for ChordPattern {
    type Err = PatternParseError;

    /// Parses a comma-separated pattern literal such as `2,1,0,0` or `4,3,0,x`.
    ///
    /// `x` (case-insensitive) denotes a muted string, equivalent to `-1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .map(|value| {
                if value.eq_ignore_ascii_case("x") {
                    return Ok(MUTED);
                }
                value.parse::<i32>().map_err(|_| PatternParseError {
                    value: value.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for ChordPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for value in &self.0 {
            if !first {
                write!(f, ",")?;
            }
            first = false;
            if *value == MUTED {
                write!(f, "x")?;
            } else {
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}
