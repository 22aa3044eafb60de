//! Four-letter type codes (INFJ, ESTP, ...).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::axis::{flip, Axis, AxisSet};
use crate::{Error, Result};

/// Perceiving / Judging status (axis 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifestyle {
    Perceiving,
    Judging,
}

impl Lifestyle {
    /// Lowercase tag used by the relation rules ('p' / 'j').
    pub const fn tag(self) -> char {
        match self {
            Lifestyle::Perceiving => 'p',
            Lifestyle::Judging => 'j',
        }
    }
}

impl fmt::Display for Lifestyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A validated four-letter type code.
///
/// Always uppercase, one letter per axis in the order I/E, N/S, T/F, P/J.
/// Only the 16 valid combinations can be constructed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeCode([u8; 4]);

impl TypeCode {
    /// All 16 types in lexicographic order. This is the table order used
    /// wherever the crate iterates types (inference tie-breaks included).
    pub const ALL: [TypeCode; 16] = [
        TypeCode(*b"ENFJ"), TypeCode(*b"ENFP"), TypeCode(*b"ENTJ"), TypeCode(*b"ENTP"),
        TypeCode(*b"ESFJ"), TypeCode(*b"ESFP"), TypeCode(*b"ESTJ"), TypeCode(*b"ESTP"),
        TypeCode(*b"INFJ"), TypeCode(*b"INFP"), TypeCode(*b"INTJ"), TypeCode(*b"INTP"),
        TypeCode(*b"ISFJ"), TypeCode(*b"ISFP"), TypeCode(*b"ISTJ"), TypeCode(*b"ISTP"),
    ];

    /// Parse a type code, uppercasing first. Surrounding whitespace is
    /// not stripped: `" INFJ"` is five characters and is rejected.
    pub fn parse(input: &str) -> Result<TypeCode> {
        let code = input.to_uppercase();
        let letters: Vec<char> = code.chars().collect();
        if letters.len() != 4 {
            return Err(Error::InvalidTypeCode {
                code,
                reason: format!("expected 4 letters, got {}", letters.len()),
            });
        }

        let mut bytes = [0u8; 4];
        for axis in Axis::ALL {
            let letter = letters[axis.index()];
            if !axis.accepts(letter) {
                let [a, b] = axis.letters();
                return Err(Error::InvalidTypeCode {
                    reason: format!(
                        "position {} must be {} or {}, got '{}'",
                        axis.position(), a, b, letter
                    ),
                    code,
                });
            }
            bytes[axis.index()] = letter as u8;
        }
        Ok(TypeCode(bytes))
    }

    pub fn as_str(&self) -> &str {
        // Construction only admits ASCII axis letters.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    pub fn letter(&self, axis: Axis) -> char {
        self.0[axis.index()] as char
    }

    pub fn is_introverted(&self) -> bool {
        self.letter(Axis::Attitude) == 'I'
    }

    pub fn lifestyle(&self) -> Lifestyle {
        if self.letter(Axis::Lifestyle) == 'J' {
            Lifestyle::Judging
        } else {
            Lifestyle::Perceiving
        }
    }

    pub fn is_judging(&self) -> bool {
        self.lifestyle() == Lifestyle::Judging
    }

    /// Flip every axis in `axes`, leaving the rest unchanged.
    pub fn flipped(&self, axes: AxisSet) -> TypeCode {
        let mut bytes = self.0;
        for axis in axes.axes() {
            // Every stored letter is an axis letter, so the flip cannot fail.
            if let Ok(opposite) = flip(self.letter(axis)) {
                bytes[axis.index()] = opposite as u8;
            }
        }
        TypeCode(bytes)
    }

    /// Axes on which `self` and `other` differ.
    pub fn altered_axes(&self, other: &TypeCode) -> AxisSet {
        Axis::ALL
            .into_iter()
            .filter(|axis| self.letter(*axis) != other.letter(*axis))
            .collect()
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeCode({})", self.as_str())
    }
}

impl FromStr for TypeCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TypeCode::parse(s)
    }
}

impl Serialize for TypeCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TypeCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        TypeCode::parse(&raw).map_err(serde::de::Error::custom)
    }
}
