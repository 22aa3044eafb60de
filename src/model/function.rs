//! Cognitive function labels (Ni, Fe, Ti, Se, ...).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Result};

/// Whether a function perceives (N/S) or judges (T/F).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionKind {
    Perceiving,
    Judging,
}

/// The letter half of a function label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FunctionLetter {
    N,
    S,
    T,
    F,
}

impl FunctionLetter {
    pub const fn kind(self) -> FunctionKind {
        match self {
            FunctionLetter::N | FunctionLetter::S => FunctionKind::Perceiving,
            FunctionLetter::T | FunctionLetter::F => FunctionKind::Judging,
        }
    }

    /// The other letter of the same kind (N↔S, T↔F).
    pub const fn opposite(self) -> FunctionLetter {
        match self {
            FunctionLetter::N => FunctionLetter::S,
            FunctionLetter::S => FunctionLetter::N,
            FunctionLetter::T => FunctionLetter::F,
            FunctionLetter::F => FunctionLetter::T,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            FunctionLetter::N => 'N',
            FunctionLetter::S => 'S',
            FunctionLetter::T => 'T',
            FunctionLetter::F => 'F',
        }
    }

    pub fn from_char(c: char) -> Option<FunctionLetter> {
        match c {
            'N' => Some(FunctionLetter::N),
            'S' => Some(FunctionLetter::S),
            'T' => Some(FunctionLetter::T),
            'F' => Some(FunctionLetter::F),
            _ => None,
        }
    }
}

/// Direction of a function: extraverted (`e`) or introverted (`i`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attitude {
    Extraverted,
    Introverted,
}

impl Attitude {
    pub const fn opposite(self) -> Attitude {
        match self {
            Attitude::Extraverted => Attitude::Introverted,
            Attitude::Introverted => Attitude::Extraverted,
        }
    }

    pub const fn suffix(self) -> char {
        match self {
            Attitude::Extraverted => 'e',
            Attitude::Introverted => 'i',
        }
    }
}

/// One of the eight cognitive functions.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CognitiveFunction {
    pub letter: FunctionLetter,
    pub attitude: Attitude,
}

impl CognitiveFunction {
    pub const NE: Self = Self::new(FunctionLetter::N, Attitude::Extraverted);
    pub const NI: Self = Self::new(FunctionLetter::N, Attitude::Introverted);
    pub const SE: Self = Self::new(FunctionLetter::S, Attitude::Extraverted);
    pub const SI: Self = Self::new(FunctionLetter::S, Attitude::Introverted);
    pub const TE: Self = Self::new(FunctionLetter::T, Attitude::Extraverted);
    pub const TI: Self = Self::new(FunctionLetter::T, Attitude::Introverted);
    pub const FE: Self = Self::new(FunctionLetter::F, Attitude::Extraverted);
    pub const FI: Self = Self::new(FunctionLetter::F, Attitude::Introverted);

    pub const ALL: [Self; 8] = [
        Self::NE, Self::NI, Self::SE, Self::SI,
        Self::TE, Self::TI, Self::FE, Self::FI,
    ];

    pub const fn new(letter: FunctionLetter, attitude: Attitude) -> Self {
        Self { letter, attitude }
    }

    pub const fn kind(self) -> FunctionKind {
        self.letter.kind()
    }

    /// Same kind, opposite letter, opposite attitude: Fe → Ti, Ni → Se.
    ///
    /// This is how tertiary and inferior functions hang off the
    /// auxiliary and dominant respectively.
    pub const fn complement(self) -> Self {
        Self::new(self.letter.opposite(), self.attitude.opposite())
    }

    /// Parse a label, normalizing case first ("ni", "NI" → "Ni").
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let mut chars = trimmed.chars();
        let (Some(head), Some(tail), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(Error::InvalidFunction(trimmed.to_string()));
        };

        let letter = FunctionLetter::from_char(head.to_ascii_uppercase());
        let attitude = match tail.to_ascii_lowercase() {
            'e' => Some(Attitude::Extraverted),
            'i' => Some(Attitude::Introverted),
            _ => None,
        };

        match (letter, attitude) {
            (Some(letter), Some(attitude)) => Ok(Self::new(letter, attitude)),
            _ => Err(Error::InvalidFunction(trimmed.to_string())),
        }
    }
}

impl fmt::Display for CognitiveFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter.as_char(), self.attitude.suffix())
    }
}

impl fmt::Debug for CognitiveFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for CognitiveFunction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for CognitiveFunction {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CognitiveFunction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
