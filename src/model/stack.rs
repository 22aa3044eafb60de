//! Ordered four-function stacks.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::function::CognitiveFunction;
use crate::{Error, Result};

/// Slot in a cognitive stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackPosition {
    Dominant,
    Auxiliary,
    Tertiary,
    Inferior,
}

impl StackPosition {
    pub const ALL: [StackPosition; 4] = [
        StackPosition::Dominant,
        StackPosition::Auxiliary,
        StackPosition::Tertiary,
        StackPosition::Inferior,
    ];

    pub const fn index(self) -> usize {
        match self {
            StackPosition::Dominant => 0,
            StackPosition::Auxiliary => 1,
            StackPosition::Tertiary => 2,
            StackPosition::Inferior => 3,
        }
    }

    /// Match weight used by inference: dominant 4 down to inferior 1.
    pub const fn weight(self) -> u8 {
        4 - self.index() as u8
    }
}

/// Four functions in dominant → inferior order.
///
/// Canonical stacks (those derived from a type code) hold four distinct
/// functions. Stacks parsed from user input may repeat functions; they
/// are still valid inference input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CognitiveStack(pub [CognitiveFunction; 4]);

impl CognitiveStack {
    pub const fn new(
        dominant: CognitiveFunction,
        auxiliary: CognitiveFunction,
        tertiary: CognitiveFunction,
        inferior: CognitiveFunction,
    ) -> Self {
        Self([dominant, auxiliary, tertiary, inferior])
    }

    /// Parse exactly four labels, normalizing the case of each.
    pub fn parse<S: AsRef<str>>(labels: &[S]) -> Result<Self> {
        if labels.len() != 4 {
            return Err(Error::InvalidStackLength(labels.len()));
        }
        let mut functions = [CognitiveFunction::NE; 4];
        for (slot, label) in functions.iter_mut().zip(labels) {
            *slot = CognitiveFunction::parse(label.as_ref())?;
        }
        Ok(Self(functions))
    }

    pub fn get(&self, position: StackPosition) -> CognitiveFunction {
        self.0[position.index()]
    }

    pub fn dominant(&self) -> CognitiveFunction {
        self.get(StackPosition::Dominant)
    }

    pub fn auxiliary(&self) -> CognitiveFunction {
        self.get(StackPosition::Auxiliary)
    }

    pub fn tertiary(&self) -> CognitiveFunction {
        self.get(StackPosition::Tertiary)
    }

    pub fn inferior(&self) -> CognitiveFunction {
        self.get(StackPosition::Inferior)
    }

    pub fn functions(&self) -> &[CognitiveFunction; 4] {
        &self.0
    }

    pub fn is_distinct(&self) -> bool {
        (0..4).all(|i| (i + 1..4).all(|j| self.0[i] != self.0[j]))
    }
}

impl fmt::Display for CognitiveStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a}-{b}-{c}-{d}")
    }
}
