//! Type-code axes and the letter-flip utility.

use std::fmt;

use serde::{Serialize, Serializer};
use smallvec::SmallVec;

use crate::{Error, Result};

/// One of the four positions of a type code.
///
/// Positions are 1-based everywhere they surface (altered axes,
/// flip patterns), matching the way relations are tabulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// Axis 1: I / E
    Attitude,
    /// Axis 2: N / S
    Perception,
    /// Axis 3: T / F
    Judgment,
    /// Axis 4: P / J
    Lifestyle,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::Attitude, Axis::Perception, Axis::Judgment, Axis::Lifestyle];

    /// 1-based position in the type code.
    pub const fn position(self) -> u8 {
        self.index() as u8 + 1
    }

    /// 0-based index into the type code.
    pub const fn index(self) -> usize {
        match self {
            Axis::Attitude => 0,
            Axis::Perception => 1,
            Axis::Judgment => 2,
            Axis::Lifestyle => 3,
        }
    }

    pub fn from_position(position: u8) -> Option<Axis> {
        Axis::ALL.get(usize::from(position).checked_sub(1)?).copied()
    }

    /// The two letters allowed on this axis.
    pub const fn letters(self) -> [char; 2] {
        match self {
            Axis::Attitude => ['I', 'E'],
            Axis::Perception => ['N', 'S'],
            Axis::Judgment => ['T', 'F'],
            Axis::Lifestyle => ['P', 'J'],
        }
    }

    pub fn accepts(self, letter: char) -> bool {
        self.letters().contains(&letter)
    }

    /// The axis a letter belongs to, if any.
    pub fn of_letter(letter: char) -> Option<Axis> {
        Axis::ALL.into_iter().find(|axis| axis.accepts(letter))
    }

    /// Opposite letter on this axis. Caller guarantees `letter` is on the axis.
    fn toggle(self, letter: char) -> char {
        let [a, b] = self.letters();
        if letter == a { b } else { a }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = self.letters();
        write!(f, "{}/{}", a, b)
    }
}

/// Map an axis letter to its opposite (I↔E, N↔S, T↔F, J↔P).
///
/// Anything outside the eight axis letters is rejected rather than
/// passed through, so a malformed code cannot survive a flip.
/// [`TypeCode::flipped`](super::TypeCode::flipped) flips through here.
pub fn flip(letter: char) -> Result<char> {
    Axis::of_letter(letter)
        .map(|axis| axis.toggle(letter))
        .ok_or(Error::InvalidAxisLetter(letter))
}

// ============================================================================
// AxisSet
// ============================================================================

/// A subset of the four axes, stored as a bitmask (bit 0 = axis 1).
///
/// Serves both as the "altered axes" between two types and as the
/// flip pattern of a function role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct AxisSet(u8);

impl AxisSet {
    pub const EMPTY: AxisSet = AxisSet(0);
    pub const FULL: AxisSet = AxisSet(0b1111);

    /// Build a set from 1-based positions. Out-of-range positions are ignored.
    pub const fn of(positions: &[u8]) -> AxisSet {
        let mut bits = 0u8;
        let mut i = 0;
        while i < positions.len() {
            let p = positions[i];
            if p >= 1 && p <= 4 {
                bits |= 1 << (p - 1);
            }
            i += 1;
        }
        AxisSet(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, axis: Axis) -> bool {
        self.0 & (1 << axis.index()) != 0
    }

    pub const fn with(self, axis: Axis) -> AxisSet {
        AxisSet(self.0 | (1 << axis.index()))
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Member axes in ascending order.
    pub fn axes(self) -> impl Iterator<Item = Axis> {
        Axis::ALL.into_iter().filter(move |axis| self.contains(*axis))
    }

    /// Sorted 1-based positions.
    pub fn positions(self) -> SmallVec<[u8; 4]> {
        self.axes().map(Axis::position).collect()
    }

    /// All 16 subsets, ordered by bitmask.
    pub fn all() -> impl Iterator<Item = AxisSet> {
        (0u8..16).map(AxisSet)
    }
}

impl FromIterator<Axis> for AxisSet {
    fn from_iter<I: IntoIterator<Item = Axis>>(iter: I) -> Self {
        iter.into_iter().fold(AxisSet::EMPTY, AxisSet::with)
    }
}

impl fmt::Display for AxisSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.axes().map(|a| a.position().to_string()).collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}

impl Serialize for AxisSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.positions())
    }
}
