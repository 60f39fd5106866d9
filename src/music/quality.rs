// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Interval qualities.
//!
//! A quality names the chromatic size of an interval relative to its
//! diatonic number. Perfect numbers (unison, fourth, fifth, octave) and
//! imperfect numbers (second, third, sixth, seventh) accept different
//! qualities; augmented and diminished belong to both families.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two families of interval numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    /// 1, 4, 5, 8 and their compounds
    Perfect,
    /// 2, 3, 6, 7 and their compounds
    Imperfect,
}

/// Interval quality.
///
/// Variants are declared in tie-break priority order, so the derived `Ord`
/// sorts by [`Quality::priority`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    Perfect,
    Major,
    Minor,
    Diminished,
    Augmented,
    DoublyDiminished,
    DoublyAugmented,
}

impl Quality {
    /// All qualities in priority order
    pub const ALL: [Quality; 7] = [
        Quality::Perfect,
        Quality::Major,
        Quality::Minor,
        Quality::Diminished,
        Quality::Augmented,
        Quality::DoublyDiminished,
        Quality::DoublyAugmented,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Quality::Perfect => "perfect",
            Quality::Major => "major",
            Quality::Minor => "minor",
            Quality::Diminished => "diminished",
            Quality::Augmented => "augmented",
            Quality::DoublyDiminished => "doubly diminished",
            Quality::DoublyAugmented => "doubly augmented",
        }
    }

    /// Abbreviation used in interval short names ("M" in "M3")
    pub fn short_name(self) -> &'static str {
        match self {
            Quality::Perfect => "P",
            Quality::Major => "M",
            Quality::Minor => "m",
            Quality::Diminished => "d",
            Quality::Augmented => "A",
            Quality::DoublyDiminished => "dd",
            Quality::DoublyAugmented => "AA",
        }
    }

    /// Parse a short name. Case matters: "M" is major, "m" is minor.
    pub fn from_short_name(s: &str) -> Option<Self> {
        Quality::ALL.into_iter().find(|q| q.short_name() == s)
    }

    /// Tie-break ordinal; lower wins when several spellings share a size
    pub fn priority(self) -> u8 {
        match self {
            Quality::Perfect => 0,
            Quality::Major => 1,
            Quality::Minor => 2,
            Quality::Diminished => 3,
            Quality::Augmented => 4,
            Quality::DoublyDiminished => 5,
            Quality::DoublyAugmented => 6,
        }
    }

    /// The quality of the inverted interval
    pub fn inverse(self) -> Self {
        match self {
            Quality::Perfect => Quality::Perfect,
            Quality::Major => Quality::Minor,
            Quality::Minor => Quality::Major,
            Quality::Diminished => Quality::Augmented,
            Quality::Augmented => Quality::Diminished,
            Quality::DoublyDiminished => Quality::DoublyAugmented,
            Quality::DoublyAugmented => Quality::DoublyDiminished,
        }
    }

    /// Whether intervals of this kind of number can carry this quality
    pub const fn applies_to(self, kind: NumberKind) -> bool {
        self.offset(kind).is_some()
    }

    /// Half-steps away from the plain size of a `kind` interval (perfect
    /// for perfect numbers, major for imperfect ones).
    pub const fn offset(self, kind: NumberKind) -> Option<i32> {
        match kind {
            NumberKind::Perfect => match self {
                Quality::DoublyDiminished => Some(-2),
                Quality::Diminished => Some(-1),
                Quality::Perfect => Some(0),
                Quality::Augmented => Some(1),
                Quality::DoublyAugmented => Some(2),
                Quality::Major | Quality::Minor => None,
            },
            NumberKind::Imperfect => match self {
                Quality::DoublyDiminished => Some(-3),
                Quality::Diminished => Some(-2),
                Quality::Minor => Some(-1),
                Quality::Major => Some(0),
                Quality::Augmented => Some(1),
                Quality::DoublyAugmented => Some(2),
                Quality::Perfect => None,
            },
        }
    }

    /// Signed half-steps from `other` to `self` for the same interval
    /// number, or `None` when the two never share a number (major and
    /// perfect).
    ///
    /// Comparisons involving perfect use the perfect family; everything
    /// else is measured on the imperfect family, so augmented is three
    /// half-steps above diminished.
    pub fn offset_from(self, other: Quality) -> Option<i32> {
        let kind = if self == Quality::Perfect || other == Quality::Perfect {
            NumberKind::Perfect
        } else {
            NumberKind::Imperfect
        };
        Some(self.offset(kind)? - other.offset(kind)?)
    }

    pub fn from_major(self) -> Option<i32> {
        self.offset_from(Quality::Major)
    }

    pub fn from_minor(self) -> Option<i32> {
        self.offset_from(Quality::Minor)
    }

    pub fn from_perfect(self) -> Option<i32> {
        self.offset_from(Quality::Perfect)
    }

    pub fn from_augmented(self) -> Option<i32> {
        self.offset_from(Quality::Augmented)
    }

    pub fn from_diminished(self) -> Option<i32> {
        self.offset_from(Quality::Diminished)
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
