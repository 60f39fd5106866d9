// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Operand types for chroma, interval and pitch arithmetic.
//!
//! `+` and `-` on [`Chroma`] accept integers, intervals and other chroma,
//! and the result type depends on the operand: chroma plus chroma is a
//! dyad, chroma minus chroma is the interval between them. The
//! `std::ops` impls cover the statically known cases; [`Chroma::plus`] and
//! [`Chroma::minus`] take any [`Addend`] and return a tagged result.

use std::ops::{Add, Sub};

use super::chroma::Chroma;
use super::chroma_set::ChromaSet;
use super::interval::{Interval, QualifiedInterval};
use super::HalfSteps;

/// How far to move an interval or pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distance {
    /// Chromatic shift; the spelling follows the preference in effect
    HalfSteps(HalfSteps),
    /// Spelled shift; the letter moves by the interval number
    Interval(Interval),
    Qualified(QualifiedInterval),
}

impl Distance {
    pub fn half_steps(self) -> HalfSteps {
        match self {
            Distance::HalfSteps(n) => n,
            Distance::Interval(i) => i.half_steps(),
            Distance::Qualified(q) => q.half_steps(),
        }
    }
}

impl From<HalfSteps> for Distance {
    fn from(n: HalfSteps) -> Self {
        Distance::HalfSteps(n)
    }
}

impl From<Interval> for Distance {
    fn from(i: Interval) -> Self {
        Distance::Interval(i)
    }
}

impl From<QualifiedInterval> for Distance {
    fn from(q: QualifiedInterval) -> Self {
        Distance::Qualified(q)
    }
}

/// Anything that can appear on the right of a chroma `+` or `-`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Addend {
    Integer(HalfSteps),
    Chroma(Chroma),
    Interval(Interval),
    Qualified(QualifiedInterval),
}

impl Addend {
    /// The distance this addend moves by, or `None` for a chroma
    pub fn distance(self) -> Option<Distance> {
        match self {
            Addend::Integer(n) => Some(Distance::HalfSteps(n)),
            Addend::Interval(i) => Some(Distance::Interval(i)),
            Addend::Qualified(q) => Some(Distance::Qualified(q)),
            Addend::Chroma(_) => None,
        }
    }
}

impl From<HalfSteps> for Addend {
    fn from(n: HalfSteps) -> Self {
        Addend::Integer(n)
    }
}

impl From<Chroma> for Addend {
    fn from(c: Chroma) -> Self {
        Addend::Chroma(c)
    }
}

impl From<Interval> for Addend {
    fn from(i: Interval) -> Self {
        Addend::Interval(i)
    }
}

impl From<QualifiedInterval> for Addend {
    fn from(q: QualifiedInterval) -> Self {
        Addend::Qualified(q)
    }
}

impl From<Distance> for Addend {
    fn from(d: Distance) -> Self {
        match d {
            Distance::HalfSteps(n) => Addend::Integer(n),
            Distance::Interval(i) => Addend::Interval(i),
            Distance::Qualified(q) => Addend::Qualified(q),
        }
    }
}

/// Result of [`Chroma::plus`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sum {
    Chroma(Chroma),
    /// Two chroma added together
    Dyad(ChromaSet),
}

impl Sum {
    pub fn chroma(&self) -> Option<Chroma> {
        match self {
            Sum::Chroma(c) => Some(*c),
            Sum::Dyad(_) => None,
        }
    }

    pub fn into_set(self) -> ChromaSet {
        match self {
            Sum::Chroma(c) => ChromaSet::from([c]),
            Sum::Dyad(set) => set,
        }
    }
}

/// Result of [`Chroma::minus`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difference {
    Chroma(Chroma),
    /// One chroma minus another: the interval from the right operand up
    Interval(Interval),
}

impl Difference {
    pub fn chroma(self) -> Option<Chroma> {
        match self {
            Difference::Chroma(c) => Some(c),
            Difference::Interval(_) => None,
        }
    }

    pub fn interval(self) -> Option<Interval> {
        match self {
            Difference::Interval(i) => Some(i),
            Difference::Chroma(_) => None,
        }
    }
}

impl Chroma {
    /// Add any operand: an integer augments, an interval augments along
    /// the letter path, another chroma forms a dyad.
    pub fn plus(self, addend: impl Into<Addend>) -> Sum {
        match addend.into() {
            Addend::Integer(n) => Sum::Chroma(self.augment(n)),
            Addend::Interval(i) => Sum::Chroma(self.augment_by(i)),
            Addend::Qualified(q) => Sum::Chroma(self.augment_by(q.interval())),
            Addend::Chroma(other) => Sum::Dyad(ChromaSet::from([self, other])),
        }
    }

    /// Subtract any operand. Subtracting a chroma yields the interval from
    /// it up to `self`.
    pub fn minus(self, addend: impl Into<Addend>) -> Difference {
        match addend.into() {
            Addend::Integer(n) => Difference::Chroma(self.diminish(n)),
            Addend::Interval(i) => Difference::Chroma(self.diminish_by(i)),
            Addend::Qualified(q) => Difference::Chroma(self.diminish_by(q.interval())),
            Addend::Chroma(other) => Difference::Interval(self.interval_from(other)),
        }
    }
}

impl Add<HalfSteps> for Chroma {
    type Output = Chroma;

    fn add(self, rhs: HalfSteps) -> Chroma {
        self.augment(rhs)
    }
}

impl Add<Interval> for Chroma {
    type Output = Chroma;

    fn add(self, rhs: Interval) -> Chroma {
        self.augment_by(rhs)
    }
}

impl Add<QualifiedInterval> for Chroma {
    type Output = Chroma;

    fn add(self, rhs: QualifiedInterval) -> Chroma {
        self.augment_by(rhs.interval())
    }
}

impl Add<Chroma> for Chroma {
    type Output = ChromaSet;

    fn add(self, rhs: Chroma) -> ChromaSet {
        ChromaSet::from([self, rhs])
    }
}

impl Add<Chroma> for Interval {
    type Output = Chroma;

    fn add(self, rhs: Chroma) -> Chroma {
        rhs.augment_by(self)
    }
}

impl Sub<HalfSteps> for Chroma {
    type Output = Chroma;

    fn sub(self, rhs: HalfSteps) -> Chroma {
        self.diminish(rhs)
    }
}

impl Sub<Interval> for Chroma {
    type Output = Chroma;

    fn sub(self, rhs: Interval) -> Chroma {
        self.diminish_by(rhs)
    }
}

impl Sub<QualifiedInterval> for Chroma {
    type Output = Chroma;

    fn sub(self, rhs: QualifiedInterval) -> Chroma {
        self.diminish_by(rhs.interval())
    }
}

impl Sub<Chroma> for Chroma {
    type Output = Interval;

    fn sub(self, rhs: Chroma) -> Interval {
        self.interval_from(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::chroma::*;
    use crate::music::interval::{
        AUGMENTED_FOURTH, MAJOR_SIXTH, MAJOR_TENTH, MAJOR_THIRD, MINOR_SIXTH, MINOR_THIRD,
        PERFECT_FIFTH,
    };

    #[test]
    fn test_integer_operands() {
        assert!((C + 1).same_spelling(CSHARP));
        assert!((C - 1).same_spelling(B));
        assert!((E - 1).same_spelling(EFLAT));
        assert!((A + 14).same_spelling(B));
        for x in ALL_CHROMA {
            for i in 0..12 {
                assert!((x + i).same_spelling(x.augment(i)));
                assert!((x - i).same_spelling(x.diminish(i)));
            }
        }
    }

    #[test]
    fn test_interval_operands() {
        assert!((C + MAJOR_THIRD).same_spelling(E));
        assert!((D + MAJOR_THIRD).same_spelling(FSHARP));
        assert!((EFLAT + PERFECT_FIFTH).same_spelling(BFLAT));
        assert!((F + AUGMENTED_FOURTH).same_spelling(B));
        assert!((MINOR_THIRD + A).same_spelling(C));
        assert!((E - MAJOR_THIRD).same_spelling(C));
        assert!((C + QualifiedInterval::from(MAJOR_TENTH)).same_spelling(E));
        assert!((E - QualifiedInterval::from(MAJOR_TENTH)).same_spelling(C));
    }

    #[test]
    fn test_chroma_difference_is_interval() {
        assert!((E - C).same_as(MAJOR_THIRD));
        assert!((C - E).same_as(MINOR_SIXTH));
        assert!((A - C).same_as(MAJOR_SIXTH));
        assert!((B - F).same_as(AUGMENTED_FOURTH));
    }

    #[test]
    fn test_difference_round_trips() {
        for x in ALL_CHROMA {
            for y in ALL_CHROMA {
                let z = x - y;
                assert_eq!(x - z, y, "{} - ({} - {})", x.name(), x.name(), y.name());
                assert_eq!(y + z, x, "{} + ({} - {})", y.name(), x.name(), y.name());
            }
        }
    }

    #[test]
    fn test_chroma_sum_is_dyad() {
        let dyad = C + G;
        assert_eq!(dyad.len(), 2);
        assert!(dyad.contains(C));
        assert!(dyad.contains(G));
        assert_eq!((C + C).len(), 1);
    }

    #[test]
    fn test_dynamic_dispatch() {
        assert_eq!(C.plus(4).chroma(), Some(E));
        assert_eq!(C.plus(MAJOR_THIRD).chroma(), Some(E));
        assert_eq!(C.plus(E), Sum::Dyad(ChromaSet::from([C, E])));
        assert_eq!(C.plus(E).into_set().len(), 2);
        assert_eq!(C.plus(4).into_set().len(), 1);

        assert_eq!(E.minus(4).chroma(), Some(C));
        assert_eq!(E.minus(MAJOR_THIRD).chroma(), Some(C));
        let interval = E.minus(C).interval();
        assert!(interval.is_some_and(|i| i.same_as(MAJOR_THIRD)));
        assert_eq!(E.minus(C).chroma(), None);
    }

    #[test]
    fn test_addend_conversions() {
        assert_eq!(Addend::from(3).distance(), Some(Distance::HalfSteps(3)));
        assert_eq!(Addend::from(C).distance(), None);
        assert_eq!(
            Addend::from(Distance::from(PERFECT_FIFTH)),
            Addend::Interval(PERFECT_FIFTH)
        );
        assert_eq!(Distance::from(PERFECT_FIFTH).half_steps(), 7);
        assert_eq!(Distance::from(QualifiedInterval::from(MAJOR_TENTH)).half_steps(), 16);
    }
}
