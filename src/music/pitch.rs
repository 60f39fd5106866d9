// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitches: a chroma in a specific octave.
//!
//! Octave 0 contains middle C. This departs from MIDI numbering, where
//! middle C is C4. A pitch's integer value is `octave * 12 + chroma.value()`,
//! so pitches are totally ordered by sound regardless of spelling.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

use super::addend::Distance;
use super::chroma::{Chroma, Preference, C};
use super::interval::{Interval, QualifiedInterval};
use super::{octave_reduce, HalfSteps, Notation, OCTAVE};
use crate::error::{Result, TheoryError};

/// A spelled chroma at an octave
#[derive(Clone, Copy)]
pub struct Pitch {
    chroma: Chroma,
    octave: i32,
}

pub const MIDDLE_C: Pitch = Pitch::new(C, 0);

impl Pitch {
    pub const fn new(chroma: Chroma, octave: i32) -> Self {
        Self { chroma, octave }
    }

    /// The canonical pitch for an integer value
    pub fn from_value(value: HalfSteps, preference: Preference) -> Self {
        let (pitch_class, octave) = octave_reduce(value, OCTAVE);
        Pitch::new(Chroma::from_value(pitch_class, preference), octave)
    }

    /// Parse a chroma name followed by an octave number, e.g. "C#0",
    /// "EFLAT-1" or "Dis2"
    pub fn from_name(name: &str) -> Result<Self> {
        let unknown = || TheoryError::UnknownChroma(name.to_string());
        let trimmed = name.trim();
        let split = trimmed
            .char_indices()
            .skip(1)
            .find(|(_, c)| c.is_ascii_digit() || *c == '-')
            .map(|(i, _)| i)
            .ok_or_else(unknown)?;
        let chroma = Chroma::from_name(&trimmed[..split])?;
        let octave: i32 = trimmed[split..].parse().map_err(|_| unknown())?;
        Ok(Pitch::new(chroma, octave))
    }

    pub fn chroma(self) -> Chroma {
        self.chroma
    }

    pub fn octave(self) -> i32 {
        self.octave
    }

    /// Half-steps from middle C
    pub fn value(self) -> HalfSteps {
        self.octave * OCTAVE + self.chroma.value()
    }

    /// Identity: same spelling in the same octave
    pub fn same_as(self, other: Pitch) -> bool {
        self.chroma.same_spelling(other.chroma) && self.octave == other.octave
    }

    pub fn name(self) -> String {
        format!("{}{}", self.chroma.name(), self.octave)
    }

    /// Raise by half-steps or by an interval.
    ///
    /// Integer distances spell the new chroma with a sharp preference and
    /// bump the octave when the pitch class wraps. Interval distances
    /// follow the letter path and solve the octave from the exact total.
    pub fn augmented(self, distance: impl Into<Distance>) -> Pitch {
        match distance.into() {
            Distance::HalfSteps(n) => {
                let (step, octaves) = octave_reduce(n, OCTAVE);
                let chroma = self.chroma.augment(step);
                let mut octave = self.octave + octaves;
                if chroma.value() < self.chroma.value() {
                    octave += 1;
                }
                Pitch::new(chroma, octave)
            }
            Distance::Interval(i) => {
                self.respelled(self.chroma.augment_by(i), self.value() + i.half_steps())
            }
            Distance::Qualified(q) => self.respelled(
                self.chroma.augment_by(q.interval()),
                self.value() + q.half_steps(),
            ),
        }
    }

    /// Lower by half-steps or by an interval
    pub fn diminished(self, distance: impl Into<Distance>) -> Pitch {
        match distance.into() {
            Distance::HalfSteps(n) => {
                let (step, octaves) = octave_reduce(n, OCTAVE);
                let chroma = self.chroma.diminish(step);
                let mut octave = self.octave - octaves;
                if chroma.value() > self.chroma.value() {
                    octave -= 1;
                }
                Pitch::new(chroma, octave)
            }
            Distance::Interval(i) => {
                self.respelled(self.chroma.diminish_by(i), self.value() - i.half_steps())
            }
            Distance::Qualified(q) => self.respelled(
                self.chroma.diminish_by(q.interval()),
                self.value() - q.half_steps(),
            ),
        }
    }

    /// `chroma` placed in whichever octave gives exactly `target`
    fn respelled(self, chroma: Chroma, target: HalfSteps) -> Pitch {
        Pitch::new(chroma, (target - chroma.value()).div_euclid(OCTAVE))
    }

    /// The interval from `lower` up to `self`. Negative octave counts
    /// mean `lower` is actually above.
    pub fn interval_from(self, lower: Pitch) -> QualifiedInterval {
        let simple = self.chroma.interval_from(lower.chroma);
        let total = self.value() - lower.value();
        QualifiedInterval::new(simple, (total - simple.half_steps()).div_euclid(OCTAVE))
    }

    /// Lilypond absolute octave marks: `c'` is middle C, `c` the octave
    /// below, `c,` the one below that.
    fn octave_marks(self) -> String {
        match self.octave {
            o if o >= 0 => "'".repeat(o as usize + 1),
            -1 => String::new(),
            o => ",".repeat((-1 - o) as usize),
        }
    }
}

impl Notation for Pitch {
    fn ascii(&self) -> String {
        format!("{}{}", self.chroma.ascii(), self.octave)
    }

    fn unicode(&self) -> String {
        format!("{}{}", self.chroma.unicode(), self.octave)
    }

    fn verbose(&self) -> String {
        format!("{} OCTAVE {}", self.chroma.verbose(), self.octave)
    }

    fn lilypond(&self) -> String {
        format!("{}{}", self.chroma.lilypond(), self.octave_marks())
    }
}

impl PartialEq for Pitch {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Eq for Pitch {}

impl Hash for Pitch {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

impl PartialOrd for Pitch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pitch {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl From<Pitch> for HalfSteps {
    fn from(p: Pitch) -> Self {
        p.value()
    }
}

impl fmt::Debug for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ascii())
    }
}

impl Add<HalfSteps> for Pitch {
    type Output = Pitch;

    fn add(self, rhs: HalfSteps) -> Pitch {
        self.augmented(rhs)
    }
}

impl Add<Interval> for Pitch {
    type Output = Pitch;

    fn add(self, rhs: Interval) -> Pitch {
        self.augmented(rhs)
    }
}

impl Add<QualifiedInterval> for Pitch {
    type Output = Pitch;

    fn add(self, rhs: QualifiedInterval) -> Pitch {
        self.augmented(rhs)
    }
}

impl Sub<HalfSteps> for Pitch {
    type Output = Pitch;

    fn sub(self, rhs: HalfSteps) -> Pitch {
        self.diminished(rhs)
    }
}

impl Sub<Interval> for Pitch {
    type Output = Pitch;

    fn sub(self, rhs: Interval) -> Pitch {
        self.diminished(rhs)
    }
}

impl Sub<QualifiedInterval> for Pitch {
    type Output = Pitch;

    fn sub(self, rhs: QualifiedInterval) -> Pitch {
        self.diminished(rhs)
    }
}

impl Sub<Pitch> for Pitch {
    type Output = QualifiedInterval;

    fn sub(self, rhs: Pitch) -> QualifiedInterval {
        self.interval_from(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::chroma::*;
    use crate::music::interval::*;

    #[test]
    fn test_middle_c() {
        assert_eq!(MIDDLE_C.value(), 0);
        assert!(MIDDLE_C.same_as(Pitch::new(C, 0)));
        assert_eq!(Pitch::new(A, -1).value(), -3);
        assert_eq!(Pitch::new(G, 1).value(), 19);
    }

    #[test]
    fn test_value_ordering() {
        assert!(Pitch::new(B, -1) < MIDDLE_C);
        assert!(Pitch::new(CSHARP, 0) > MIDDLE_C);
        assert_eq!(Pitch::new(CSHARP, 2), Pitch::new(DFLAT, 2));
        assert!(!Pitch::new(CSHARP, 2).same_as(Pitch::new(DFLAT, 2)));
    }

    #[test]
    fn test_augmented_by_integer() {
        let b = Pitch::new(B, 0);
        let up = b.augmented(1);
        assert!(up.same_as(Pitch::new(C, 1)));

        let far = MIDDLE_C.augmented(26);
        assert!(far.same_as(Pitch::new(D, 2)));

        assert!((MIDDLE_C + 12).same_as(Pitch::new(C, 1)));
        assert!((MIDDLE_C + 0).same_as(MIDDLE_C));
    }

    #[test]
    fn test_diminished_by_integer() {
        let down = MIDDLE_C.diminished(1);
        assert!(down.same_as(Pitch::new(B, -1)));
        assert!((Pitch::new(E, 1) - 1).same_as(Pitch::new(EFLAT, 1)));
        assert!((MIDDLE_C - 24).same_as(Pitch::new(C, -2)));
    }

    #[test]
    fn test_integer_arithmetic_is_exact() {
        for x in ALL_CHROMA {
            for octave in -2..=2 {
                let p = Pitch::new(x, octave);
                for i in -30..=30 {
                    assert_eq!(p.augmented(i).value(), p.value() + i, "{p:?} + {i}");
                    assert_eq!(p.diminished(i).value(), p.value() - i, "{p:?} - {i}");
                }
            }
        }
    }

    #[test]
    fn test_interval_arithmetic_is_exact() {
        for x in ALL_CHROMA {
            let p = Pitch::new(x, 0);
            for interval in Interval::table().iter().copied() {
                assert_eq!(
                    p.augmented(interval).value(),
                    p.value() + interval.half_steps(),
                    "{p:?} + {interval}"
                );
                assert_eq!(
                    p.diminished(interval).value(),
                    p.value() - interval.half_steps(),
                    "{p:?} - {interval}"
                );
            }
        }
    }

    #[test]
    fn test_augmented_by_interval_spells() {
        let b = Pitch::new(B, 0);
        assert!((b + MINOR_SECOND).same_as(Pitch::new(C, 1)));
        // the octave follows the sounding value, so B# lands in octave 1
        assert!((b + AUGMENTED_UNISON).same_as(Pitch::new(BSHARP, 1)));
        assert!((MIDDLE_C - AUGMENTED_UNISON).same_as(Pitch::new(CFLAT, -1)));
        assert!((MIDDLE_C + MAJOR_TENTH).same_as(Pitch::new(E, 1)));
        let qualified = QualifiedInterval::new(PERFECT_FIFTH, 2);
        assert!((MIDDLE_C + qualified).same_as(Pitch::new(G, 2)));
        assert!((Pitch::new(E, 1) - MAJOR_TENTH).same_as(MIDDLE_C));
        assert!((MIDDLE_C - MINOR_THIRD).same_as(Pitch::new(A, -1)));
    }

    #[test]
    fn test_interval_between_pitches() {
        let tenth = Pitch::new(E, 1).interval_from(MIDDLE_C);
        assert!(tenth.interval().same_as(MAJOR_THIRD));
        assert_eq!(tenth.octaves(), 1);

        let fifth = Pitch::new(G, 0) - MIDDLE_C;
        assert!(fifth.interval().same_as(PERFECT_FIFTH));
        assert_eq!(fifth.octaves(), 0);

        for x in [C, FSHARP, BFLAT, EDOUBLESHARP] {
            let low = Pitch::new(x, -1);
            for interval in Interval::simple_intervals() {
                let high = low + interval;
                assert_eq!((high - low).half_steps(), interval.half_steps());
            }
        }
    }

    #[test]
    fn test_renderings() {
        let p = Pitch::new(CSHARP, 0);
        assert_eq!(p.ascii(), "C#0");
        assert_eq!(p.unicode(), "C\u{266F}0");
        assert_eq!(p.verbose(), "C SHARP OCTAVE 0");
        assert_eq!(p.name(), "CSHARP0");
        assert_eq!(MIDDLE_C.lilypond(), "c'");
        assert_eq!(Pitch::new(EFLAT, 1).lilypond(), "ees''");
        assert_eq!(Pitch::new(A, -1).lilypond(), "a");
        assert_eq!(Pitch::new(G, -3).lilypond(), "g,,");
    }

    #[test]
    fn test_from_name() {
        assert!(Pitch::from_name("C#0")
            .unwrap()
            .same_as(Pitch::new(CSHARP, 0)));
        assert!(Pitch::from_name("EFLAT-1")
            .unwrap()
            .same_as(Pitch::new(EFLAT, -1)));
        assert!(Pitch::from_name("Dis2")
            .unwrap()
            .same_as(Pitch::new(DSHARP, 2)));
        assert!(Pitch::from_name("C").is_err());
        assert!(Pitch::from_name("H3").is_err());
    }

    #[test]
    fn test_from_value() {
        assert!(Pitch::from_value(13, Preference::Sharp).same_as(Pitch::new(CSHARP, 1)));
        assert!(Pitch::from_value(13, Preference::Flat).same_as(Pitch::new(DFLAT, 1)));
        assert!(Pitch::from_value(-1, Preference::Sharp).same_as(Pitch::new(B, -1)));
    }
}
